//! Fuzzy equality for short natural-language sentences.
//!
//! Sentences are lowercased, stripped of punctuation and split into words.
//! Words are compared by the overlap of their fixed-width subtokens, and the
//! sentences by how many of their words pair up. Both levels score with a
//! Tanimoto coefficient and pair elements greedily, first fit.
//!
//! Cost per comparison is `O(n1·n2·L²)` for `n1`, `n2` words of at most `L`
//! units, which is fine for sentences but grows quickly for paragraphs.
//!
//! ```rust
//! use fuzzy_sentence::FuzzyComparer;
//!
//! let comparer = FuzzyComparer::default();
//! assert_eq!(comparer.calculate_similarity("The quick brown fox", "The quick brown fox."), 1.0);
//! assert!(!comparer.is_fuzzy_equal("hi", "hello"));
//! ```
mod builder;
mod error;
mod matching;
mod structs;
mod text;

pub use builder::FuzzyComparerBuilder;
pub use error::{ConfigError, Result};
pub use matching::greedy_match;
pub use structs::*;
pub use text::normalize;

use matching::{subtoken_similarity, tanimoto};
use tracing::trace;

impl TryFrom<ComparerConfig> for FuzzyComparer {
    type Error = ConfigError;

    fn try_from(config: ComparerConfig) -> Result<Self> {
        FuzzyComparerBuilder::from(config).build()
    }
}

/// Sentence comparison engine
impl FuzzyComparer {
    /// Builds a comparer counting in chars.
    ///
    /// Fails when `threshold_sentence <= 0`, either length is zero, or
    /// `subtoken_length > min_word_length`.
    pub fn new(
        threshold_sentence: f32,
        threshold_word: f32,
        min_word_length: usize,
        subtoken_length: usize,
    ) -> Result<Self> {
        FuzzyComparerBuilder::new()
            .threshold_sentence(threshold_sentence)
            .threshold_word(threshold_word)
            .min_word_length(min_word_length)
            .subtoken_length(subtoken_length)
            .build()
    }

    pub fn from_config(config: ComparerConfig) -> Result<Self> {
        Self::try_from(config)
    }

    #[must_use]
    pub fn config(&self) -> &ComparerConfig {
        &self.config
    }

    #[must_use]
    pub fn threshold_sentence(&self) -> f32 {
        self.config.threshold_sentence
    }

    #[must_use]
    pub fn threshold_word(&self) -> f32 {
        self.config.threshold_word
    }

    #[must_use]
    pub fn min_word_length(&self) -> usize {
        self.config.min_word_length
    }

    #[must_use]
    pub fn subtoken_length(&self) -> usize {
        self.config.subtoken_length
    }

    #[must_use]
    pub fn unit(&self) -> TextUnit {
        self.config.unit
    }

    /// Splits a normalized sentence into words of at least
    /// [`min_word_length`](Self::min_word_length) units.
    #[must_use]
    pub fn tokenize(&self, normalized: &str) -> Vec<String> {
        text::tokenize(normalized, self.config.min_word_length, self.config.unit)
    }

    #[inline]
    fn subtokens<'a>(&self, word: &'a str) -> Vec<&'a str> {
        self.config.unit.windows(word, self.config.subtoken_length)
    }

    /// Word-level Tanimoto coefficient over subtokens.
    ///
    /// Words shorter than one subtoken score `0.0`.
    #[must_use]
    pub fn word_similarity(&self, a: &str, b: &str) -> f32 {
        subtoken_similarity(&self.subtokens(a), &self.subtokens(b))
    }

    #[must_use]
    pub fn is_fuzzy_equal_words(&self, a: &str, b: &str) -> bool {
        self.config.threshold_word <= self.word_similarity(a, b)
    }

    /// Full comparison of two sentences with every token pairing.
    ///
    /// Blank (empty or whitespace-only) sentences are handled up front: two
    /// blanks score `1.0`, one blank scores `0.0`. Two sentences whose words
    /// are all shorter than `min_word_length` also score `1.0`.
    pub fn compare(&self, first: &str, second: &str) -> SentenceMatch {
        match (is_blank(first), is_blank(second)) {
            (true, true) => return SentenceMatch::blank(1.0),
            (true, false) | (false, true) => return SentenceMatch::blank(0.0),
            (false, false) => {}
        }

        let first_tokens = self.tokenize(&normalize(first));
        let second_tokens = self.tokenize(&normalize(second));

        let first_subs: Vec<Vec<&str>> = first_tokens.iter().map(|t| self.subtokens(t)).collect();
        let second_subs: Vec<Vec<&str>> =
            second_tokens.iter().map(|t| self.subtokens(t)).collect();

        let threshold = self.config.threshold_word;
        let pairs = greedy_match(&first_subs, &second_subs, |a, b| {
            threshold <= subtoken_similarity(a, b)
        });

        let (n1, n2, m) = (first_tokens.len(), second_tokens.len(), pairs.len());
        let similarity = if n1 + n2 == 0 {
            1.0
        } else {
            tanimoto(m, n1, n2)
        };
        trace!(
            first_tokens = n1,
            second_tokens = n2,
            matched = m,
            similarity,
            "compared sentences"
        );

        let matches = pairs
            .into_iter()
            .map(|(i, j)| TokenMatch {
                first_index: i,
                second_index: j,
                first: first_tokens[i].clone(),
                second: second_tokens[j].clone(),
                similarity: subtoken_similarity(&first_subs[i], &second_subs[j]),
            })
            .collect();

        SentenceMatch {
            similarity,
            first_tokens,
            second_tokens,
            matches,
        }
    }

    /// Sentence-level coefficient ∈ `[0,1]`.
    #[must_use]
    pub fn calculate_similarity(&self, first: &str, second: &str) -> f32 {
        self.compare(first, second).similarity
    }

    /// `threshold_sentence <= calculate_similarity(first, second)`.
    #[must_use]
    pub fn is_fuzzy_equal(&self, first: &str, second: &str) -> bool {
        self.config.threshold_sentence <= self.calculate_similarity(first, second)
    }

    /// Like [`calculate_similarity`](Self::calculate_similarity); a missing
    /// sentence counts as blank.
    #[must_use]
    pub fn calculate_similarity_opt(&self, first: Option<&str>, second: Option<&str>) -> f32 {
        self.calculate_similarity(first.unwrap_or_default(), second.unwrap_or_default())
    }

    #[must_use]
    pub fn is_fuzzy_equal_opt(&self, first: Option<&str>, second: Option<&str>) -> bool {
        self.config.threshold_sentence <= self.calculate_similarity_opt(first, second)
    }
}

#[inline]
fn is_blank(sentence: &str) -> bool {
    sentence.trim().is_empty()
}

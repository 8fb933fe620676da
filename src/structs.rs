use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_THRESHOLD_SENTENCE: f32 = 0.25;
pub const DEFAULT_THRESHOLD_WORD: f32 = 0.45;
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;
pub const DEFAULT_SUBTOKEN_LENGTH: usize = 2;

/// What counts as one "character" when measuring tokens and cutting subtokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextUnit {
    /// Unicode scalar values.
    #[default]
    Char,
    /// Extended grapheme clusters.
    Grapheme,
}

/// Serializable comparer settings.
///
/// Missing fields fall back to the defaults, so a partial document such as
/// `{"threshold_word": 0.5}` is valid input for [`FuzzyComparer::from_config`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparerConfig {
    pub threshold_sentence: f32,
    pub threshold_word: f32,
    pub min_word_length: usize,
    pub subtoken_length: usize,
    pub unit: TextUnit,
}

impl Default for ComparerConfig {
    fn default() -> Self {
        Self {
            threshold_sentence: DEFAULT_THRESHOLD_SENTENCE,
            threshold_word: DEFAULT_THRESHOLD_WORD,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            subtoken_length: DEFAULT_SUBTOKEN_LENGTH,
            unit: TextUnit::Char,
        }
    }
}

/// Immutable sentence comparer. Holds no scratch state, so one instance can
/// be shared by reference across threads.
#[derive(Clone, PartialEq, Default)]
pub struct FuzzyComparer {
    pub(crate) config: ComparerConfig,
}

impl fmt::Debug for FuzzyComparer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = &mut f.debug_struct("FuzzyComparer");
        s = s
            .field("threshold_sentence", &self.config.threshold_sentence)
            .field("threshold_word", &self.config.threshold_word)
            .field("min_word_length", &self.config.min_word_length)
            .field("subtoken_length", &self.config.subtoken_length);
        if self.config.unit != TextUnit::Char {
            s = s.field("unit", &self.config.unit);
        }
        s.finish()
    }
}

/// One greedy pairing between a token of the first and of the second sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenMatch {
    /// Position in [`SentenceMatch::first_tokens`].
    pub first_index: usize,
    /// Position in [`SentenceMatch::second_tokens`].
    pub second_index: usize,
    pub first: String,
    pub second: String,
    /// Word-level Tanimoto coefficient ∈ `[0,1]`.
    pub similarity: f32,
}

/// Result returned by [`FuzzyComparer::compare`].
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceMatch {
    /// Sentence-level coefficient ∈ `[0,1]`.
    pub similarity: f32,
    pub first_tokens: Vec<String>,
    pub second_tokens: Vec<String>,
    /// Pairings in order of `first_index`.
    pub matches: Vec<TokenMatch>,
}

impl SentenceMatch {
    /// Number of matched token pairs.
    #[must_use]
    pub fn matched(&self) -> usize {
        self.matches.len()
    }

    pub(crate) fn blank(similarity: f32) -> Self {
        Self {
            similarity,
            first_tokens: Vec::new(),
            second_tokens: Vec::new(),
            matches: Vec::new(),
        }
    }
}

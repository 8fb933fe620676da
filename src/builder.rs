use crate::error::{ConfigError, Result};
use crate::{ComparerConfig, FuzzyComparer, TextUnit};
use tracing::{debug, warn};

/// Builder for [`FuzzyComparer`].
///
/// ```rust
/// use fuzzy_sentence::FuzzyComparerBuilder;
///
/// let comparer = FuzzyComparerBuilder::new()
///     .threshold_word(0.4)
///     .build()
///     .unwrap();
///
/// assert!(comparer.is_fuzzy_equal("The quick brown fox", "the quik brown fox!"));
/// ```
#[derive(Debug, Default)]
pub struct FuzzyComparerBuilder {
    config: ComparerConfig,
}

impl FuzzyComparerBuilder {
    /// Start with the default thresholds (0.25 / 0.45) and lengths (3 / 2).
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ComparerConfig::default(),
        }
    }

    /// Minimum sentence coefficient for two sentences to be fuzzily equal.
    #[must_use]
    pub fn threshold_sentence(mut self, value: f32) -> Self {
        self.config.threshold_sentence = value;
        self
    }

    /// Minimum word coefficient for two tokens to be fuzzily equal.
    #[must_use]
    pub fn threshold_word(mut self, value: f32) -> Self {
        self.config.threshold_word = value;
        self
    }

    /// Words shorter than this are dropped before matching.
    #[must_use]
    pub fn min_word_length(mut self, value: usize) -> Self {
        self.config.min_word_length = value;
        self
    }

    /// Width of the sliding window used to cut a word into subtokens.
    #[must_use]
    pub fn subtoken_length(mut self, value: usize) -> Self {
        self.config.subtoken_length = value;
        self
    }

    /// Count word lengths and subtokens in chars or grapheme clusters.
    #[must_use]
    pub fn unit(mut self, unit: TextUnit) -> Self {
        self.config.unit = unit;
        self
    }

    /// Validates the settings and builds an immutable [`FuzzyComparer`].
    ///
    /// ```rust
    /// use fuzzy_sentence::{ConfigError, FuzzyComparerBuilder};
    ///
    /// let err = FuzzyComparerBuilder::new()
    ///     .min_word_length(2)
    ///     .subtoken_length(3)
    ///     .build()
    ///     .unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     ConfigError::SubtokenLongerThanWord { subtoken_length: 3, min_word_length: 2 }
    /// );
    /// ```
    pub fn build(self) -> Result<FuzzyComparer> {
        if let Err(err) = Self::validate(&self.config) {
            warn!(error = %err, "rejected comparer configuration");
            return Err(err);
        }
        debug!(config = ?self.config, "built fuzzy comparer");
        Ok(FuzzyComparer {
            config: self.config,
        })
    }

    pub(crate) fn validate(config: &ComparerConfig) -> Result<()> {
        if config.threshold_sentence.is_nan() || config.threshold_sentence <= 0.0 {
            return Err(ConfigError::NonPositiveSentenceThreshold(
                config.threshold_sentence,
            ));
        }
        if config.min_word_length == 0 {
            return Err(ConfigError::ZeroMinWordLength);
        }
        if config.subtoken_length == 0 {
            return Err(ConfigError::ZeroSubtokenLength);
        }
        if config.subtoken_length > config.min_word_length {
            return Err(ConfigError::SubtokenLongerThanWord {
                subtoken_length: config.subtoken_length,
                min_word_length: config.min_word_length,
            });
        }
        Ok(())
    }
}

impl From<ComparerConfig> for FuzzyComparerBuilder {
    fn from(config: ComparerConfig) -> Self {
        Self { config }
    }
}

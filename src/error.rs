use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Rejected [`FuzzyComparer`](crate::FuzzyComparer) configuration.
///
/// Raised only while building a comparer, never by a comparison.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("sentence threshold must be greater than zero, got {0}")]
    NonPositiveSentenceThreshold(f32),

    #[error("minimum word length must be greater than zero")]
    ZeroMinWordLength,

    #[error("subtoken length must be greater than zero")]
    ZeroSubtokenLength,

    /// A word shorter than one subtoken would have nothing to compare.
    #[error(
        "subtoken length ({subtoken_length}) must not exceed minimum word length ({min_word_length})"
    )]
    SubtokenLongerThanWord {
        subtoken_length: usize,
        min_word_length: usize,
    },
}

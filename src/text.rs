use crate::TextUnit;
use unicode_segmentation::UnicodeSegmentation;

/// Lowercases `sentence` and keeps only letters, digits and plain spaces.
///
/// Punctuation is removed without substitution, so `"well-known"` becomes
/// `"wellknown"`. Runs of spaces are kept as they are.
///
/// ```
/// assert_eq!(fuzzy_sentence::normalize("Hello,  World!"), "hello  world");
/// ```
#[must_use]
pub fn normalize(sentence: &str) -> String {
    sentence
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|&c| c.is_alphanumeric() || c == ' ')
        .collect()
}

impl TextUnit {
    /// Length of `word` measured in this unit.
    #[inline]
    pub fn count(self, word: &str) -> usize {
        match self {
            TextUnit::Char => word.chars().count(),
            TextUnit::Grapheme => word.graphemes(true).count(),
        }
    }

    /// Byte offset of every unit start, followed by `word.len()`.
    fn boundaries(self, word: &str) -> Vec<usize> {
        let mut offsets: Vec<usize> = match self {
            TextUnit::Char => word.char_indices().map(|(b, _)| b).collect(),
            TextUnit::Grapheme => word.grapheme_indices(true).map(|(b, _)| b).collect(),
        };
        offsets.push(word.len());
        offsets
    }

    /// Overlapping windows of `width` units, advancing by one unit.
    ///
    /// A word of `L` units yields `L - width + 1` windows, or none when it is
    /// shorter than `width`.
    pub fn windows(self, word: &str, width: usize) -> Vec<&str> {
        if width == 0 {
            return Vec::new();
        }
        let offsets = self.boundaries(word);
        let units = offsets.len() - 1;
        if units < width {
            return Vec::new();
        }
        (0..=units - width)
            .map(|i| &word[offsets[i]..offsets[i + width]])
            .collect()
    }
}

/// Splits on single spaces and keeps pieces of at least `min_len` units.
pub(crate) fn tokenize(normalized: &str, min_len: usize, unit: TextUnit) -> Vec<String> {
    normalized
        .split(' ')
        .filter(|piece| unit.count(piece) >= min_len)
        .map(str::to_owned)
        .collect()
}

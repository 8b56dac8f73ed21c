//! Dictionary loading
//!
//! The dictionary is a newline-delimited list of lowercase words, at most 15
//! symbols each. File order is preserved: candidate enumeration and tie
//! breaking are deterministic because every scan walks the same sequence.

use crate::core::Word;
use std::fmt;
use std::fs;
use std::path::Path;

/// An ordered, immutable collection of valid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
}

/// Error type for an unreadable dictionary artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    Unreadable { path: String, cause: String },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, cause } => write!(f, "{path}: {cause}"),
        }
    }
}

impl std::error::Error for DictionaryError {}

impl Dictionary {
    /// Wrap an already-validated word list, preserving its order
    #[must_use]
    pub const fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Load a dictionary from a newline-delimited file
    ///
    /// Lines that do not form a valid [`Word`] are skipped: cleaning is an
    /// offline responsibility (see the `prepare` command), so at query time
    /// a stray malformed line is dropped rather than treated as fatal.
    ///
    /// # Errors
    /// Returns `DictionaryError::Unreadable` if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let content =
            fs::read_to_string(&path).map_err(|e| DictionaryError::Unreadable {
                path: path.as_ref().display().to_string(),
                cause: e.to_string(),
            })?;

        Ok(Self::from_words(words_from_lines(&content)))
    }

    /// All words in file order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Is the dictionary empty?
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Convert newline-delimited text to words, skipping blank and invalid lines
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_lines_preserves_order() {
        let words = words_from_lines("ток\nдом\nсалат\n");
        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "ток");
        assert_eq!(words[1].text(), "дом");
        assert_eq!(words[2].text(), "салат");
    }

    #[test]
    fn words_from_lines_skips_blank_and_invalid() {
        let too_long = "а".repeat(16);
        let content = format!("ток\n\n  \nс л\n{too_long}\nдом");
        let words = words_from_lines(&content);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "ток");
        assert_eq!(words[1].text(), "дом");
    }

    #[test]
    fn words_from_lines_trims_whitespace() {
        let words = words_from_lines("  ток  \n\tдом\n");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "ток");
    }

    #[test]
    fn dictionary_from_words() {
        let dict = Dictionary::from_words(words_from_lines("ток\nдом"));
        assert_eq!(dict.len(), 2);
        assert!(!dict.is_empty());
        assert_eq!(dict.words()[1].text(), "дом");
    }

    #[test]
    fn dictionary_load_missing_file_names_path() {
        let err = Dictionary::load("/no/such/dictionary.txt").unwrap_err();
        let DictionaryError::Unreadable { path, .. } = err;
        assert!(path.contains("dictionary.txt"));
    }
}

//! Dictionary word representation
//!
//! A Word stores a lowercase word of at most 15 symbols. Board symbols are
//! Cyrillic in the reference configuration, so every positional access goes
//! through a pre-split `Vec<char>` rather than byte indexing.

use rustc_hash::FxHashMap;
use std::fmt;

/// Longest word that fits on the reference 15×15 board
pub const MAX_WORD_LEN: usize = 15;

/// A validated lowercase game word with per-symbol access
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    TooLong(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one symbol"),
            Self::TooLong(len) => {
                write!(f, "Word must be at most {MAX_WORD_LEN} symbols, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Word must contain only alphabetic symbols"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is lowercased. Alphabet membership (does the game define a
    /// value for every symbol?) is checked against the loaded letter values,
    /// not here.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - It is longer than 15 symbols
    /// - It contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use erudit_assistant::core::Word;
    ///
    /// let word = Word::new("салат").unwrap();
    /// assert_eq!(word.text(), "салат");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("сала7").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();
        let chars: Vec<char> = text.chars().collect();

        if chars.is_empty() {
            return Err(WordError::Empty);
        }
        if chars.len() > MAX_WORD_LEN {
            return Err(WordError::TooLong(chars.len()));
        }
        if !chars.iter().all(|c| c.is_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a symbol slice
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of symbols in the word (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a constructed Word, kept for the usual pairing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the symbol at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check if the word contains a specific symbol
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.chars.contains(&letter)
    }

    /// Get the count of each symbol in the word
    ///
    /// Used for rack-availability and letter-supply checks.
    #[inline]
    #[must_use]
    pub fn char_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

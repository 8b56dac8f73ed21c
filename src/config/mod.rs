//! Session configuration
//!
//! Letter values, letter supply, and the bonus grid are loaded once per
//! session from the three JSON artifacts and are read-only afterwards. Each
//! artifact fails independently so the caller can report exactly which file
//! is missing or malformed.

use crate::core::{BonusGrid, WILDCARD};
use rustc_hash::FxHashMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// File name of the letter-value artifact
pub const LETTERS_VALUES_FILENAME: &str = "letters_values.json";
/// File name of the letter-supply artifact
pub const LETTERS_AMOUNT_FILENAME: &str = "letters_amount.json";
/// File name of the bonus-grid artifact
pub const BOARD_BONUSES_FILENAME: &str = "board_bonuses.json";
/// File name of the dictionary artifact
pub const DICTIONARY_FILENAME: &str = "dictionary.txt";

/// Mapping from symbol to point value, wildcard included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterValues {
    values: FxHashMap<char, u32>,
}

impl LetterValues {
    /// Point value of a symbol, `None` if the game does not define it
    #[inline]
    #[must_use]
    pub fn value(&self, letter: char) -> Option<u32> {
        self.values.get(&letter).copied()
    }

    /// Point value of a symbol, zero for symbols the game does not define
    ///
    /// Scoring runs only after request validation has confirmed every symbol,
    /// so the zero branch is unreachable there.
    #[inline]
    #[must_use]
    pub fn value_or_zero(&self, letter: char) -> u32 {
        self.value(letter).unwrap_or(0)
    }

    /// Does the game define this symbol?
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.values.contains_key(&letter)
    }
}

/// Mapping from symbol to how many such tiles exist in the full game set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSupply {
    counts: FxHashMap<char, u8>,
}

impl LetterSupply {
    /// Total tiles of one symbol in the game set
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u8 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Iterate over (symbol, count) pairs
    pub fn counts(&self) -> impl Iterator<Item = (char, u8)> + '_ {
        self.counts.iter().map(|(&ch, &n)| (ch, n))
    }
}

/// All read-only session configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub values: LetterValues,
    pub supply: LetterSupply,
    pub bonuses: BonusGrid,
}

/// Error type for missing or malformed configuration artifacts
///
/// One variant per artifact, each carrying a human-readable cause, so the
/// caller can name the offending file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    LetterValues(String),
    LetterSupply(String),
    BoardBonuses(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LetterValues(cause) => {
                write!(f, "{LETTERS_VALUES_FILENAME}: {cause}")
            }
            Self::LetterSupply(cause) => {
                write!(f, "{LETTERS_AMOUNT_FILENAME}: {cause}")
            }
            Self::BoardBonuses(cause) => {
                write!(f, "{BOARD_BONUSES_FILENAME}: {cause}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Load all configuration artifacts from a directory
    ///
    /// # Errors
    /// Returns the `ConfigError` variant of the first artifact that is
    /// missing, malformed, or inconsistent (a supplied symbol without a
    /// value, or a missing wildcard entry).
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let values_text = fs::read_to_string(dir.join(LETTERS_VALUES_FILENAME))
            .map_err(|e| ConfigError::LetterValues(e.to_string()))?;
        let values = parse_letter_values(&values_text)?;

        let supply_text = fs::read_to_string(dir.join(LETTERS_AMOUNT_FILENAME))
            .map_err(|e| ConfigError::LetterSupply(e.to_string()))?;
        let supply = parse_letter_supply(&supply_text)?;

        let bonuses_text = fs::read_to_string(dir.join(BOARD_BONUSES_FILENAME))
            .map_err(|e| ConfigError::BoardBonuses(e.to_string()))?;
        let bonuses = parse_board_bonuses(&bonuses_text)?;

        let config = Self {
            values,
            supply,
            bonuses,
        };
        config.check_consistency()?;
        Ok(config)
    }

    fn check_consistency(&self) -> Result<(), ConfigError> {
        if !self.values.contains(WILDCARD) {
            return Err(ConfigError::LetterValues(format!(
                "missing an entry for the wildcard symbol {WILDCARD:?}"
            )));
        }
        for (letter, _) in self.supply.counts() {
            if !self.values.contains(letter) {
                return Err(ConfigError::LetterSupply(format!(
                    "symbol {letter:?} has a supply count but no point value"
                )));
            }
        }
        Ok(())
    }
}

/// Parse the letter-value artifact (JSON object: symbol → value)
///
/// # Errors
/// Returns `ConfigError::LetterValues` on malformed JSON or a key that is
/// not a single symbol.
pub fn parse_letter_values(text: &str) -> Result<LetterValues, ConfigError> {
    let raw: FxHashMap<String, u32> =
        serde_json::from_str(text).map_err(|e| ConfigError::LetterValues(e.to_string()))?;

    let mut values = FxHashMap::default();
    for (key, value) in raw {
        let letter = single_symbol(&key).ok_or_else(|| {
            ConfigError::LetterValues(format!("key {key:?} is not a single symbol"))
        })?;
        values.insert(letter, value);
    }
    Ok(LetterValues { values })
}

/// Parse the letter-supply artifact (JSON object: symbol → tile count)
///
/// # Errors
/// Returns `ConfigError::LetterSupply` on malformed JSON or a key that is
/// not a single symbol.
pub fn parse_letter_supply(text: &str) -> Result<LetterSupply, ConfigError> {
    let raw: FxHashMap<String, u8> =
        serde_json::from_str(text).map_err(|e| ConfigError::LetterSupply(e.to_string()))?;

    let mut counts = FxHashMap::default();
    for (key, count) in raw {
        let letter = single_symbol(&key).ok_or_else(|| {
            ConfigError::LetterSupply(format!("key {key:?} is not a single symbol"))
        })?;
        counts.insert(letter, count);
    }
    Ok(LetterSupply { counts })
}

/// Parse the bonus-grid artifact (JSON array of arrays of tags)
///
/// # Errors
/// Returns `ConfigError::BoardBonuses` on malformed JSON or an invalid grid.
pub fn parse_board_bonuses(text: &str) -> Result<BonusGrid, ConfigError> {
    let rows: Vec<Vec<String>> =
        serde_json::from_str(text).map_err(|e| ConfigError::BoardBonuses(e.to_string()))?;
    BonusGrid::from_rows(&rows).map_err(|e| ConfigError::BoardBonuses(e.to_string()))
}

fn single_symbol(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

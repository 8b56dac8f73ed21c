//! Player rack representation
//!
//! The rack is a multiset of at most 7 tiles. The wildcard tile `*` may stand
//! in for any letter; its symbol validity against the loaded letter values is
//! checked by the engine's request validation, together with letter-supply
//! conformance.

use rustc_hash::FxHashMap;
use std::fmt;

/// Maximum number of tiles a player may hold
pub const RACK_CAPACITY: usize = 7;

/// The wildcard tile symbol
pub const WILDCARD: char = '*';

/// Multiset of the tiles a player currently holds
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rack {
    counts: FxHashMap<char, u8>,
    total: usize,
}

/// Error type for invalid racks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RackError {
    Empty,
    TooManyTiles(usize),
    InvalidTile(char),
}

impl fmt::Display for RackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Rack must contain at least one tile"),
            Self::TooManyTiles(n) => {
                write!(f, "Rack must contain at most {RACK_CAPACITY} tiles, got {n}")
            }
            Self::InvalidTile(ch) => {
                write!(f, "Rack tile {ch:?} is neither a letter nor the wildcard")
            }
        }
    }
}

impl std::error::Error for RackError {}

impl Rack {
    /// Build a rack from a tile string such as `"салат"` or `"дом**"`
    ///
    /// The input is lowercased.
    ///
    /// # Errors
    /// Returns `RackError` if the string is empty, holds more than 7 tiles,
    /// or contains a symbol that is neither alphabetic nor the wildcard.
    pub fn from_tiles(tiles: &str) -> Result<Self, RackError> {
        let chars: Vec<char> = tiles.to_lowercase().chars().collect();

        if chars.is_empty() {
            return Err(RackError::Empty);
        }
        if chars.len() > RACK_CAPACITY {
            return Err(RackError::TooManyTiles(chars.len()));
        }

        let mut counts: FxHashMap<char, u8> = FxHashMap::default();
        for ch in chars.iter().copied() {
            if ch != WILDCARD && !ch.is_alphabetic() {
                return Err(RackError::InvalidTile(ch));
            }
            *counts.entry(ch).or_insert(0) += 1;
        }

        Ok(Self {
            counts,
            total: chars.len(),
        })
    }

    /// How many tiles of one letter the rack holds
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u8 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// How many wildcard tiles the rack holds
    #[inline]
    #[must_use]
    pub fn wildcards(&self) -> u8 {
        self.count(WILDCARD)
    }

    /// Total number of tiles on the rack
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Iterate over (letter, count) pairs, wildcard included
    pub fn counts(&self) -> impl Iterator<Item = (char, u8)> + '_ {
        self.counts.iter().map(|(&ch, &n)| (ch, n))
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tiles: Vec<(char, u8)> = self.counts().collect();
        tiles.sort_unstable();
        for (ch, n) in tiles {
            for _ in 0..n {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rack_from_tiles_valid() {
        let rack = Rack::from_tiles("салат").unwrap();
        assert_eq!(rack.total(), 5);
        assert_eq!(rack.count('а'), 2);
        assert_eq!(rack.count('с'), 1);
        assert_eq!(rack.count('я'), 0);
        assert_eq!(rack.wildcards(), 0);
    }

    #[test]
    fn rack_from_tiles_with_wildcards() {
        let rack = Rack::from_tiles("дом**").unwrap();
        assert_eq!(rack.total(), 5);
        assert_eq!(rack.wildcards(), 2);
    }

    #[test]
    fn rack_lowercases_input() {
        let rack = Rack::from_tiles("САЛАТ").unwrap();
        assert_eq!(rack.count('с'), 1);
        assert_eq!(rack.count('а'), 2);
    }

    #[test]
    fn rack_rejects_empty() {
        assert!(matches!(Rack::from_tiles(""), Err(RackError::Empty)));
    }

    #[test]
    fn rack_rejects_over_capacity() {
        assert!(matches!(
            Rack::from_tiles("абвгдежз"),
            Err(RackError::TooManyTiles(8))
        ));
        // Exactly 7 is fine
        assert!(Rack::from_tiles("абвгдеж").is_ok());
    }

    #[test]
    fn rack_rejects_non_tile_symbols() {
        assert!(matches!(
            Rack::from_tiles("дом7"),
            Err(RackError::InvalidTile('7'))
        ));
        assert!(matches!(
            Rack::from_tiles("до м"),
            Err(RackError::InvalidTile(' '))
        ));
    }

    #[test]
    fn display_is_sorted() {
        let rack = Rack::from_tiles("тсала").unwrap();
        assert_eq!(format!("{rack}"), "аалст");
    }
}

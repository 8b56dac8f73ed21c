//! Word filter
//!
//! Enumerates dictionary words satisfying one placement constraint together
//! with the player's tile availability. Only newly placed symbols consume
//! rack tiles: positions already fixed on the board cost nothing. A
//! shortfall of a symbol may be covered by wildcard tiles; the covered word
//! positions are reported so scoring can value them as zero.

use crate::core::{Rack, Word};
use crate::solver::pattern::{LinePattern, Slot};
use rustc_hash::FxHashMap;

/// An in-flight placement satisfying pattern and availability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub word: &'a Word,
    /// Absolute offset of the word's first symbol in its line
    pub offset: usize,
    /// Word positions whose tile is a wildcard, ascending
    pub wildcard_positions: Vec<usize>,
}

/// Lazily enumerate every candidate for one constraint
///
/// Words are visited in dictionary order and offsets in ascending order, so
/// the sequence is deterministic. Words failing either the pattern test or
/// the availability test are skipped entirely; no partial matches appear.
pub fn candidates_for<'a>(
    pattern: &'a LinePattern,
    rack: &'a Rack,
    words: &'a [Word],
) -> impl Iterator<Item = Candidate<'a>> + 'a {
    words.iter().flat_map(move |word| {
        pattern
            .placements_for(word)
            .into_iter()
            .filter_map(move |offset| {
                new_tile_assignment(word, pattern, offset, rack).map(|wildcard_positions| {
                    Candidate {
                        word,
                        offset,
                        wildcard_positions,
                    }
                })
            })
    })
}

/// Check tile availability for one placement
///
/// Returns the word positions that must be covered by wildcards (empty when
/// the rack covers everything), or `None` when the rack cannot supply the
/// newly placed symbols. Wildcards are assigned to the later occurrences of
/// a short symbol, in word order.
#[must_use]
pub fn new_tile_assignment(
    word: &Word,
    pattern: &LinePattern,
    offset: usize,
    rack: &Rack,
) -> Option<Vec<usize>> {
    let relative = offset - pattern.start();

    // Word positions placing a new tile, grouped per symbol in word order
    let mut new_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
    for (i, &ch) in word.chars().iter().enumerate() {
        if pattern.slots()[relative + i] == Slot::Open {
            new_positions.entry(ch).or_default().push(i);
        }
    }

    let mut wildcards_left = rack.wildcards();
    let mut blanks = Vec::new();
    for (&ch, positions) in &new_positions {
        let have = usize::from(rack.count(ch));
        if positions.len() > have {
            let short = positions.len() - have;
            if short > usize::from(wildcards_left) {
                return None;
            }
            wildcards_left -= short as u8;
            blanks.extend_from_slice(&positions[have..]);
        }
    }

    blanks.sort_unstable();
    Some(blanks)
}

/// Tile availability for a word built from the rack alone
///
/// The opening-move variant of [`new_tile_assignment`]: every position
/// places a new tile because the board is empty. Returns the wildcard-covered
/// positions, or `None` when the rack cannot spell the word.
#[must_use]
pub fn rack_assignment(word: &Word, rack: &Rack) -> Option<Vec<usize>> {
    let mut per_letter: FxHashMap<char, Vec<usize>> = FxHashMap::default();
    for (i, &ch) in word.chars().iter().enumerate() {
        per_letter.entry(ch).or_default().push(i);
    }

    let mut wildcards_left = rack.wildcards();
    let mut blanks = Vec::new();
    for (&ch, positions) in &per_letter {
        let have = usize::from(rack.count(ch));
        if positions.len() > have {
            let short = positions.len() - have;
            if short > usize::from(wildcards_left) {
                return None;
            }
            wildcards_left -= short as u8;
            blanks.extend_from_slice(&positions[have..]);
        }
    }

    blanks.sort_unstable();
    Some(blanks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::blocking::Mark;
    use crate::solver::pattern::line_patterns;
    use crate::wordlists::loader::words_from_lines;

    fn pattern(text: &str) -> LinePattern {
        let marks: Vec<Mark> = text
            .chars()
            .map(|ch| match ch {
                '#' => Mark::Blocked,
                '.' => Mark::Open,
                letter => Mark::Letter(letter),
            })
            .collect();
        line_patterns(&marks).remove(0)
    }

    #[test]
    fn candidates_respect_pattern_and_rack() {
        let pattern = pattern("..ток");
        let words = words_from_lines("моток\nиток\nтост");
        let rack = Rack::from_tiles("мои").unwrap();

        let found: Vec<Candidate<'_>> = candidates_for(&pattern, &rack, &words).collect();
        let texts: Vec<(&str, usize)> = found
            .iter()
            .map(|c| (c.word.text(), c.offset))
            .collect();

        // "моток" places м,о at offsets 0-1; "иток" places и at offset 1;
        // "тост" does not fit the fixed letters
        assert_eq!(texts, vec![("моток", 0), ("иток", 1)]);
        assert!(found.iter().all(|c| c.wildcard_positions.is_empty()));
    }

    #[test]
    fn candidate_skipped_when_rack_lacks_tiles() {
        let pattern = pattern("..ток");
        let words = words_from_lines("моток");
        let rack = Rack::from_tiles("ик").unwrap(); // no м, no о

        assert_eq!(candidates_for(&pattern, &rack, &words).count(), 0);
    }

    #[test]
    fn fixed_letters_cost_no_tiles() {
        // The rack holds neither т, о nor к, but those come from the board
        let pattern = pattern("..ток");
        let words = words_from_lines("иток");
        let rack = Rack::from_tiles("и").unwrap();

        let found: Vec<Candidate<'_>> = candidates_for(&pattern, &rack, &words).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].offset, 1);
    }

    #[test]
    fn wildcard_covers_missing_letter() {
        let pattern = pattern("..ток");
        let words = words_from_lines("моток");
        let rack = Rack::from_tiles("м*").unwrap(); // wildcard stands in for о

        let found: Vec<Candidate<'_>> = candidates_for(&pattern, &rack, &words).collect();
        assert_eq!(found.len(), 1);
        // The о at word position 1 is the wildcard tile
        assert_eq!(found[0].wildcard_positions, vec![1]);
    }

    #[test]
    fn wildcards_cover_later_occurrences() {
        // Board supplies the leading м; the rack has both а tiles but no
        // second м, so the interior м (word position 2) is the wildcard
        let pattern = pattern("м...#");
        let words = words_from_lines("мама");
        let rack = Rack::from_tiles("а*а").unwrap();

        let found: Vec<Candidate<'_>> = candidates_for(&pattern, &rack, &words).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].offset, 0);
        assert_eq!(found[0].wildcard_positions, vec![2]);
    }

    #[test]
    fn not_enough_wildcards_rejected() {
        let pattern = pattern("..ток");
        let words = words_from_lines("моток");
        let rack = Rack::from_tiles("*").unwrap(); // needs м and о

        assert_eq!(candidates_for(&pattern, &rack, &words).count(), 0);
    }

    #[test]
    fn rack_assignment_covers_shortfall_with_wildcards() {
        let word = crate::core::Word::new("мама").unwrap();

        let full = Rack::from_tiles("маам").unwrap();
        assert_eq!(rack_assignment(&word, &full), Some(vec![]));

        let one_short = Rack::from_tiles("маа*").unwrap();
        assert_eq!(rack_assignment(&word, &one_short), Some(vec![2]));

        let two_short = Rack::from_tiles("аа*").unwrap();
        assert_eq!(rack_assignment(&word, &two_short), None);
    }

    #[test]
    fn new_tiles_never_exceed_rack_counts() {
        let pattern = pattern("..а..");
        let words = words_from_lines("лапа\nмама\nарка\nбарабан");
        let rack = Rack::from_tiles("лпа*").unwrap();

        let found: Vec<Candidate<'_>> = candidates_for(&pattern, &rack, &words).collect();
        assert!(!found.is_empty());

        for candidate in found {
            let relative = candidate.offset - pattern.start();
            let mut needed: FxHashMap<char, usize> = FxHashMap::default();
            for (i, &ch) in candidate.word.chars().iter().enumerate() {
                if pattern.slots()[relative + i] == Slot::Open
                    && !candidate.wildcard_positions.contains(&i)
                {
                    *needed.entry(ch).or_insert(0) += 1;
                }
            }
            for (ch, need) in needed {
                assert!(
                    need <= usize::from(rack.count(ch)),
                    "{} needs {need} of {ch:?}, rack has {}",
                    candidate.word,
                    rack.count(ch)
                );
            }
        }
    }
}

//! Pattern builder
//!
//! Converts a marked line into placement constraints. A constraint is a
//! maximal run of non-blocked cells, anchored at its absolute offset in the
//! line; runs of a single cell cannot host a word and are discarded.
//!
//! A word fits a constraint at some offset when it stays inside the run,
//! covers every fixed letter of the run, and matches each covered fixed
//! letter exactly. Covering every fixed letter mirrors the reference
//! behavior (existing letters are mandatory, open cells optional) while
//! keeping the word a contiguous sub-run: no interior cell may be skipped,
//! no word may float free of the run's letters, and no word may stop flush
//! against an uncovered letter.

use crate::core::Word;
use crate::solver::blocking::Mark;

/// One cell of a placement constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Open cell, may receive one new tile
    Open,
    /// Cell already holding this letter
    Fixed(char),
}

/// A placement constraint: a contiguous span of a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePattern {
    start: usize,
    slots: Vec<Slot>,
}

impl LinePattern {
    /// Absolute offset of the span's first cell in its line
    #[inline]
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Span length in cells
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True only for the degenerate empty span, which is never built
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The span's slots
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Relative indices of the first and last fixed letter, if any
    #[must_use]
    pub fn fixed_span(&self) -> Option<(usize, usize)> {
        let first = self
            .slots
            .iter()
            .position(|s| matches!(s, Slot::Fixed(_)))?;
        let last = self
            .slots
            .iter()
            .rposition(|s| matches!(s, Slot::Fixed(_)))?;
        Some((first, last))
    }

    /// Every absolute line offset where the word satisfies this constraint
    ///
    /// Offsets are returned in ascending order. A run without any fixed
    /// letter yields no placements: a word there would not connect to the
    /// board.
    #[must_use]
    pub fn placements_for(&self, word: &Word) -> Vec<usize> {
        let word_len = word.len();
        let Some((first_fixed, last_fixed)) = self.fixed_span() else {
            return Vec::new();
        };
        if word_len > self.len() {
            return Vec::new();
        }

        // The word must cover [first_fixed, last_fixed] entirely
        let earliest = last_fixed.saturating_sub(word_len - 1);
        let latest = first_fixed.min(self.len() - word_len);

        (earliest..=latest)
            .filter(|&offset| self.word_matches_at(word, offset))
            .map(|offset| self.start + offset)
            .collect()
    }

    fn word_matches_at(&self, word: &Word, offset: usize) -> bool {
        let mut places_new_tile = false;
        for (i, &ch) in word.chars().iter().enumerate() {
            match self.slots[offset + i] {
                Slot::Fixed(fixed) if fixed != ch => return false,
                Slot::Fixed(_) => {}
                Slot::Open => places_new_tile = true,
            }
        }
        places_new_tile
    }
}

/// Build the constraints of one marked line
///
/// Splits on blocked cells and discards runs shorter than 2 cells.
#[must_use]
pub fn line_patterns(marks: &[Mark]) -> Vec<LinePattern> {
    let mut patterns = Vec::new();
    let mut run_start = 0;

    for (i, mark) in marks.iter().chain(std::iter::once(&Mark::Blocked)).enumerate() {
        match mark {
            Mark::Blocked => {
                if i - run_start >= 2 {
                    let slots = marks[run_start..i]
                        .iter()
                        .map(|m| match m {
                            Mark::Letter(ch) => Slot::Fixed(*ch),
                            Mark::Open => Slot::Open,
                            Mark::Blocked => unreachable!("run contains no blocked cells"),
                        })
                        .collect();
                    patterns.push(LinePattern {
                        start: run_start,
                        slots,
                    });
                }
                run_start = i + 1;
            }
            Mark::Letter(_) | Mark::Open => {}
        }
    }

    patterns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks(text: &str) -> Vec<Mark> {
        // '#' blocked, '.' open, anything else a letter
        text.chars()
            .map(|ch| match ch {
                '#' => Mark::Blocked,
                '.' => Mark::Open,
                letter => Mark::Letter(letter),
            })
            .collect()
    }

    #[test]
    fn splits_on_blocked_and_drops_short_runs() {
        // Runs: "..а" (len 3), "б" (len 1, dropped), ".в" (len 2)
        let patterns = line_patterns(&marks("..а#б#.в"));
        assert_eq!(patterns.len(), 2);

        assert_eq!(patterns[0].start(), 0);
        assert_eq!(patterns[0].len(), 3);
        assert_eq!(
            patterns[0].slots(),
            &[Slot::Open, Slot::Open, Slot::Fixed('а')]
        );

        assert_eq!(patterns[1].start(), 6);
        assert_eq!(patterns[1].slots(), &[Slot::Open, Slot::Fixed('в')]);
    }

    #[test]
    fn fully_blocked_line_yields_nothing() {
        assert!(line_patterns(&marks("#####")).is_empty());
    }

    #[test]
    fn unblocked_line_is_one_run() {
        let patterns = line_patterns(&marks("..ток"));
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].start(), 0);
        assert_eq!(patterns[0].len(), 5);
    }

    #[test]
    fn runs_plus_blocked_gaps_reconstruct_the_line() {
        let line = marks("..а##.в.#ток");
        let patterns = line_patterns(&line);
        let blocked = line.iter().filter(|m| **m == Mark::Blocked).count();
        let covered: usize = patterns.iter().map(LinePattern::len).sum();
        assert_eq!(covered + blocked, line.len());
        assert!(patterns.iter().all(|p| p.len() >= 2));
    }

    #[test]
    fn fixed_span_locates_letters() {
        let patterns = line_patterns(&marks("..то.."));
        assert_eq!(patterns[0].fixed_span(), Some((2, 3)));

        let open_only = line_patterns(&marks("ток"));
        assert_eq!(open_only[0].fixed_span(), Some((0, 2)));
    }

    #[test]
    fn placement_extends_existing_letters() {
        // Span "..ток": a word ending in ток may extend it leftwards
        let pattern = &line_patterns(&marks("..ток"))[0];

        let word = Word::new("моток").unwrap();
        assert_eq!(pattern.placements_for(&word), vec![0]);

        let word = Word::new("иток").unwrap();
        assert_eq!(pattern.placements_for(&word), vec![1]);
    }

    #[test]
    fn placement_requires_matching_fixed_letters() {
        let pattern = &line_patterns(&marks("..ток"))[0];
        // Fits length-wise but 'дубок' disagrees with the fixed letters
        let word = Word::new("дубок").unwrap();
        assert!(pattern.placements_for(&word).is_empty());
    }

    #[test]
    fn placement_must_cover_every_fixed_letter() {
        // Span "а...б": a 3-letter word cannot cover both letters
        let pattern = &line_patterns(&marks("а...б"))[0];
        let word = Word::new("ата").unwrap();
        assert!(pattern.placements_for(&word).is_empty());

        // A 5-letter word disagreeing with a fixed letter fails
        let word = Word::new("бтттб").unwrap();
        assert!(pattern.placements_for(&word).is_empty());

        // A 5-letter word covering both letters works
        let word = Word::new("атттб").unwrap();
        assert_eq!(pattern.placements_for(&word), vec![0]);
    }

    #[test]
    fn word_identical_to_fixed_letters_places_nothing_new() {
        let pattern = &line_patterns(&marks(".ток."))[0];
        let word = Word::new("ток").unwrap();
        // Covers all fixed letters but adds no tile
        assert!(pattern.placements_for(&word).is_empty());
    }

    #[test]
    fn run_without_letters_yields_no_placements() {
        let pattern = LinePattern {
            start: 0,
            slots: vec![Slot::Open; 5],
        };
        let word = Word::new("ток").unwrap();
        assert!(pattern.placements_for(&word).is_empty());
    }

    #[test]
    fn offsets_are_absolute_and_ascending() {
        // Line "##.а." → run starts at absolute 2
        let pattern = &line_patterns(&marks("##.а."))[0];
        assert_eq!(pattern.start(), 2);

        // Fixed а sits at relative 1, so "ад" starts on it (absolute 3)
        let word = Word::new("ад").unwrap();
        assert_eq!(pattern.placements_for(&word), vec![3]);

        // and "да" ends on it (absolute 2)
        let word = Word::new("да").unwrap();
        assert_eq!(pattern.placements_for(&word), vec![2]);
    }

    #[test]
    fn multiple_offsets_for_ambiguous_fit() {
        // Span ".а." with word "аа": the fixed а at relative 1 can be either
        // the word's first or second letter
        let pattern = &line_patterns(&marks(".а."))[0];
        let word = Word::new("аа").unwrap();
        assert_eq!(pattern.placements_for(&word), vec![0, 1]);
    }
}

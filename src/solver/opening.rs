//! Opening-move solver
//!
//! Specialized placement logic for the first move on an empty board. The
//! word goes on the center line; for lengths that can reach the symmetric
//! letter-double cell a fixed distance from the center, the word is shifted
//! so its highest-value reachable letter lands on that cell.
//!
//! Words of 8 or more symbols are not evaluated: the fixed-offset split does
//! not generalize to lengths that overshoot both bonus cells, so they are
//! skipped rather than silently miscomputed.

use crate::config::{GameConfig, LetterValues};
use crate::core::{Board, Rack, Word};
use crate::solver::filter::rack_assignment;
use crate::solver::scoring;
use rayon::prelude::*;
use std::cmp::Reverse;

/// Longest word the opening solver will place
pub const MAX_OPENING_LEN: usize = 7;

/// Shortest word that can reach the letter-double cell in the reference
/// layout
const MIN_STEERED_LEN: usize = 5;

/// The chosen first placement on an empty board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningMove {
    pub word: Word,
    pub row: usize,
    pub col: usize,
    pub value: u32,
    /// Word positions whose tile is a wildcard, ascending
    pub wildcard_positions: Vec<usize>,
}

/// Find the single best opening placement the rack can form
///
/// Scans the dictionary once; ties keep the earliest word in dictionary
/// order. Returns `None` when no dictionary word is spellable from the rack
/// (words longer than [`MAX_OPENING_LEN`] are never considered).
#[must_use]
pub fn best_opening(words: &[Word], rack: &Rack, config: &GameConfig) -> Option<OpeningMove> {
    let size = config.bonuses.size();
    // The start cell defines the center; boards without one use the middle
    let (center_row, center_col) = config
        .bonuses
        .start_cell()
        .unwrap_or((size / 2, size / 2));
    let bonus_distance = config.bonuses.letter_double_distance(center_row);
    let empty_board = Board::empty(size);

    words
        .par_iter()
        .enumerate()
        .filter_map(|(index, word)| {
            evaluate(
                word,
                rack,
                config,
                &empty_board,
                (center_row, center_col),
                bonus_distance,
            )
            .map(|mv| (index, mv))
        })
        .min_by_key(|(index, mv)| (Reverse(mv.value), *index))
        .map(|(_, mv)| mv)
}

fn evaluate(
    word: &Word,
    rack: &Rack,
    config: &GameConfig,
    empty_board: &Board,
    (center_row, center_col): (usize, usize),
    bonus_distance: Option<usize>,
) -> Option<OpeningMove> {
    let len = word.len();
    let size = config.bonuses.size();
    if len < 2 || len > MAX_OPENING_LEN || len > size {
        return None;
    }
    let blanks = rack_assignment(word, rack)?;

    let steered = match bonus_distance {
        Some(d) if len >= MIN_STEERED_LEN && len > d => Some(d),
        _ => None,
    };

    let Some(d) = steered else {
        // No bonus reachable at this length: center the word, plain sum
        let col = (size - len) / 2;
        return Some(OpeningMove {
            word: word.clone(),
            row: center_row,
            col,
            value: scoring::word_value_with_blanks(word, &blanks, &config.values),
            wildcard_positions: blanks,
        });
    };

    let reach = len - d;
    let split = best_reachable_index(word, reach, &config.values);

    // The bonus cell lands on the chosen letter; the remainder extends to
    // whichever side keeps the word on the board
    let bonus_col = if split < len / 2 {
        center_col - d
    } else {
        center_col + d
    };
    let col = bonus_col.checked_sub(split)?;
    if col + len > size {
        return None;
    }

    let value = scoring::placement_value_with_blanks(
        word,
        &blanks,
        empty_board,
        &config.bonuses,
        &config.values,
        center_row,
        col,
    );

    Some(OpeningMove {
        word: word.clone(),
        row: center_row,
        col,
        value,
        wildcard_positions: blanks,
    })
}

/// Index of the highest-value symbol among the first `reach` and last
/// `reach` positions, earliest index on ties
fn best_reachable_index(word: &Word, reach: usize, values: &LetterValues) -> usize {
    let len = word.len();
    let head = 0..reach.min(len);
    let tail = len.saturating_sub(reach)..len;

    let mut best_index = 0;
    let mut best_value = 0;
    for i in head.chain(tail) {
        let value = values.value_or_zero(word.char_at(i));
        if value > best_value {
            best_value = value;
            best_index = i;
        }
    }
    best_index
}

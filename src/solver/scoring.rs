//! Scoring engine
//!
//! Computes the point value of placing a word on a line. Bonus cells apply
//! only under newly placed tiles: a cell that already holds a letter had its
//! bonus consumed on an earlier turn. Letter multipliers scale one letter;
//! word multipliers are counted during the scan and applied once at the end.
//! Playing all seven rack tiles in one move earns the fixed bingo bonus.
//!
//! Callers searching columns pass the transposed board and bonus grid and
//! transpose the resulting coordinates back; all functions here are
//! row-oriented.

use crate::config::LetterValues;
use crate::core::{Board, Bonus, BonusGrid, RACK_CAPACITY, Word};

/// Points awarded for playing the entire rack in one move
pub const BINGO_BONUS: u32 = 15;

/// Value of a word off the board: the unmodified sum of letter values
#[must_use]
pub fn word_value(word: &Word, values: &LetterValues) -> u32 {
    word.chars()
        .iter()
        .map(|&ch| values.value_or_zero(ch))
        .sum()
}

/// Plain letter sum with wildcard-covered positions scoring zero
#[must_use]
pub fn word_value_with_blanks(word: &Word, blanks: &[usize], values: &LetterValues) -> u32 {
    word.chars()
        .iter()
        .enumerate()
        .map(|(i, &ch)| {
            if blanks.contains(&i) {
                0
            } else {
                values.value_or_zero(ch)
            }
        })
        .sum()
}

/// Value of placing `word` on row `row` starting at column `start`
///
/// # Panics
/// Panics if the placement runs off the board; the engine validates bounds
/// before scoring.
#[must_use]
pub fn placement_value(
    word: &Word,
    board: &Board,
    bonuses: &BonusGrid,
    values: &LetterValues,
    row: usize,
    start: usize,
) -> u32 {
    placement_value_with_blanks(word, &[], board, bonuses, values, row, start)
}

/// Like [`placement_value`], with wildcard-covered word positions scoring zero
///
/// `blanks` lists the word positions whose tile is a wildcard. A wildcard
/// contributes no base letter value, but its cell still counts as a new tile
/// and still triggers word multipliers.
#[must_use]
pub fn placement_value_with_blanks(
    word: &Word,
    blanks: &[usize],
    board: &Board,
    bonuses: &BonusGrid,
    values: &LetterValues,
    row: usize,
    start: usize,
) -> u32 {
    let mut value: u32 = 0;
    let mut new_tiles: usize = 0;
    let mut word_doubles: u32 = 0;
    let mut word_triples: u32 = 0;

    for (i, &ch) in word.chars().iter().enumerate() {
        let col = start + i;
        let mut letter_value = if blanks.contains(&i) {
            0
        } else {
            values.value_or_zero(ch)
        };

        // A bonus counts only while its cell is still empty
        if board.get(row, col).is_none() {
            new_tiles += 1;
            match bonuses.at(row, col) {
                Bonus::LetterDouble => letter_value *= 2,
                Bonus::LetterTriple => letter_value *= 3,
                Bonus::WordDouble => word_doubles += 1,
                Bonus::WordTriple => word_triples += 1,
                Bonus::None | Bonus::Start => {}
            }
        }

        value += letter_value;
    }

    value *= 2u32.pow(word_doubles);
    value *= 3u32.pow(word_triples);

    if new_tiles == RACK_CAPACITY {
        value += BINGO_BONUS;
    }

    value
}

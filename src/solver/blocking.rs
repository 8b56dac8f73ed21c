//! Blocking analyzer
//!
//! Marks every cell of a line as a letter, open, or blocked. An empty cell
//! with a letter directly above or below is blocked: placing a tile there
//! would create a perpendicular cross-word, and cross-word validation is out
//! of scope, so those cells are excluded from candidate generation entirely.
//!
//! A per-line sweep then blocks the all-empty stretches that no placement
//! could ever reach: before the first blocked cell, between two blocked
//! cells, after the last one, and whole lines holding no letters at all
//! (nothing to attach to; the empty-board case goes to the opening solver).

use crate::core::Board;

/// One analyzed cell of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Cell already holds this letter
    Letter(char),
    /// Empty cell that may receive a new tile
    Open,
    /// Empty cell excluded from placement
    Blocked,
}

/// Is this empty cell blocked by a vertically adjacent letter?
///
/// Cells already holding a letter are never blocked. Off-board neighbors do
/// not block.
#[must_use]
pub fn is_vertically_blocked(board: &Board, row: usize, col: usize) -> bool {
    if board.get(row, col).is_some() {
        return false;
    }
    let above = row > 0 && board.get(row - 1, col).is_some();
    let below = row + 1 < board.size() && board.get(row + 1, col).is_some();
    above || below
}

/// Analyze one row of the board
#[must_use]
pub fn mark_row(board: &Board, row: usize) -> Vec<Mark> {
    let mut marks: Vec<Mark> = (0..board.size())
        .map(|col| match board.get(row, col) {
            Some(ch) => Mark::Letter(ch),
            None if is_vertically_blocked(board, row, col) => Mark::Blocked,
            None => Mark::Open,
        })
        .collect();
    close_unreachable_stretches(&mut marks);
    marks
}

/// Analyze every row of the board
///
/// Column-wise analysis reuses this on the transposed board.
#[must_use]
pub fn marked_rows(board: &Board) -> Vec<Vec<Mark>> {
    (0..board.size()).map(|row| mark_row(board, row)).collect()
}

/// Tracks what the sweep last saw while scanning a line left to right
enum LastBlock {
    /// Neither a blocked cell nor a letter yet
    NothingYet,
    /// A letter was seen after the most recent blocked cell (or from start)
    LetterSince,
    /// Blocked cell at this index, only open cells after it so far
    At(usize),
}

fn close_unreachable_stretches(marks: &mut [Mark]) {
    let mut last = LastBlock::NothingYet;

    for i in 0..marks.len() {
        match marks[i] {
            Mark::Blocked => {
                match last {
                    // All-open prefix cannot host anything
                    LastBlock::NothingYet => block_range(marks, 0, i),
                    // All-open gap between two blocked cells
                    LastBlock::At(k) => block_range(marks, k + 1, i),
                    LastBlock::LetterSince => {}
                }
                last = LastBlock::At(i);
            }
            Mark::Letter(_) => last = LastBlock::LetterSince,
            Mark::Open => {}
        }
    }

    match last {
        // All-open suffix after the final blocked cell
        LastBlock::At(k) => block_range(marks, k + 1, marks.len()),
        // Line holds no letters at all
        LastBlock::NothingYet => block_range(marks, 0, marks.len()),
        LastBlock::LetterSince => {}
    }
}

fn block_range(marks: &mut [Mark], from: usize, to: usize) {
    for mark in &mut marks[from..to] {
        *mark = Mark::Blocked;
    }
}

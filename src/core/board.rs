//! Game board representation
//!
//! The board is a square grid of cells, each empty or holding one letter.
//! The engine never mutates a caller's board: hint previews are produced as
//! derived copies via [`Board::with_placement`].

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// Placement direction of a word on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Row,
    Column,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => write!(f, "across"),
            Self::Column => write!(f, "down"),
        }
    }
}

/// A square board of optional letters, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<char>>,
}

/// Error type for malformed board input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    Empty,
    NotSquare { row: usize, len: usize, size: usize },
    InvalidCell { row: usize, col: usize, value: String },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Board must have at least one row"),
            Self::NotSquare { row, len, size } => {
                write!(f, "Board row {row} has {len} cells, expected {size}")
            }
            Self::InvalidCell { row, col, value } => {
                write!(f, "Board cell ({row}, {col}) holds {value:?}, expected an empty string or one letter")
            }
        }
    }
}

impl std::error::Error for BoardError {}

impl Board {
    /// Create an empty board of the given dimension
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a board from the JSON grid format: `""` = empty cell, a
    /// one-symbol lowercase string = letter
    ///
    /// # Errors
    /// Returns `BoardError` if the grid is empty, not square, or a cell holds
    /// anything other than an empty string or a single alphabetic symbol.
    pub fn from_rows(rows: &[Vec<String>]) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(BoardError::NotSquare {
                    row: r,
                    len: row.len(),
                    size,
                });
            }
            for (c, cell) in row.iter().enumerate() {
                let mut chars = cell.chars();
                match (chars.next(), chars.next()) {
                    (None, _) => cells.push(None),
                    (Some(ch), None) if ch.is_alphabetic() => {
                        cells.push(Some(ch.to_lowercase().next().unwrap_or(ch)));
                    }
                    _ => {
                        return Err(BoardError::InvalidCell {
                            row: r,
                            col: c,
                            value: cell.clone(),
                        });
                    }
                }
            }
        }

        Ok(Self { size, cells })
    }

    /// Board dimension N (the board is N×N)
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Get the letter at a cell, `None` for an empty cell
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of range
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        assert!(row < self.size && col < self.size, "cell out of range");
        self.cells[row * self.size + col]
    }

    /// Does any cell hold a letter?
    ///
    /// An entirely empty board routes the hint request to the opening-move
    /// solver instead of the general pipeline.
    #[must_use]
    pub fn has_letters(&self) -> bool {
        self.cells.iter().any(Option::is_some)
    }

    /// The transposed board (rows become columns)
    ///
    /// Transposing twice yields the original board exactly.
    #[must_use]
    pub fn transposed(&self) -> Self {
        let mut cells = vec![None; self.size * self.size];
        for r in 0..self.size {
            for c in 0..self.size {
                cells[c * self.size + r] = self.cells[r * self.size + c];
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }

    /// Count every letter currently on the board
    ///
    /// Used to validate that board plus rack never claim more tiles of a
    /// letter than the game supplies.
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for ch in self.cells.iter().flatten() {
            *counts.entry(*ch).or_insert(0) += 1;
        }
        counts
    }

    /// A copy of this board with a word overlaid for hint preview
    ///
    /// Cells already holding a letter keep it (the word necessarily agrees
    /// with them); empty cells receive the word's symbols.
    ///
    /// # Panics
    /// Panics if the placement does not fit on the board.
    #[must_use]
    pub fn with_placement(
        &self,
        word: &Word,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Self {
        let mut copy = self.clone();
        for (i, &ch) in word.chars().iter().enumerate() {
            let (r, c) = match orientation {
                Orientation::Row => (row, col + i),
                Orientation::Column => (row + i, col),
            };
            assert!(r < self.size && c < self.size, "placement out of range");
            let cell = &mut copy.cells[r * self.size + c];
            if cell.is_none() {
                *cell = Some(ch);
            }
        }
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(grid: &[&[&str]]) -> Vec<Vec<String>> {
        grid.iter()
            .map(|row| row.iter().map(|s| (*s).to_string()).collect())
            .collect()
    }

    #[test]
    fn from_rows_valid() {
        let board = Board::from_rows(&rows(&[
            &["", "т", ""],
            &["", "о", ""],
            &["", "к", ""],
        ]))
        .unwrap();

        assert_eq!(board.size(), 3);
        assert_eq!(board.get(0, 1), Some('т'));
        assert_eq!(board.get(1, 1), Some('о'));
        assert_eq!(board.get(2, 1), Some('к'));
        assert_eq!(board.get(0, 0), None);
        assert!(board.has_letters());
    }

    #[test]
    fn from_rows_rejects_ragged_grid() {
        let result = Board::from_rows(&rows(&[&["", ""], &[""]]));
        assert!(matches!(
            result,
            Err(BoardError::NotSquare {
                row: 1,
                len: 1,
                size: 2
            })
        ));
    }

    #[test]
    fn from_rows_rejects_multi_symbol_cell() {
        let result = Board::from_rows(&rows(&[&["ток", ""], &["", ""]]));
        assert!(matches!(result, Err(BoardError::InvalidCell { .. })));
    }

    #[test]
    fn from_rows_rejects_empty_grid() {
        assert!(matches!(Board::from_rows(&[]), Err(BoardError::Empty)));
    }

    #[test]
    fn empty_board_has_no_letters() {
        let board = Board::empty(15);
        assert_eq!(board.size(), 15);
        assert!(!board.has_letters());
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let board = Board::from_rows(&rows(&[
            &["а", "б", ""],
            &["", "", ""],
            &["в", "", ""],
        ]))
        .unwrap();
        let t = board.transposed();

        assert_eq!(t.get(0, 0), Some('а'));
        assert_eq!(t.get(1, 0), Some('б'));
        assert_eq!(t.get(0, 2), Some('в'));
        assert_eq!(t.get(2, 0), None);
    }

    #[test]
    fn transpose_twice_is_identity() {
        let board = Board::from_rows(&rows(&[
            &["", "т", ""],
            &["о", "", "к"],
            &["", "", "а"],
        ]))
        .unwrap();

        assert_eq!(board.transposed().transposed(), board);
    }

    #[test]
    fn letter_counts_tallies_board() {
        let board = Board::from_rows(&rows(&[
            &["а", "а", ""],
            &["", "б", ""],
            &["", "", ""],
        ]))
        .unwrap();
        let counts = board.letter_counts();

        assert_eq!(counts.get(&'а'), Some(&2));
        assert_eq!(counts.get(&'б'), Some(&1));
        assert_eq!(counts.get(&'в'), None);
    }

    #[test]
    fn with_placement_overlays_without_mutating() {
        let board = Board::from_rows(&rows(&[
            &["", "", ""],
            &["", "о", ""],
            &["", "", ""],
        ]))
        .unwrap();
        let word = Word::new("ток").unwrap();

        let preview = board.with_placement(&word, Orientation::Row, 1, 0);
        assert_eq!(preview.get(1, 0), Some('т'));
        assert_eq!(preview.get(1, 1), Some('о'));
        assert_eq!(preview.get(1, 2), Some('к'));

        // Source board untouched
        assert_eq!(board.get(1, 0), None);
        assert_eq!(board.get(1, 2), None);
    }

    #[test]
    fn with_placement_down() {
        let board = Board::empty(3);
        let word = Word::new("ток").unwrap();

        let preview = board.with_placement(&word, Orientation::Column, 0, 2);
        assert_eq!(preview.get(0, 2), Some('т'));
        assert_eq!(preview.get(1, 2), Some('о'));
        assert_eq!(preview.get(2, 2), Some('к'));
    }
}

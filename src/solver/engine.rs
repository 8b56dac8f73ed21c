//! Hint engine
//!
//! Orchestrates the pipeline: blocking analysis, pattern building, word
//! filtering, and scoring, across every row and (via transposition) every
//! column. An entirely empty board is delegated to the opening-move solver.
//!
//! One hint request is one pure call over immutable configuration plus a
//! board snapshot and a rack; the engine keeps no cross-request state, so
//! concurrent requests against the same session never contend.

use crate::config::GameConfig;
use crate::core::{Board, BonusGrid, Orientation, Rack, Word};
use crate::solver::blocking::mark_row;
use crate::solver::filter::candidates_for;
use crate::solver::opening::best_opening;
use crate::solver::pattern::line_patterns;
use crate::solver::scoring::{placement_value, placement_value_with_blanks};
use crate::wordlists::Dictionary;
use rayon::prelude::*;
use std::fmt;

/// A finalized, scored placement
///
/// Coordinates are board coordinates regardless of orientation: `(row, col)`
/// is the cell of the word's first symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub word: Word,
    pub orientation: Orientation,
    pub row: usize,
    pub col: usize,
    pub value: u32,
    /// Word positions whose tile is a wildcard, ascending
    pub wildcard_positions: Vec<usize>,
}

/// Error type for a rejected hint or scoring request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Board and bonus grid dimensions disagree
    DimensionMismatch { board: usize, bonuses: usize },
    /// A board or rack symbol has no point value
    UnknownSymbol(char),
    /// Board plus rack claim more tiles of a letter than the game supplies
    SupplyExceeded { letter: char, supply: u8, claimed: u8 },
    /// A manual placement runs off the board
    OutOfBounds { row: usize, col: usize, len: usize, size: usize },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { board, bonuses } => {
                write!(f, "Board is {board}×{board} but the bonus grid is {bonuses}×{bonuses}")
            }
            Self::UnknownSymbol(ch) => {
                write!(f, "Symbol {ch:?} has no point value in this game")
            }
            Self::SupplyExceeded {
                letter,
                supply,
                claimed,
            } => write!(
                f,
                "Board and rack claim {claimed} tiles of {letter:?}, the game has {supply}"
            ),
            Self::OutOfBounds {
                row,
                col,
                len,
                size,
            } => write!(
                f,
                "A {len}-letter word at ({row}, {col}) runs off the {size}×{size} board"
            ),
        }
    }
}

impl std::error::Error for RequestError {}

/// The hint generation and scoring engine
///
/// Borrows the immutable session configuration and dictionary; racks and
/// board snapshots arrive per request.
pub struct HintEngine<'a> {
    config: &'a GameConfig,
    dictionary: &'a Dictionary,
}

impl<'a> HintEngine<'a> {
    /// Create an engine over loaded session data
    #[must_use]
    pub const fn new(config: &'a GameConfig, dictionary: &'a Dictionary) -> Self {
        Self { config, dictionary }
    }

    /// The top `limit` placements for this board and rack
    ///
    /// Hints are sorted by value descending; equal values keep
    /// first-encountered order (row-major, rows before columns). An empty
    /// result is a normal outcome, not an error. On an entirely empty board
    /// the opening-move solver supplies the single best placement.
    ///
    /// # Errors
    /// Returns `RequestError` if the request is malformed (see §variants);
    /// validation happens before any search.
    pub fn hints(
        &self,
        board: &Board,
        rack: &Rack,
        limit: usize,
    ) -> Result<Vec<Hint>, RequestError> {
        self.validate_request(board, rack)?;

        if !board.has_letters() {
            let mut hints: Vec<Hint> = best_opening(self.dictionary.words(), rack, self.config)
                .map(|mv| Hint {
                    word: mv.word,
                    orientation: Orientation::Row,
                    row: mv.row,
                    col: mv.col,
                    value: mv.value,
                    wildcard_positions: mv.wildcard_positions,
                })
                .into_iter()
                .collect();
            hints.truncate(limit);
            return Ok(hints);
        }

        let mut hints = self.line_hints(board, &self.config.bonuses, rack, Orientation::Row);

        let transposed_board = board.transposed();
        let transposed_bonuses = self.config.bonuses.transposed();
        hints.extend(self.line_hints(
            &transposed_board,
            &transposed_bonuses,
            rack,
            Orientation::Column,
        ));

        // Stable sort keeps first-encountered order among equal values
        hints.sort_by(|a, b| b.value.cmp(&a.value));
        hints.truncate(limit);
        Ok(hints)
    }

    /// Score a manually entered placement
    ///
    /// Usable independently of hint generation, e.g. to display the value of
    /// a move the player is considering. Wildcard tiles are not modeled
    /// here: every symbol scores its full letter value.
    ///
    /// # Errors
    /// Returns `RequestError` if a word symbol has no point value or the
    /// placement runs off the board.
    pub fn score_placement(
        &self,
        word: &Word,
        board: &Board,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<u32, RequestError> {
        let size = board.size();
        if size != self.config.bonuses.size() {
            return Err(RequestError::DimensionMismatch {
                board: size,
                bonuses: self.config.bonuses.size(),
            });
        }
        for &ch in word.chars() {
            if !self.config.values.contains(ch) {
                return Err(RequestError::UnknownSymbol(ch));
            }
        }

        let (line_end, cross) = match orientation {
            Orientation::Row => (col + word.len(), row),
            Orientation::Column => (row + word.len(), col),
        };
        if line_end > size || cross >= size {
            return Err(RequestError::OutOfBounds {
                row,
                col,
                len: word.len(),
                size,
            });
        }

        Ok(match orientation {
            Orientation::Row => placement_value(
                word,
                board,
                &self.config.bonuses,
                &self.config.values,
                row,
                col,
            ),
            // Transposed inputs, transposed coordinates
            Orientation::Column => placement_value(
                word,
                &board.transposed(),
                &self.config.bonuses.transposed(),
                &self.config.values,
                col,
                row,
            ),
        })
    }

    /// Search every line of an oriented board
    ///
    /// `board` and `bonuses` are already oriented (transposed for column
    /// search); hints come back in board coordinates. Lines run in parallel
    /// but collect in line order, so the sequence is deterministic.
    fn line_hints(
        &self,
        board: &Board,
        bonuses: &BonusGrid,
        rack: &Rack,
        orientation: Orientation,
    ) -> Vec<Hint> {
        let per_line: Vec<Vec<Hint>> = (0..board.size())
            .into_par_iter()
            .map(|line| {
                let marks = mark_row(board, line);
                let mut found = Vec::new();
                for pattern in line_patterns(&marks) {
                    for candidate in candidates_for(&pattern, rack, self.dictionary.words()) {
                        let value = placement_value_with_blanks(
                            candidate.word,
                            &candidate.wildcard_positions,
                            board,
                            bonuses,
                            &self.config.values,
                            line,
                            candidate.offset,
                        );
                        let (row, col) = match orientation {
                            Orientation::Row => (line, candidate.offset),
                            Orientation::Column => (candidate.offset, line),
                        };
                        found.push(Hint {
                            word: candidate.word.clone(),
                            orientation,
                            row,
                            col,
                            value,
                            wildcard_positions: candidate.wildcard_positions,
                        });
                    }
                }
                found
            })
            .collect();

        per_line.into_iter().flatten().collect()
    }

    fn validate_request(&self, board: &Board, rack: &Rack) -> Result<(), RequestError> {
        if board.size() != self.config.bonuses.size() {
            return Err(RequestError::DimensionMismatch {
                board: board.size(),
                bonuses: self.config.bonuses.size(),
            });
        }

        let mut claimed = board.letter_counts();
        for (ch, n) in rack.counts() {
            *claimed.entry(ch).or_insert(0) += n;
        }
        for (&ch, &n) in &claimed {
            if !self.config.values.contains(ch) {
                return Err(RequestError::UnknownSymbol(ch));
            }
            let supply = self.config.supply.count(ch);
            if n > supply {
                return Err(RequestError::SupplyExceeded {
                    letter: ch,
                    supply,
                    claimed: n,
                });
            }
        }
        Ok(())
    }
}

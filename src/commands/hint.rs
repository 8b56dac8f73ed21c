//! Hint generation command
//!
//! Parses the textual board and rack, runs the engine, and returns the
//! ranked placements.

use crate::config::GameConfig;
use crate::core::{Board, Rack};
use crate::solver::{Hint, HintEngine};
use crate::wordlists::Dictionary;

/// Configuration for a hint request
pub struct HintConfig {
    pub board_text: String,
    pub rack_tiles: String,
    pub limit: usize,
}

impl HintConfig {
    #[must_use]
    pub const fn new(board_text: String, rack_tiles: String) -> Self {
        Self {
            board_text,
            rack_tiles,
            limit: 5,
        }
    }
}

/// Result of a hint request
pub struct HintResult {
    pub board: Board,
    pub rack: Rack,
    pub hints: Vec<Hint>,
}

/// Parse a board from its textual form
///
/// One line per row; cells separated by whitespace; `.` marks an empty cell.
/// Blank lines are skipped, so trailing newlines are harmless.
///
/// # Errors
///
/// Returns an error if the grid is empty, not square, or a cell is neither
/// `.` nor a single letter.
pub fn parse_board_text(text: &str) -> Result<Board, String> {
    let rows: Vec<Vec<String>> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.split_whitespace()
                .map(|cell| {
                    if cell == "." {
                        String::new()
                    } else {
                        cell.to_string()
                    }
                })
                .collect()
        })
        .collect();

    Board::from_rows(&rows).map_err(|e| format!("Invalid board: {e}"))
}

/// Generate the top placements for a board and rack
///
/// # Errors
///
/// Returns an error if:
/// - The board text or rack tiles fail to parse
/// - The request is inconsistent with the game configuration (unknown
///   symbols, tile counts exceeding the supply, dimension mismatch)
pub fn run_hints(
    config: HintConfig,
    game: &GameConfig,
    dictionary: &Dictionary,
) -> Result<HintResult, String> {
    let board = parse_board_text(&config.board_text)?;
    let rack =
        Rack::from_tiles(&config.rack_tiles).map_err(|e| format!("Invalid rack: {e}"))?;

    let engine = HintEngine::new(game, dictionary);
    let hints = engine
        .hints(&board, &rack, config.limit)
        .map_err(|e| e.to_string())?;

    Ok(HintResult { board, rack, hints })
}

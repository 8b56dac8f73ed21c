//! Placement scoring command
//!
//! Values a single move the player is considering, without running the hint
//! search.

use super::hint::parse_board_text;
use crate::config::GameConfig;
use crate::core::{Orientation, Word};
use crate::solver::HintEngine;
use crate::wordlists::Dictionary;

/// Configuration for scoring one placement
pub struct ScoreConfig {
    pub board_text: String,
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub down: bool,
}

/// Result of scoring one placement
pub struct ScoreResult {
    pub word: Word,
    pub orientation: Orientation,
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Score the word at the given position and direction
///
/// # Errors
///
/// Returns an error if:
/// - The board text or word fails to parse
/// - A word symbol has no point value
/// - The placement runs off the board
pub fn run_score(config: ScoreConfig, game: &GameConfig) -> Result<ScoreResult, String> {
    let board = parse_board_text(&config.board_text)?;
    let word = Word::new(&config.word).map_err(|e| format!("Invalid word: {e}"))?;
    let orientation = if config.down {
        Orientation::Column
    } else {
        Orientation::Row
    };

    // The dictionary plays no part in manual scoring
    let empty = Dictionary::from_words(Vec::new());
    let engine = HintEngine::new(game, &empty);
    let value = engine
        .score_placement(&word, &board, orientation, config.row, config.col)
        .map_err(|e| e.to_string())?;

    Ok(ScoreResult {
        word,
        orientation,
        row: config.row,
        col: config.col,
        value,
    })
}

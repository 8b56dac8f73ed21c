//! Command implementations

pub mod hint;
pub mod prepare;
pub mod score;

pub use hint::{HintConfig, HintResult, parse_board_text, run_hints};
pub use prepare::{PrepareConfig, PrepareResult, run_prepare};
pub use score::{ScoreConfig, ScoreResult, run_score};

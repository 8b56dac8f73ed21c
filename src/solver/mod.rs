//! Hint generation and scoring
//!
//! The pipeline runs in stages: [`blocking`] marks which cells of a line can
//! legally receive tiles, [`pattern`] turns marked lines into placement
//! constraints, [`filter`] matches dictionary words against constraint and
//! rack, and [`scoring`] values each surviving placement. [`opening`] handles
//! the special case of an empty board, and [`engine`] ties the stages
//! together across rows and columns.

pub mod blocking;
pub mod engine;
pub mod filter;
pub mod opening;
pub mod pattern;
pub mod scoring;

pub use blocking::{Mark, mark_row, marked_rows};
pub use engine::{Hint, HintEngine, RequestError};
pub use filter::{Candidate, candidates_for};
pub use opening::{MAX_OPENING_LEN, OpeningMove, best_opening};
pub use pattern::{LinePattern, Slot, line_patterns};
pub use scoring::{BINGO_BONUS, placement_value, word_value};

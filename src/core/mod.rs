//! Core domain types
//!
//! Board, bonus grid, rack, and word types shared by the whole engine.

pub mod board;
pub mod bonus;
pub mod rack;
pub mod word;

pub use board::{Board, BoardError, Orientation};
pub use bonus::{Bonus, BonusGrid, BonusGridError};
pub use rack::{RACK_CAPACITY, Rack, RackError, WILDCARD};
pub use word::{MAX_WORD_LEN, Word, WordError};

//! Output and display utilities

pub mod display;
pub mod formatters;

pub use display::{print_hint_result, print_prepare_result, print_score_result};
pub use formatters::{board_lines, cell_text, position_label};

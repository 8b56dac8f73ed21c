//! Formatting utilities for terminal output

use crate::core::{Board, Orientation};

/// Textual form of one board cell
#[must_use]
pub fn cell_text(cell: Option<char>) -> String {
    cell.map_or_else(|| ".".to_string(), |ch| ch.to_uppercase().to_string())
}

/// Render a board as one string per row, cells separated by spaces
#[must_use]
pub fn board_lines(board: &Board) -> Vec<String> {
    (0..board.size())
        .map(|row| {
            (0..board.size())
                .map(|col| cell_text(board.get(row, col)))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Human-readable placement position
#[must_use]
pub fn position_label(row: usize, col: usize, orientation: Orientation) -> String {
    format!("({row}, {col}) {orientation}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cell_is_a_dot() {
        assert_eq!(cell_text(None), ".");
        assert_eq!(cell_text(Some('т')), "Т");
    }

    #[test]
    fn board_lines_render_every_row() {
        let rows = vec![
            vec![String::new(), "т".to_string()],
            vec!["о".to_string(), String::new()],
        ];
        let board = Board::from_rows(&rows).unwrap();
        assert_eq!(board_lines(&board), vec![". Т", "О ."]);
    }

    #[test]
    fn position_label_names_the_direction() {
        assert_eq!(position_label(2, 0, Orientation::Row), "(2, 0) across");
        assert_eq!(position_label(0, 3, Orientation::Column), "(0, 3) down");
    }
}

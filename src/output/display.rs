//! Display functions for command results

use super::formatters::{board_lines, position_label};
use crate::commands::{HintResult, PrepareResult, ScoreResult};
use colored::Colorize;

/// Print the ranked hints for a board and rack
pub fn print_hint_result(result: &HintResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Rack: {}", result.rack.to_string().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if result.hints.is_empty() {
        println!("\n{}", "No placement found for this rack".yellow());
        return;
    }

    for (i, hint) in result.hints.iter().enumerate() {
        println!(
            "\n{}. {} {} at {}",
            i + 1,
            hint.word.text().to_uppercase().bold(),
            format!("{} pts", hint.value).bright_yellow(),
            position_label(hint.row, hint.col, hint.orientation)
        );
        if !hint.wildcard_positions.is_empty() {
            let letters: Vec<String> = hint
                .wildcard_positions
                .iter()
                .map(|&i| hint.word.char_at(i).to_uppercase().to_string())
                .collect();
            println!("   wildcard as {}", letters.join(", ").bright_black());
        }
    }

    if verbose {
        let best = &result.hints[0];
        let preview =
            result
                .board
                .with_placement(&best.word, best.orientation, best.row, best.col);
        println!("\n{}", "Best placement:".bright_cyan().bold());
        for line in board_lines(&preview) {
            println!("   {line}");
        }
    }
}

/// Print the value of a manually scored placement
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{} at {}: {}",
        result.word.text().to_uppercase().bold(),
        position_label(result.row, result.col, result.orientation),
        format!("{} pts", result.value).bright_yellow().bold()
    );
}

/// Print the outcome of dictionary preparation
pub fn print_prepare_result(result: &PrepareResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY PREPARED".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let dropped = result.total_words - result.kept_words;
    println!("\n   Words read:    {}", result.total_words);
    println!(
        "   Words kept:    {}",
        result.kept_words.to_string().green()
    );
    println!("   Words dropped: {}", dropped.to_string().yellow());

    println!("\n   Sub-dictionaries:");
    for (letter, count) in &result.sub_dictionaries {
        println!("   {} : {count:6} words", letter.to_uppercase());
    }
}

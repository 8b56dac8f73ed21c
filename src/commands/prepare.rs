//! Dictionary preparation command
//!
//! One-time preprocessing of a raw word list: drop words the configured tile
//! set can never spell, then write the cleaned dictionary plus one
//! sub-dictionary per alphabet letter.

use crate::config::{DICTIONARY_FILENAME, GameConfig};
use crate::core::Word;
use crate::wordlists::loader::Dictionary;
use crate::wordlists::{clean, partition_by_letter, sub_dictionary_filename};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;

/// Configuration for dictionary preparation
pub struct PrepareConfig {
    pub dictionary_path: PathBuf,
    pub out_dir: PathBuf,
}

/// Result of dictionary preparation
pub struct PrepareResult {
    pub total_words: usize,
    pub kept_words: usize,
    /// Per-letter sub-dictionary sizes, in sorted letter order
    pub sub_dictionaries: Vec<(char, usize)>,
}

/// Clean and partition a raw dictionary
///
/// Writes the cleaned word list and the per-letter sub-dictionaries into
/// `out_dir`, creating it if needed.
///
/// # Errors
///
/// Returns an error if the raw dictionary cannot be read or any output file
/// cannot be written.
pub fn run_prepare(config: &PrepareConfig, game: &GameConfig) -> Result<PrepareResult, String> {
    let dictionary = Dictionary::load(&config.dictionary_path).map_err(|e| e.to_string())?;
    let total_words = dictionary.len();

    let kept = clean(dictionary.words(), &game.values, &game.supply);
    let kept_words = kept.len();
    let cleaned: Vec<Word> = kept.into_iter().cloned().collect();

    fs::create_dir_all(&config.out_dir)
        .map_err(|e| format!("Cannot create {}: {e}", config.out_dir.display()))?;
    write_word_list(&config.out_dir.join(DICTIONARY_FILENAME), &cleaned)?;

    let groups = partition_by_letter(&cleaned, &game.supply);

    let pb = ProgressBar::new(groups.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut sub_dictionaries = Vec::with_capacity(groups.len());
    for (letter, words) in groups {
        pb.set_message(format!("writing {letter}"));
        let path = config.out_dir.join(sub_dictionary_filename(letter));
        let lines: String = words.iter().map(|w| format!("{}\n", w.text())).collect();
        fs::write(&path, lines).map_err(|e| format!("Cannot write {}: {e}", path.display()))?;
        sub_dictionaries.push((letter, words.len()));
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(PrepareResult {
        total_words,
        kept_words,
        sub_dictionaries,
    })
}

fn write_word_list(path: &PathBuf, words: &[Word]) -> Result<(), String> {
    let lines: String = words.iter().map(|w| format!("{}\n", w.text())).collect();
    fs::write(path, lines).map_err(|e| format!("Cannot write {}: {e}", path.display()))
}

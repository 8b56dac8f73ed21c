//! Erudit Assistant - CLI
//!
//! Hint generation and scoring for the Russian Scrabble variant Erudit.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use erudit_assistant::{
    commands::{
        HintConfig, PrepareConfig, ScoreConfig, run_hints, run_prepare, run_score,
    },
    config::{DICTIONARY_FILENAME, GameConfig},
    output::{print_hint_result, print_prepare_result, print_score_result},
    wordlists::Dictionary,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "erudit_assistant",
    about = "Hint generation and scoring engine for Erudit (Russian Scrabble)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding letters_values.json, letters_amount.json and
    /// board_bonuses.json
    #[arg(short, long, global = true, default_value = "config")]
    config_dir: PathBuf,

    /// Dictionary file (default: dictionary.txt inside the config directory)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the best placements for a board and rack
    Hint {
        /// Board file: one row per line, cells separated by spaces, '.' empty
        board: PathBuf,

        /// The player's tiles, e.g. "машина" ('*' is the wildcard)
        rack: String,

        /// Number of hints to show
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,

        /// Also draw the board with the best hint placed
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score a specific placement without searching
    Score {
        /// Board file: one row per line, cells separated by spaces, '.' empty
        board: PathBuf,

        /// The word to place
        word: String,

        /// Row of the word's first letter (0-based)
        row: usize,

        /// Column of the word's first letter (0-based)
        col: usize,

        /// Place the word downwards instead of across
        #[arg(long)]
        down: bool,
    },

    /// Clean a raw word list and split it into per-letter sub-dictionaries
    Prepare {
        /// Raw newline-delimited word list
        input: PathBuf,

        /// Output directory (default: the config directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let game = GameConfig::load(&cli.config_dir)
        .with_context(|| format!("loading configuration from {}", cli.config_dir.display()))?;

    match cli.command {
        Commands::Hint {
            board,
            rack,
            count,
            verbose,
        } => {
            let dictionary_path = cli
                .dictionary
                .unwrap_or_else(|| cli.config_dir.join(DICTIONARY_FILENAME));
            let dictionary = Dictionary::load(&dictionary_path)
                .with_context(|| format!("loading {}", dictionary_path.display()))?;

            let board_text = fs::read_to_string(&board)
                .with_context(|| format!("reading {}", board.display()))?;

            let mut config = HintConfig::new(board_text, rack);
            config.limit = count;
            let result =
                run_hints(config, &game, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_hint_result(&result, verbose);
            Ok(())
        }
        Commands::Score {
            board,
            word,
            row,
            col,
            down,
        } => {
            let board_text = fs::read_to_string(&board)
                .with_context(|| format!("reading {}", board.display()))?;

            let config = ScoreConfig {
                board_text,
                word,
                row,
                col,
                down,
            };
            let result = run_score(config, &game).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Prepare { input, out } => {
            let config = PrepareConfig {
                dictionary_path: input,
                out_dir: out.unwrap_or(cli.config_dir),
            };
            let result = run_prepare(&config, &game).map_err(|e| anyhow::anyhow!(e))?;
            print_prepare_result(&result);
            Ok(())
        }
    }
}

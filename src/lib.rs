//! Erudit Assistant
//!
//! A hint generation and scoring engine for the Russian Scrabble variant
//! Erudit: it finds the highest-scoring placements a rack can form on a
//! board and values manually entered moves.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use erudit_assistant::config::GameConfig;
//! use erudit_assistant::core::{Board, Rack};
//! use erudit_assistant::solver::HintEngine;
//! use erudit_assistant::wordlists::Dictionary;
//!
//! let config = GameConfig::load(Path::new("config")).unwrap();
//! let dictionary = Dictionary::load("config/dictionary.txt").unwrap();
//!
//! let board = Board::empty(15);
//! let rack = Rack::from_tiles("машина").unwrap();
//!
//! let engine = HintEngine::new(&config, &dictionary);
//! for hint in engine.hints(&board, &rack, 5).unwrap() {
//!     println!("{} scores {}", hint.word, hint.value);
//! }
//! ```

// Core domain types
pub mod core;

// Session configuration
pub mod config;

// Hint generation and scoring
pub mod solver;

// Dictionary loading and preprocessing
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

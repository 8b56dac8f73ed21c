//! Dictionary loading and offline preprocessing

pub mod loader;
pub mod partition;

pub use loader::{Dictionary, DictionaryError};
pub use partition::{clean, is_word_playable, partition_by_letter, sub_dictionary_filename};

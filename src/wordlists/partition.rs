//! Offline dictionary preprocessing
//!
//! One-time cleaning and per-letter partitioning, run by the `prepare`
//! command. Cleaning drops words the game can never play; partitioning
//! writes one sub-dictionary per alphabet letter so a search can be limited
//! to words containing a symbol the player actually holds.

use crate::config::{LetterSupply, LetterValues};
use crate::core::{WILDCARD, Word};

/// Can this word ever be played with the configured tile set?
///
/// A word is playable when every symbol has a point value and no symbol is
/// needed more times than tiles of it exist in the game (wildcards widen the
/// supply, since each can stand in for one missing tile).
#[must_use]
pub fn is_word_playable(word: &Word, values: &LetterValues, supply: &LetterSupply) -> bool {
    let wildcards = supply.count(WILDCARD);
    for (letter, need) in word.char_counts() {
        if !values.contains(letter) {
            return false;
        }
        if need > supply.count(letter).saturating_add(wildcards) {
            return false;
        }
    }
    true
}

/// Drop words the game can never play, preserving order
#[must_use]
pub fn clean<'a>(
    words: &'a [Word],
    values: &LetterValues,
    supply: &LetterSupply,
) -> Vec<&'a Word> {
    words
        .iter()
        .filter(|word| is_word_playable(word, values, supply))
        .collect()
}

/// Group words by the letters they contain
///
/// Returns one (letter, words-containing-it) group per supplied alphabet
/// letter, wildcard excluded, in sorted letter order. A word appears in every
/// group of every distinct letter it contains.
#[must_use]
pub fn partition_by_letter<'a>(
    words: &'a [Word],
    supply: &LetterSupply,
) -> Vec<(char, Vec<&'a Word>)> {
    let mut alphabet: Vec<char> = supply
        .counts()
        .map(|(letter, _)| letter)
        .filter(|&letter| letter != WILDCARD)
        .collect();
    alphabet.sort_unstable();

    alphabet
        .into_iter()
        .map(|letter| {
            let containing: Vec<&Word> =
                words.iter().filter(|w| w.has_letter(letter)).collect();
            (letter, containing)
        })
        .collect()
}

/// File name of the sub-dictionary for one letter
#[must_use]
pub fn sub_dictionary_filename(letter: char) -> String {
    format!("{letter}-containing-sub-dict.txt")
}

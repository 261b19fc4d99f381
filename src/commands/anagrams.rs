//! Anagram lookup command

use crate::index::Dictionary;

/// Anagrams of one word
pub struct AnagramResult {
    pub word: String,
    pub anagrams: Vec<String>,
}

/// Find the anagrams of `word`, sorted alphabetically
#[must_use]
pub fn list_anagrams(dictionary: &Dictionary, word: &str) -> AnagramResult {
    let mut anagrams: Vec<String> = dictionary
        .find_anagrams(word)
        .into_iter()
        .map(str::to_string)
        .collect();
    anagrams.sort_unstable();

    AnagramResult {
        word: word.to_string(),
        anagrams,
    }
}

//! Subword listing command
//!
//! Lists every dictionary word spellable from a set of letters.

use crate::index::Dictionary;

/// Configuration for a subword listing
pub struct SubwordsConfig {
    pub letters: String,
    pub min_length: usize,
    pub exclude_self: bool,
}

impl SubwordsConfig {
    #[must_use]
    pub fn new(letters: impl Into<String>) -> Self {
        Self {
            letters: letters.into().to_ascii_lowercase(),
            min_length: 0,
            exclude_self: false,
        }
    }
}

/// Words spellable from the configured letters
pub struct SubwordsResult {
    pub letters: String,
    /// Longest first, ties in alphabetical order
    pub words: Vec<String>,
}

/// List subwords of `config.letters`
#[must_use]
pub fn list_subwords(dictionary: &Dictionary, config: &SubwordsConfig) -> SubwordsResult {
    let letters = config.letters.as_str();
    let mut words: Vec<String> = dictionary
        .find_subwords(letters)
        .filter(|word| word.chars().count() >= config.min_length)
        .filter(|&word| !(config.exclude_self && word == letters))
        .map(str::to_string)
        .collect();
    words.sort_unstable_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    SubwordsResult {
        letters: config.letters.clone(),
        words,
    }
}

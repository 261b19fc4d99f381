//! Per-query result filters

/// Filters applied to pattern search results
///
/// The defaults filter nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Drop words shorter than this many letters
    pub min_length: usize,
    /// Letters every result word must contain
    pub must_use: String,
}

impl QueryOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    #[must_use]
    pub fn with_must_use(mut self, letters: impl Into<String>) -> Self {
        self.must_use = letters.into().to_ascii_lowercase();
        self
    }

    /// True if `word` passes both filters
    ///
    /// `must_use` is a presence test per letter, not a count.
    #[must_use]
    pub fn accepts(&self, word: &str) -> bool {
        word.chars().count() >= self.min_length && self.must_use.chars().all(|l| word.contains(l))
    }
}

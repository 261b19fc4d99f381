//! Pattern search command
//!
//! Runs blank-aware pattern search for a rack against one or more patterns.

use crate::core::TileSet;
use crate::errors::WordMatchError;
use crate::index::{Dictionary, PatternOptions, QueryOptions};

/// Configuration for a pattern search
pub struct SearchConfig {
    pub rack: String,
    pub patterns: Vec<String>,
    pub options: QueryOptions,
}

impl SearchConfig {
    #[must_use]
    pub fn new(rack: impl Into<String>, patterns: Vec<String>) -> Self {
        Self {
            rack: rack.into(),
            patterns,
            options: QueryOptions::default(),
        }
    }
}

/// Search results for every configured pattern, in pattern order
pub struct SearchResult<'a> {
    pub tiles: TileSet,
    pub options: Vec<PatternOptions<'a>>,
}

impl SearchResult<'_> {
    /// Total words across all patterns
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.options.iter().map(PatternOptions::word_count).sum()
    }
}

/// Search every configured pattern
///
/// An empty pattern list searches the catch-all pattern `""`.
///
/// # Errors
///
/// Returns an error if any pattern is malformed.
pub fn search_patterns<'a>(
    dictionary: &'a Dictionary,
    config: &SearchConfig,
) -> Result<SearchResult<'a>, WordMatchError> {
    let tiles = TileSet::parse(&config.rack);
    let catch_all = [String::new()];
    let patterns: &[String] = if config.patterns.is_empty() {
        &catch_all
    } else {
        &config.patterns
    };

    let options = dictionary.find_options(&tiles, patterns, &config.options)?;
    Ok(SearchResult { tiles, options })
}

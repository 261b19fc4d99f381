//! Error types for word matching with error codes and helpful messages.
//!
//! # Error Codes
//!
//! - W001: `PatternSyntax` (pattern failed to compile)
//! - W002: `PatternMatch` (regex engine gave up while testing a word)
//! - W003: `WordList` (word list could not be read)
//!
//! A lookup that finds nothing is not an error; it yields an empty result.
//!
//! # Examples
//!
//! ```
//! use wordmatch::core::Pattern;
//!
//! match Pattern::new("^c(at$") {
//!     Err(e) => {
//!         assert_eq!(e.code(), "W001");
//!         assert!(e.help().is_some());
//!     }
//!     Ok(_) => unreachable!("unbalanced group must not compile"),
//! }
//! ```

use std::io;
use std::path::PathBuf;

/// Errors surfaced by pattern queries and word list loading
#[derive(Debug, thiserror::Error)]
pub enum WordMatchError {
    #[error("Invalid pattern \"{pattern}\": {source}")]
    PatternSyntax {
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    #[error("Pattern \"{pattern}\" failed while matching \"{word}\": {source}")]
    PatternMatch {
        pattern: String,
        word: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    #[error("Failed to read word list from '{}': {source}", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WordMatchError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::PatternSyntax { .. } => "W001",
            Self::PatternMatch { .. } => "W002",
            Self::WordList { .. } => "W003",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            Self::PatternSyntax { .. } => {
                Some("Patterns are regular expressions, e.g. '^c.t$' or 'qu' (escape '(' '[' '{' as needed)")
            }
            Self::PatternMatch { .. } => {
                Some("Simplify the pattern; heavy backreferences or lookarounds can exceed the backtrack limit")
            }
            Self::WordList { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        let base = self.to_string();
        let code = self.code();
        match self.help() {
            Some(help) => format!("{base} ({code})\n{help}"),
            None => format!("{base} ({code})"),
        }
    }
}

//! Word Matcher
//!
//! Indexes a dictionary by letter multiset and answers word-game queries:
//! anagrams, words spellable from a rack, and pattern search that prices
//! each result by the blank tiles it needs.
//!
//! # Quick Start
//!
//! ```rust
//! use wordmatch::core::TileSet;
//! use wordmatch::index::Dictionary;
//!
//! let dictionary = Dictionary::new(["listen", "silent", "enlist", "tinsel"]);
//! assert_eq!(dictionary.find_anagrams("listen").len(), 3);
//!
//! for group in dictionary.find_subwords_for_pattern(&TileSet::parse("silen_"), "^s")? {
//!     let group = group?;
//!     println!("{} blanks: {:?}", group.blanks(), group.words);
//! }
//! # Ok::<(), wordmatch::errors::WordMatchError>(())
//! ```

// Core domain types
pub mod core;

// Dictionary index and queries
pub mod index;

// Word lists
pub mod wordlists;

// Error types
pub mod errors;

// Logger setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

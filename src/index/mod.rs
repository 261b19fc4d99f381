//! Dictionary index and queries
//!
//! This module contains the key-to-words index and the queries run against it:
//! anagrams, subwords, and blank-aware pattern search.

mod dictionary;
mod options;
pub mod search;

pub use dictionary::Dictionary;
pub use options::QueryOptions;
pub use search::{BlankGroup, PatternMatches, PatternOptions};

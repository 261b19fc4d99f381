//! Word lists for the dictionary index
//!
//! Word lists are plain newline-delimited text, one lowercase word per line.
//! Cleaning (proper nouns, possessives, digits) and decompression happen
//! before the list reaches this crate.

pub mod loader;

pub use loader::{load_dictionary, load_from_file, load_from_reader, words_from_str};

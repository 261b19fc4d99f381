//! Word list loading utilities
//!
//! Reads newline-delimited word lists from strings, readers, or files.

use crate::errors::WordMatchError;
use crate::index::Dictionary;
use log::debug;
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

/// Split an in-memory word list into words
///
/// Lines are trimmed, blank lines skipped, and ASCII letters lowercased.
///
/// # Examples
/// ```
/// use wordmatch::wordlists::words_from_str;
///
/// let words = words_from_str("cat\n\n  Act \nTACK\n");
/// assert_eq!(words, ["cat", "act", "tack"]);
/// ```
#[must_use]
pub fn words_from_str(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_ascii_lowercase())
            }
        })
        .collect()
}

/// Read words from any buffered reader, such as stdin or a decompressor
///
/// # Errors
///
/// Returns an I/O error if reading fails or the input is not UTF-8.
pub fn load_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            words.push(trimmed.to_ascii_lowercase());
        }
    }
    Ok(words)
}

/// Load words from a file
///
/// # Errors
///
/// Returns `WordMatchError::WordList` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordmatch::wordlists::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordMatchError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| WordMatchError::WordList {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_str(&contents);
    debug!("Read {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load a word list file straight into a dictionary index
///
/// # Errors
///
/// Returns `WordMatchError::WordList` if the file cannot be read.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Dictionary, WordMatchError> {
    load_from_file(path).map(Dictionary::new)
}

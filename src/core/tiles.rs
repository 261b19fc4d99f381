//! Player tile racks
//!
//! A rack is a string of letters plus some number of blank tiles. Blanks are
//! written inline with any of the `BLANK_MARKERS`, so `"ca_t"` is the letters
//! `c`, `a`, `t` and one blank.

use super::WordKey;
use std::fmt;

/// Characters that stand for a blank tile in rack strings
pub const BLANK_MARKERS: [char; 4] = ['_', '?', '*', ' '];

/// Letters available to the player plus a count of blank (wildcard) tiles
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TileSet {
    letters: String,
    blanks: usize,
}

impl TileSet {
    /// Create a rack from plain letters and an explicit blank count
    #[must_use]
    pub fn new(letters: impl Into<String>, blanks: usize) -> Self {
        Self {
            letters: letters.into().to_ascii_lowercase(),
            blanks,
        }
    }

    /// Parse a rack string, counting blank markers as blanks
    ///
    /// Letters are lowercased (ASCII). Anything that is not a blank marker is
    /// kept as a literal tile.
    ///
    /// # Examples
    /// ```
    /// use wordmatch::core::TileSet;
    ///
    /// let rack = TileSet::parse("CA_t");
    /// assert_eq!(rack.letters(), "cat");
    /// assert_eq!(rack.blanks(), 1);
    /// ```
    #[must_use]
    pub fn parse(rack: &str) -> Self {
        let mut letters = String::with_capacity(rack.len());
        let mut blanks = 0;

        for ch in rack.chars() {
            if BLANK_MARKERS.contains(&ch) {
                blanks += 1;
            } else {
                letters.push(ch.to_ascii_lowercase());
            }
        }

        Self { letters, blanks }
    }

    /// The non-blank tiles, in rack order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Number of blank tiles
    #[inline]
    #[must_use]
    pub const fn blanks(&self) -> usize {
        self.blanks
    }

    /// Canonical key of the non-blank tiles
    #[must_use]
    pub fn key(&self) -> WordKey {
        WordKey::new(&self.letters)
    }
}

impl fmt::Display for TileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letters, "_".repeat(self.blanks))
    }
}

impl std::str::FromStr for TileSet {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

//! Core domain types for word matching
//!
//! The key algebra (canonical keys, spellability, multiset difference) and the
//! two query inputs, tile racks and word patterns.

mod key;
mod pattern;
mod tiles;

pub use key::{KeyDiff, WordKey, is_anagram_of};
pub use pattern::Pattern;
pub use tiles::{BLANK_MARKERS, TileSet};

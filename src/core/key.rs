//! Canonical letter keys
//!
//! A `WordKey` is the sorted multiset of a word's letters. Two words share a key
//! exactly when they are anagrams of each other, so the key doubles as the
//! grouping key of the dictionary index.

use std::cmp::Ordering;
use std::fmt;

/// Sorted-letter signature of a word
///
/// Ordering is lexicographic over the sorted letters. It is used for grouping
/// and tie-breaking only; multiset relations go through the named methods.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WordKey(String);

/// Three-way multiset split of two keys
///
/// Produced by [`WordKey::symmetric_diff`]. Every letter of the left key lands
/// in exactly one of `only_left` or `common`, and every letter of the right key
/// in exactly one of `common` or `only_right`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDiff {
    pub only_left: WordKey,
    pub common: WordKey,
    pub only_right: WordKey,
}

impl KeyDiff {
    /// Swap the roles of the two input keys
    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            only_left: self.only_right,
            common: self.common,
            only_right: self.only_left,
        }
    }
}

impl WordKey {
    /// Canonicalize a word by sorting its characters
    ///
    /// Total over any input; characters outside `a-z` are kept as literal
    /// letters and sort by code point.
    ///
    /// # Examples
    /// ```
    /// use wordmatch::core::WordKey;
    ///
    /// assert_eq!(WordKey::new("listen"), WordKey::new("silent"));
    /// assert_eq!(WordKey::new("listen").as_str(), "eilnst");
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut letters: Vec<char> = word.chars().collect();
        letters.sort_unstable();
        Self(letters.into_iter().collect())
    }

    /// Wrap letters that are already in sorted order
    fn from_sorted(letters: Vec<char>) -> Self {
        debug_assert!(letters.is_sorted(), "key letters must be sorted");
        Self(letters.into_iter().collect())
    }

    /// The sorted letters as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters in the key (counting repeats)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if a word with this key can be spelled from the letters of `pool`
    ///
    /// Multiplicity matters: `aab` is not spellable with `ab` but is with `aabb`.
    ///
    /// # Examples
    /// ```
    /// use wordmatch::core::WordKey;
    ///
    /// let rack = WordKey::new("aabb");
    /// assert!(WordKey::new("aab").is_spellable_with(&rack));
    /// assert!(!WordKey::new("aab").is_spellable_with(&WordKey::new("ab")));
    /// ```
    #[must_use]
    pub fn is_spellable_with(&self, pool: &Self) -> bool {
        if self == pool {
            return true;
        }
        if self.0.len() > pool.0.len() {
            return false;
        }

        // Both sides are sorted: each needed letter must be matched by one
        // unused occurrence in the pool, skipping pool letters we don't need.
        let mut available = pool.0.chars();
        'needed: for needed in self.0.chars() {
            for have in available.by_ref() {
                match have.cmp(&needed) {
                    Ordering::Less => {}
                    Ordering::Equal => continue 'needed,
                    Ordering::Greater => return false,
                }
            }
            return false;
        }
        true
    }

    /// Multiset difference of two keys in a single merge walk
    ///
    /// Returns the letters only in `self`, the letters in both, and the letters
    /// only in `other`. Each occurrence consumes exactly one occurrence on the
    /// other side.
    ///
    /// # Examples
    /// ```
    /// use wordmatch::core::WordKey;
    ///
    /// let diff = WordKey::new("coat").symmetric_diff(&WordKey::new("cat"));
    /// assert_eq!(diff.only_left.as_str(), "o");
    /// assert_eq!(diff.common.as_str(), "act");
    /// assert!(diff.only_right.is_empty());
    /// ```
    #[must_use]
    pub fn symmetric_diff(&self, other: &Self) -> KeyDiff {
        let left: Vec<char> = self.0.chars().collect();
        let right: Vec<char> = other.0.chars().collect();

        let mut only_left = Vec::new();
        let mut common = Vec::with_capacity(left.len().min(right.len()));
        let mut only_right = Vec::new();

        let (mut i, mut j) = (0, 0);
        while i < left.len() && j < right.len() {
            match left[i].cmp(&right[j]) {
                Ordering::Less => {
                    only_left.push(left[i]);
                    i += 1;
                }
                Ordering::Greater => {
                    only_right.push(right[j]);
                    j += 1;
                }
                Ordering::Equal => {
                    common.push(left[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        only_left.extend_from_slice(&left[i..]);
        only_right.extend_from_slice(&right[j..]);

        KeyDiff {
            only_left: Self::from_sorted(only_left),
            common: Self::from_sorted(common),
            only_right: Self::from_sorted(only_right),
        }
    }
}

/// True if `w` and `u` are spelled differently from the same letters
///
/// # Examples
/// ```
/// use wordmatch::core::is_anagram_of;
///
/// assert!(is_anagram_of("listen", "silent"));
/// assert!(!is_anagram_of("listen", "listen"));
/// ```
#[must_use]
pub fn is_anagram_of(w: &str, u: &str) -> bool {
    w != u && WordKey::new(w) == WordKey::new(u)
}

impl fmt::Display for WordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WordKey {
    fn from(word: &str) -> Self {
        Self::new(word)
    }
}

//! Dictionary index keyed by canonical letters
//!
//! Built once from a word list; every query after that is read-only, so a
//! `Dictionary` can be shared freely across threads.
//!
//! Stored words and query letters are ASCII-lowercased. Any other character is
//! kept as a literal letter.

use crate::core::WordKey;
use log::debug;
use rustc_hash::FxHashMap;

/// Mapping from canonical key to the words spelled with exactly those letters
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: FxHashMap<WordKey, Vec<String>>,
    word_count: usize,
}

impl Dictionary {
    /// Build the index from a sequence of words
    ///
    /// Words are lowercased (ASCII) and grouped by key in input order. A word
    /// repeated in the input is stored once.
    ///
    /// # Examples
    /// ```
    /// use wordmatch::index::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["listen", "silent", "cat"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert_eq!(dictionary.word_count(), 3);
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: FxHashMap<WordKey, Vec<String>> = FxHashMap::default();
        let mut word_count = 0;

        for word in words {
            let word = word.into().to_ascii_lowercase();
            let bucket = entries.entry(WordKey::new(&word)).or_default();
            if !bucket.contains(&word) {
                bucket.push(word);
                word_count += 1;
            }
        }

        debug!(
            "Indexed {word_count} words under {} distinct keys",
            entries.len()
        );

        Self {
            entries,
            word_count,
        }
    }

    /// Number of distinct keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Words stored under `key`, empty if the key is absent
    #[must_use]
    pub fn words_for(&self, key: &WordKey) -> &[String] {
        self.entries.get(key).map_or(&[], Vec::as_slice)
    }

    /// All stored keys, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &WordKey> {
        self.entries.keys()
    }

    /// Every stored word, grouped by key
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.values().flatten().map(String::as_str)
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&WordKey, &Vec<String>)> {
        self.entries.iter()
    }

    /// Words spelled with the same letters as `word`, excluding `word` itself
    ///
    /// # Examples
    /// ```
    /// use wordmatch::index::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["listen", "silent", "enlist"]);
    /// let mut anagrams = dictionary.find_anagrams("listen");
    /// anagrams.sort_unstable();
    /// assert_eq!(anagrams, ["enlist", "silent"]);
    /// ```
    #[must_use]
    pub fn find_anagrams(&self, word: &str) -> Vec<&str> {
        let word = word.to_ascii_lowercase();
        self.words_for(&WordKey::new(&word))
            .iter()
            .map(String::as_str)
            .filter(|&candidate| candidate != word)
            .collect()
    }

    /// Lazily yield every word spellable with `letters`
    ///
    /// Scans all keys, since spellability is not a range over any single key
    /// order. No length or self-exclusion filtering happens here.
    pub fn find_subwords<'a>(&'a self, letters: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        let pool = WordKey::new(&letters.to_ascii_lowercase());
        self.entries
            .iter()
            .filter(move |(key, _)| key.is_spellable_with(&pool))
            .flat_map(|(_, words)| words.iter().map(String::as_str))
    }

    /// Like [`Dictionary::find_subwords`], but without `letters` itself
    pub fn find_subwords_excluding<'a>(
        &'a self,
        letters: &str,
    ) -> impl Iterator<Item = &'a str> + use<'a> {
        let query = letters.to_ascii_lowercase();
        self.find_subwords(letters)
            .filter(move |&word| word != query)
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn as_set<'a>(words: impl IntoIterator<Item = &'a str>) -> HashSet<&'a str> {
        words.into_iter().collect()
    }

    #[test]
    fn build_groups_anagrams() {
        let dictionary = Dictionary::new(["stop", "pots", "tops", "cat"]);
        assert_eq!(dictionary.len(), 2);
        assert_eq!(
            dictionary.words_for(&WordKey::new("post")),
            ["stop", "pots", "tops"]
        );
    }

    #[test]
    fn build_keeps_input_order_and_drops_repeats() {
        let dictionary = Dictionary::new(["silent", "listen", "silent", "enlist", "listen"]);
        assert_eq!(dictionary.word_count(), 3);
        assert_eq!(
            dictionary.words_for(&WordKey::new("listen")),
            ["silent", "listen", "enlist"]
        );
    }

    #[test]
    fn build_is_reproducible() {
        let words = ["tea", "eat", "ate", "tan", "ant", "nat"];
        let first = Dictionary::new(words);
        let second: Dictionary = words.into_iter().collect();
        for key in first.keys() {
            assert_eq!(first.words_for(key), second.words_for(key));
        }
    }

    #[test]
    fn anagrams_exclude_query_and_duplicates() {
        let dictionary = Dictionary::new(["listen", "silent", "enlist", "listen"]);
        let anagrams = dictionary.find_anagrams("listen");
        assert_eq!(anagrams.len(), 2);
        assert_eq!(as_set(anagrams), as_set(["silent", "enlist"]));
    }

    #[test]
    fn anagrams_of_unknown_letters_are_empty() {
        let dictionary = Dictionary::new(["listen", "silent"]);
        assert!(dictionary.find_anagrams("xyz").is_empty());
        assert!(Dictionary::default().find_anagrams("listen").is_empty());
    }

    #[test]
    fn anagrams_work_for_words_outside_dictionary() {
        let dictionary = Dictionary::new(["silent", "enlist"]);
        assert_eq!(
            as_set(dictionary.find_anagrams("tinsel")),
            as_set(["silent", "enlist"])
        );
    }

    #[test]
    fn subwords_respect_multiplicity() {
        let dictionary = Dictionary::new(["cat", "at", "a", "act", "tack"]);
        assert_eq!(
            as_set(dictionary.find_subwords("cat")),
            as_set(["cat", "at", "a", "act"])
        );
    }

    #[test]
    fn subwords_need_repeated_letters() {
        let dictionary = Dictionary::new(["all", "la", "lal"]);
        assert_eq!(as_set(dictionary.find_subwords("al")), as_set(["la"]));
        assert_eq!(
            as_set(dictionary.find_subwords("lla")),
            as_set(["all", "la", "lal"])
        );
    }

    #[test]
    fn subwords_excluding_drop_query_word() {
        let dictionary = Dictionary::new(["cat", "at", "a", "act", "tack"]);
        assert_eq!(
            as_set(dictionary.find_subwords_excluding("cat")),
            as_set(["at", "a", "act"])
        );
    }

    #[test]
    fn subwords_of_empty_letters() {
        let dictionary = Dictionary::new(["cat", "at"]);
        assert_eq!(dictionary.find_subwords("").count(), 0);
    }

    #[test]
    fn build_and_queries_lowercase_ascii() {
        let dictionary = Dictionary::new(["Cat", "ACT", "cat"]);
        assert_eq!(dictionary.word_count(), 2);
        assert_eq!(dictionary.words_for(&WordKey::new("act")), ["cat", "act"]);

        assert_eq!(dictionary.find_anagrams("CAT"), ["act"]);
        assert_eq!(as_set(dictionary.find_subwords("TAC")), as_set(["cat", "act"]));
        assert_eq!(as_set(dictionary.find_subwords_excluding("CAT")), as_set(["act"]));
    }

    #[test]
    fn non_ascii_letters_stay_literal() {
        let dictionary = Dictionary::new(["Été", "tée"]);
        assert_eq!(dictionary.words_for(&WordKey::new("Été")), ["Été"]);
        assert_eq!(dictionary.find_anagrams("été"), ["tée"]);
        assert!(dictionary.find_anagrams("ÉTÉ").is_empty());
    }

    #[test]
    fn words_iterates_everything_once() {
        let dictionary = Dictionary::new(["cat", "act", "dog", "cat"]);
        let mut words: Vec<&str> = dictionary.words().collect();
        words.sort_unstable();
        assert_eq!(words, ["act", "cat", "dog"]);
    }
}

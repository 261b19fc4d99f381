//! Blank-aware pattern search
//!
//! For a rack and a pattern, every stored key is priced by the letters it needs
//! beyond the pool (rack letters plus the pattern's literal letters). Keys whose
//! price fits in the rack's blanks are grouped by that price, cheapest first,
//! and each group's words are tested against the full pattern.
//!
//! # Algorithm
//! 1. pool = key(rack letters + pattern literals)
//! 2. cost(k) = letters of k not matched in pool; keep keys with |cost| <= blanks
//! 3. order groups by (|cost|, cost)
//! 4. per group: words passing the pattern and query filters, minus words
//!    already yielded by a cheaper group; longest first, then alphabetical

use super::{Dictionary, QueryOptions};
use crate::core::{Pattern, TileSet, WordKey};
use crate::errors::WordMatchError;
use log::{debug, trace};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// Words that need exactly the same blank letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlankGroup<'a> {
    /// Letters that must be played as blanks
    pub blank_cost: WordKey,
    /// Longest first, ties in alphabetical order
    pub words: Vec<&'a str>,
}

impl BlankGroup<'_> {
    /// Number of blanks the group's words use
    #[inline]
    #[must_use]
    pub fn blanks(&self) -> usize {
        self.blank_cost.len()
    }
}

/// Results for one pattern of a [`Dictionary::find_options`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternOptions<'a> {
    pub pattern: String,
    pub groups: Vec<BlankGroup<'a>>,
}

impl PatternOptions<'_> {
    /// Total words across all groups
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.groups.iter().map(|g| g.words.len()).sum()
    }
}

/// Pull iterator over the blank-cost groups of one pattern query
///
/// Key-level pricing happens up front; pattern tests run per group as the
/// iterator is advanced. A matching error ends the iteration.
#[derive(Debug)]
pub struct PatternMatches<'a> {
    dictionary: &'a Dictionary,
    pattern: Pattern,
    options: QueryOptions,
    groups: std::vec::IntoIter<(WordKey, Vec<&'a WordKey>)>,
    seen: FxHashSet<&'a str>,
}

impl<'a> PatternMatches<'a> {
    /// Price every key of `dictionary` against the rack and pattern
    #[must_use]
    pub fn new(
        dictionary: &'a Dictionary,
        tiles: &TileSet,
        pattern: Pattern,
        options: QueryOptions,
    ) -> Self {
        let pool = WordKey::new(&format!("{}{}", tiles.letters(), pattern.literal_letters()));
        let blanks = tiles.blanks();

        let mut by_cost: BTreeMap<(usize, WordKey), Vec<&'a WordKey>> = BTreeMap::new();
        for (key, _) in dictionary.entries() {
            let cost = key.symmetric_diff(&pool).only_left;
            let size = cost.len();
            if size <= blanks {
                by_cost.entry((size, cost)).or_default().push(key);
            }
        }

        debug!(
            "Pattern {pattern} over pool '{pool}' with {blanks} blanks: {} cost groups",
            by_cost.len()
        );

        let groups: Vec<_> = by_cost
            .into_iter()
            .map(|((_, cost), keys)| (cost, keys))
            .collect();

        Self {
            dictionary,
            pattern,
            options,
            groups: groups.into_iter(),
            seen: FxHashSet::default(),
        }
    }

    /// Words of one cost group that pass the pattern, filters, and dedup
    fn collect_group(&mut self, keys: &[&'a WordKey]) -> Result<Vec<&'a str>, WordMatchError> {
        let mut words = Vec::new();

        for &key in keys {
            for word in self.dictionary.words_for(key) {
                let word = word.as_str();
                if self.seen.contains(word) || !self.options.accepts(word) {
                    continue;
                }
                if self.pattern.is_match(word)? {
                    words.push(word);
                }
            }
        }

        words.sort_unstable_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });
        self.seen.extend(words.iter().copied());
        Ok(words)
    }
}

impl<'a> Iterator for PatternMatches<'a> {
    type Item = Result<BlankGroup<'a>, WordMatchError>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((blank_cost, keys)) = self.groups.next() {
            match self.collect_group(&keys) {
                Ok(words) if words.is_empty() => {}
                Ok(words) => {
                    trace!("Blank cost '{blank_cost}': {} words", words.len());
                    return Some(Ok(BlankGroup { blank_cost, words }));
                }
                Err(e) => {
                    self.groups = Vec::new().into_iter();
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

impl Dictionary {
    /// Blank-aware pattern search with default options
    ///
    /// Yields one [`BlankGroup`] per distinct blank cost that produces new
    /// words, in order of increasing cost. No word is yielded twice. Calling it
    /// again recomputes from scratch.
    ///
    /// # Errors
    ///
    /// Returns `WordMatchError::PatternSyntax` if `pattern` does not compile.
    ///
    /// # Examples
    /// ```
    /// use wordmatch::core::TileSet;
    /// use wordmatch::index::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["cat", "cot", "coat"]);
    /// let groups: Vec<_> = dictionary
    ///     .find_subwords_for_pattern(&TileSet::parse("ca_t"), r"^c.t$")?
    ///     .collect::<Result<_, _>>()?;
    ///
    /// assert_eq!(groups[0].blank_cost.as_str(), "");
    /// assert_eq!(groups[0].words, ["cat"]);
    /// assert_eq!(groups[1].blank_cost.as_str(), "o");
    /// assert_eq!(groups[1].words, ["cot"]);
    /// # Ok::<(), wordmatch::errors::WordMatchError>(())
    /// ```
    pub fn find_subwords_for_pattern(
        &self,
        tiles: &TileSet,
        pattern: &str,
    ) -> Result<PatternMatches<'_>, WordMatchError> {
        self.find_subwords_for_pattern_with(tiles, pattern, &QueryOptions::default())
    }

    /// Blank-aware pattern search with length and must-use filters
    ///
    /// # Errors
    ///
    /// Returns `WordMatchError::PatternSyntax` if `pattern` does not compile.
    pub fn find_subwords_for_pattern_with(
        &self,
        tiles: &TileSet,
        pattern: &str,
        options: &QueryOptions,
    ) -> Result<PatternMatches<'_>, WordMatchError> {
        let pattern = Pattern::new(pattern)?;
        Ok(PatternMatches::new(self, tiles, pattern, options.clone()))
    }

    /// Run an independent pattern search per pattern, in input order
    ///
    /// Patterns are searched in parallel. Deduplication is per pattern, so a
    /// word may appear under several patterns.
    ///
    /// # Errors
    ///
    /// Returns a `WordMatchError` if any pattern fails to compile or match.
    pub fn find_options<P>(
        &self,
        tiles: &TileSet,
        patterns: &[P],
        options: &QueryOptions,
    ) -> Result<Vec<PatternOptions<'_>>, WordMatchError>
    where
        P: AsRef<str> + Sync,
    {
        patterns
            .par_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                let groups = self
                    .find_subwords_for_pattern_with(tiles, pattern, options)?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(PatternOptions {
                    pattern: pattern.to_string(),
                    groups,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search<'a>(dictionary: &'a Dictionary, rack: &str, pattern: &str) -> Vec<BlankGroup<'a>> {
        dictionary
            .find_subwords_for_pattern(&TileSet::parse(rack), pattern)
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn cheapest_group_first() {
        let dictionary = Dictionary::new(["cat", "cot", "coat"]);
        let groups = search(&dictionary, "ca_t", r"^c.t$");

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].blanks(), 0);
        assert_eq!(groups[0].words, ["cat"]);
        assert_eq!(groups[1].blank_cost.as_str(), "o");
        assert_eq!(groups[1].words, ["cot"]);
    }

    #[test]
    fn no_blanks_means_exact_pool_only() {
        let dictionary = Dictionary::new(["cat", "cot", "coat"]);
        let groups = search(&dictionary, "cat", r"^c.t$");

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].words, ["cat"]);
    }

    #[test]
    fn too_expensive_words_never_appear() {
        let dictionary = Dictionary::new(["cat", "coast", "toast"]);
        let groups = search(&dictionary, "_", "t");

        // "cat" needs c,a beyond the pool {t}; too many for one blank
        assert!(groups.is_empty());

        let groups = search(&dictionary, "ca_", "t");
        let words: Vec<&str> = groups.iter().flat_map(|g| g.words.clone()).collect();
        assert_eq!(words, ["cat"]);
    }

    #[test]
    fn pattern_literals_join_the_pool() {
        let dictionary = Dictionary::new(["quit", "quilt"]);
        let groups = search(&dictionary, "it", "^qu");

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].words, ["quit"]);
    }

    #[test]
    fn pattern_filters_positions_not_just_letters() {
        let dictionary = Dictionary::new(["tab", "bat"]);
        let groups = search(&dictionary, "tab", "^b");

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].words, ["bat"]);
    }

    #[test]
    fn equal_blank_counts_order_by_letters() {
        let dictionary = Dictionary::new(["cot", "cut", "cit"]);
        let groups = search(&dictionary, "ct_", "^c.t$");

        let costs: Vec<&str> = groups.iter().map(|g| g.blank_cost.as_str()).collect();
        assert_eq!(costs, ["i", "o", "u"]);
    }

    #[test]
    fn groups_are_non_decreasing_and_words_unique() {
        let dictionary = Dictionary::new([
            "rate", "tear", "treat", "tread", "trade", "dater", "eat", "ate", "tee", "street",
        ]);
        let groups = search(&dictionary, "rate__", "");

        let mut last = 0;
        let mut seen = std::collections::HashSet::new();
        for group in &groups {
            assert!(group.blanks() >= last);
            last = group.blanks();
            for word in &group.words {
                assert!(seen.insert(*word), "{word} yielded twice");
            }
        }
        assert!(seen.contains("tread"));
        assert!(seen.contains("treat"));
        // needs e,s,t beyond the pool: three letters for two blanks
        assert!(!seen.contains("street"));
    }

    #[test]
    fn words_within_group_longest_first() {
        let dictionary = Dictionary::new(["at", "cat", "act", "tact", "a"]);
        let groups = search(&dictionary, "tact", "");

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].words, ["tact", "act", "cat", "at", "a"]);
    }

    #[test]
    fn search_is_restartable() {
        let dictionary = Dictionary::new(["cat", "cot", "cut"]);
        let first = search(&dictionary, "c_t", "t$");
        let second = search(&dictionary, "c_t", "t$");
        assert_eq!(first, second);
    }

    #[test]
    fn options_filter_results() {
        let dictionary = Dictionary::new(["at", "cat", "act", "tact"]);
        let options = QueryOptions::new().with_min_length(3).with_must_use("c");
        let groups: Vec<_> = dictionary
            .find_subwords_for_pattern_with(&TileSet::parse("tact"), "", &options)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].words, ["tact", "act", "cat"]);
    }

    #[test]
    fn malformed_pattern_fails_up_front() {
        let dictionary = Dictionary::new(["cat"]);
        let result = dictionary.find_subwords_for_pattern(&TileSet::parse("cat"), "(c");
        assert!(matches!(result, Err(WordMatchError::PatternSyntax { .. })));
    }

    #[test]
    fn empty_dictionary_yields_nothing() {
        let dictionary = Dictionary::default();
        assert!(search(&dictionary, "abc__", "").is_empty());
    }

    #[test]
    fn group_literals_are_not_drawn_from_rack() {
        let dictionary = Dictionary::new(["abc"]);
        for pattern in [
            "^(?:ab)c$",
            "^(?>ab)c$",
            "^(?<first>a)bc$",
            "^(?P<first>a)bc$",
            "(?<=a)bc$",
            "^a(?=b)bc$",
            "^(?i)abc$",
        ] {
            let groups = search(&dictionary, "", pattern);
            assert_eq!(groups.len(), 1, "{pattern}");
            assert_eq!(groups[0].blanks(), 0, "{pattern}");
            assert_eq!(groups[0].words, ["abc"], "{pattern}");
        }
    }

    #[test]
    fn backreference_names_do_not_join_pool() {
        let dictionary = Dictionary::new(["zz"]);
        for pattern in [r"^(?<z>.)\k<z>$", r"^(?P<z>.)(?P=z)$", r"^(.)\1$"] {
            assert!(search(&dictionary, "z", pattern).is_empty(), "{pattern}");

            let groups = search(&dictionary, "z_", pattern);
            assert_eq!(groups.len(), 1, "{pattern}");
            assert_eq!(groups[0].blank_cost.as_str(), "z", "{pattern}");
            assert_eq!(groups[0].words, ["zz"], "{pattern}");
        }
    }

    #[test]
    fn escaped_letters_are_not_literals() {
        let dictionary = Dictionary::new(["dog"]);
        // `\d` and `\w` are classes: "dog" still needs all three letters
        assert!(search(&dictionary, "", r"^\w\w\w$").is_empty());
        assert!(search(&dictionary, "og", r"^\D").is_empty());
        assert_eq!(search(&dictionary, "og", "^d")[0].words, ["dog"]);
    }

    #[test]
    fn uppercase_rack_matches_lowercase_dictionary() {
        let dictionary = Dictionary::new(["cat", "act"]);
        let groups = search(&dictionary, "CAT", "");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].words, ["act", "cat"]);
    }

    #[test]
    fn longest_first_counts_letters_not_bytes() {
        let dictionary = Dictionary::new(["éé", "abc"]);
        let groups = search(&dictionary, "ééabc", "");
        // "éé" is 4 bytes but 2 letters
        assert_eq!(groups[0].words, ["abc", "éé"]);
    }

    #[test]
    fn find_options_keeps_pattern_order() {
        let dictionary = Dictionary::new(["cat", "cot", "act"]);
        let patterns = ["^c", "^a", "t$"];
        let options = dictionary
            .find_options(&TileSet::parse("cat_"), &patterns, &QueryOptions::default())
            .unwrap();

        let order: Vec<&str> = options.iter().map(|o| o.pattern.as_str()).collect();
        assert_eq!(order, patterns);
        assert_eq!(options[1].groups[0].words, ["act"]);
    }

    #[test]
    fn find_options_does_not_dedup_across_patterns() {
        let dictionary = Dictionary::new(["cat"]);
        let options = dictionary
            .find_options(&TileSet::parse("cat"), &["^c", "t$"], &QueryOptions::default())
            .unwrap();

        assert_eq!(options[0].word_count(), 1);
        assert_eq!(options[1].word_count(), 1);
        assert_eq!(options[0].groups[0].words, options[1].groups[0].words);
    }

    #[test]
    fn find_options_propagates_pattern_errors() {
        let dictionary = Dictionary::new(["cat"]);
        let result =
            dictionary.find_options(&TileSet::parse("cat"), &["^c", "[t"], &QueryOptions::default());
        assert!(matches!(result, Err(WordMatchError::PatternSyntax { .. })));
    }
}

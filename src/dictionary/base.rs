use std::fmt::Debug;

use crate::dictionary::WordFrequency;

/// Default number of completions returned by [`Dictionary::autocomplete`].
pub const AUTOCOMPLETE_LIMIT: usize = 3;

/// Operations shared by every dictionary structure.
///
/// Implementations must agree on every result; only their cost differs.
/// Nothing here fails exceptionally: mutations return `false` when the word
/// is already present (insert) or missing (delete) and leave the dictionary
/// untouched, and lookups return `0` or an empty list.
pub trait Dictionary: Debug {
    /// Looks up the frequency of `word`, or `0` if it is not stored.
    ///
    /// A stored word with frequency zero is indistinguishable from a missing
    /// one here; use [`Dictionary::contains`] to tell them apart.
    fn search(&self, word: &str) -> usize;

    /// Adds `entry` unless its word is already stored. Existing entries are
    /// never overwritten.
    fn insert(&mut self, entry: WordFrequency) -> bool;

    /// Removes the entry for `word`, returning `false` if there is none.
    fn delete(&mut self, word: &str) -> bool;

    /// Returns the most frequent entries whose word starts with `prefix`.
    ///
    /// Results are ordered by descending frequency, equal frequencies by
    /// ascending word, and cut to the dictionary's result limit
    /// ([`AUTOCOMPLETE_LIMIT`] unless configured otherwise). The empty prefix
    /// matches every word.
    fn autocomplete(&self, prefix: &str) -> Vec<WordFrequency>;

    fn contains(&self, word: &str) -> bool;

    /// Number of stored words.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts every entry in order. When a word appears more than once the
    /// first occurrence wins and the rest are dropped.
    fn build(&mut self, entries: Vec<WordFrequency>) {
        let total = entries.len();
        let mut rejected = 0usize;
        for entry in entries {
            if !self.insert(entry) {
                rejected += 1;
            }
        }
        log::debug!(
            "Built dictionary from {} entries ({} duplicates rejected, {} words stored)",
            total,
            rejected,
            self.len()
        );
    }
}

/// Orders `matches` best first and keeps at most `limit` of them.
pub(crate) fn rank(mut matches: Vec<WordFrequency>, limit: usize) -> Vec<WordFrequency> {
    matches.sort_by(|a, b| {
        b.frequency()
            .cmp(&a.frequency())
            .then_with(|| a.word().cmp(b.word()))
    });
    matches.truncate(limit);
    matches
}


#[cfg(test)]
mod tests {
    use test_log::test;

    use super::contract::{entries, rendered};
    use super::rank;

    #[test]
    fn rank_sorts_by_frequency_then_word() {
        let ranked = rank(entries(&[("b", 2), ("a", 2), ("c", 7), ("d", 1)]), 3);
        assert_eq!(rendered(ranked), vec!["c:7", "a:2", "b:2"]);
    }

    #[test]
    fn rank_respects_limit() {
        assert!(rank(entries(&[("a", 1)]), 0).is_empty());
        assert_eq!(rank(entries(&[("a", 1), ("b", 2)]), 10).len(), 2);
    }
}

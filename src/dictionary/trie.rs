mod node;

use std::fmt::{Debug, Formatter};

use crate::dictionary::base::{rank, Dictionary, AUTOCOMPLETE_LIMIT};
use crate::dictionary::trie::node::TrieNode;
use crate::dictionary::WordFrequency;

/// Dictionary backed by a prefix tree keyed by character.
///
/// Lookups cost one step per character of the query. Deleting a word only
/// clears its terminal mark; the nodes stay in place, so the tree never
/// shrinks.
pub struct TrieDictionary {
    root: TrieNode,
    len: usize,
    max_results: usize,
}

impl TrieDictionary {
    pub fn new() -> TrieDictionary {
        Self::with_max_results(AUTOCOMPLETE_LIMIT)
    }

    pub fn with_max_results(max_results: usize) -> TrieDictionary {
        TrieDictionary {
            root: Default::default(),
            len: 0,
            max_results,
        }
    }

    /// Number of nodes below the root, including ones left behind by deletes.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.root.traverse_prefix(&mut |_| count += 1);
        count - 1
    }

    fn completions(&self, prefix: &str) -> Vec<WordFrequency> {
        let mut completions = vec![];
        if let Some(start) = self.root.get_node(prefix) {
            let mut path = prefix.to_owned();
            start.collect_terminals(&mut path, &mut completions);
        }
        completions
    }
}

impl Default for TrieDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary for TrieDictionary {
    fn search(&self, word: &str) -> usize {
        self.root
            .get_node(word)
            .and_then(|node| node.frequency)
            .unwrap_or(0)
    }

    fn insert(&mut self, entry: WordFrequency) -> bool {
        let mut current = &mut self.root;
        for c in entry.word().chars() {
            current = current.get_or_create_child(c);
        }
        if current.is_terminal() {
            log::trace!("Rejected duplicate word {:?}", entry.word());
            return false;
        }
        current.frequency = Some(entry.frequency());
        self.len += 1;
        true
    }

    fn delete(&mut self, word: &str) -> bool {
        match self.root.get_node_mut(word) {
            Some(node) if node.is_terminal() => {
                node.frequency = None;
                self.len -= 1;
                true
            }
            _ => {
                log::trace!("Nothing to delete for {:?}", word);
                false
            }
        }
    }

    fn autocomplete(&self, prefix: &str) -> Vec<WordFrequency> {
        rank(self.completions(prefix), self.max_results)
    }

    fn contains(&self, word: &str) -> bool {
        self.root
            .get_node(word)
            .map(|node| node.is_terminal())
            .unwrap_or(false)
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl Debug for TrieDictionary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut entries = self.completions("");
        entries.sort_by(|a, b| a.word().cmp(b.word()));
        f.debug_list().entries(entries).finish()
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::dictionary::base::contract;
    use crate::dictionary::{Dictionary, TrieDictionary, WordFrequency};

    fn make() -> Box<dyn Dictionary> {
        Box::new(TrieDictionary::new())
    }

    #[test]
    fn satisfies_contract() {
        contract::all(make);
    }

    #[test]
    fn finds_words_in_trie() {
        let mut trie = TrieDictionary::new();
        trie.build(contract::entries(&[
            ("HELLO", 1),
            ("HELP", 2),
            ("GOODBYE", 3),
            ("GOOD", 4),
        ]));
        for word in ["HELLO", "HELP", "GOODBYE", "GOOD"] {
            assert!(trie.contains(word));
        }
    }

    #[test]
    fn doesnt_find_prefixes_of_stored_words() {
        let mut trie = TrieDictionary::new();
        trie.build(contract::entries(&[("HELLO", 1), ("GOODBYE", 3)]));
        for word in ["HE", "H", "GOODBY", "LOL"] {
            assert!(!trie.contains(word));
            assert_eq!(trie.search(word), 0);
            assert!(!trie.delete(word));
        }
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn delete_keeps_nodes() {
        let mut trie = TrieDictionary::new();
        trie.build(contract::entries(&[("car", 2), ("cart", 5)]));
        assert_eq!(trie.node_count(), 4);

        assert!(trie.delete("cart"));
        assert!(trie.delete("car"));
        assert_eq!(trie.node_count(), 4);
        assert!(trie.autocomplete("c").is_empty());

        assert!(trie.insert(WordFrequency::from(("ca", 1))));
        assert_eq!(trie.node_count(), 4);
        assert!(trie.insert(WordFrequency::from(("cab", 1))));
        assert_eq!(trie.node_count(), 5);
    }

    #[test]
    fn exact_prefix_word_listed_once() {
        let mut trie = TrieDictionary::new();
        trie.build(contract::entries(&[("go", 9), ("goal", 1)]));
        assert_eq!(
            contract::rendered(trie.autocomplete("go")),
            vec!["go:9", "goal:1"]
        );
    }

    #[test]
    fn custom_result_limit() {
        let mut trie = TrieDictionary::with_max_results(5);
        trie.build(contract::entries(&[
            ("a", 1),
            ("ab", 2),
            ("abc", 3),
            ("abd", 4),
            ("b", 5),
        ]));
        assert_eq!(
            contract::rendered(trie.autocomplete("a")),
            vec!["abd:4", "abc:3", "ab:2", "a:1"]
        );
    }

    #[test]
    fn debug_lists_words_in_order() {
        let mut trie = TrieDictionary::new();
        trie.build(contract::entries(&[("b", 1), ("a", 2)]));
        assert_eq!(
            format!("{:?}", trie),
            r#"[WordFrequency { word: "a", frequency: 2 }, WordFrequency { word: "b", frequency: 1 }]"#
        );
    }
}

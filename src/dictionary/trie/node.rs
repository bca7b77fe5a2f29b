use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use crate::dictionary::WordFrequency;

/// One character step in the trie.
///
/// `frequency` doubles as the terminal marker: it is `Some` exactly when the
/// path leading here spells a stored word.
#[derive(Default)]
pub(crate) struct TrieNode {
    pub(crate) children: HashMap<char, TrieNode>,
    pub(crate) frequency: Option<usize>,
}

impl TrieNode {
    pub(crate) fn is_terminal(&self) -> bool {
        self.frequency.is_some()
    }

    pub(crate) fn get_child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    pub(crate) fn get_or_create_child(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_default()
    }

    /// Follows `word` one edge per character without creating anything.
    pub(crate) fn get_node(&self, word: &str) -> Option<&TrieNode> {
        word.chars()
            .try_fold(self, |node, c| node.get_child(c))
    }

    pub(crate) fn get_node_mut(&mut self, word: &str) -> Option<&mut TrieNode> {
        word.chars()
            .try_fold(self, |node, c| node.children.get_mut(&c))
    }

    pub(crate) fn traverse_prefix<F>(&self, f: &mut F)
        where F: FnMut(&TrieNode) {
        f(self);
        self.children.values()
            .for_each(|child| child.traverse_prefix(f));
    }

    /// Pushes every stored word at or below this node onto `out`.
    ///
    /// `path` holds the word spelled so far and is restored before returning.
    pub(crate) fn collect_terminals(&self, path: &mut String, out: &mut Vec<WordFrequency>) {
        if let Some(frequency) = self.frequency {
            out.push(WordFrequency::new(path.clone(), frequency));
        }
        for (&c, child) in &self.children {
            path.push(c);
            child.collect_terminals(path, out);
            path.pop();
        }
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut letters: Vec<_> = self.children.keys().collect();
        letters.sort();
        f.debug_struct("TrieNode")
            .field("frequency", &self.frequency)
            .field("children", &letters)
            .finish()
    }
}

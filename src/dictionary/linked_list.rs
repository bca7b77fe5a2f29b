use std::fmt::{Debug, Formatter};

use delegate::delegate;
use derive_new::new;

use crate::dictionary::base::{rank, Dictionary, AUTOCOMPLETE_LIMIT};
use crate::dictionary::WordFrequency;

#[derive(new, Debug)]
struct ListNode {
    entry: WordFrequency,
    #[new(default)]
    next: Option<Box<ListNode>>,
}

impl ListNode {
    delegate! {
        to self.entry {
            fn word(&self) -> &str;
        }
    }
}

/// Dictionary backed by a singly-linked chain of nodes.
///
/// The dictionary owns the head and every node owns the rest of the chain,
/// so unlinking a node hands its successor over to the predecessor.
pub struct LinkedListDictionary {
    head: Option<Box<ListNode>>,
    len: usize,
    max_results: usize,
}

impl LinkedListDictionary {
    pub fn new() -> LinkedListDictionary {
        Self::with_max_results(AUTOCOMPLETE_LIMIT)
    }

    pub fn with_max_results(max_results: usize) -> LinkedListDictionary {
        LinkedListDictionary {
            head: None,
            len: 0,
            max_results,
        }
    }

    fn iter(&self) -> ListCursor<'_> {
        ListCursor {
            node: self.head.as_deref(),
        }
    }

    fn find(&self, word: &str) -> Option<&WordFrequency> {
        self.iter().find(|entry| entry.word() == word)
    }
}

impl Default for LinkedListDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary for LinkedListDictionary {
    fn search(&self, word: &str) -> usize {
        self.find(word).map(WordFrequency::frequency).unwrap_or(0)
    }

    fn insert(&mut self, entry: WordFrequency) -> bool {
        let mut link = &mut self.head;
        while let Some(node) = link {
            if node.word() == entry.word() {
                log::trace!("Rejected duplicate word {:?}", entry.word());
                return false;
            }
            link = &mut node.next;
        }
        *link = Some(Box::new(ListNode::new(entry)));
        self.len += 1;
        true
    }

    fn delete(&mut self, word: &str) -> bool {
        let head_matches = match &self.head {
            Some(head) => head.word() == word,
            None => return false,
        };
        if head_matches {
            if let Some(head) = self.head.take() {
                self.head = head.next;
            }
            self.len -= 1;
            return true;
        }

        let mut previous = match self.head.as_mut() {
            Some(head) => head,
            None => return false,
        };
        loop {
            let found = match &previous.next {
                Some(current) => current.word() == word,
                None => {
                    log::trace!("Nothing to delete for {:?}", word);
                    return false;
                }
            };
            if found {
                if let Some(current) = previous.next.take() {
                    previous.next = current.next;
                }
                self.len -= 1;
                return true;
            }
            previous = match previous.next.as_mut() {
                Some(current) => current,
                None => return false,
            };
        }
    }

    fn autocomplete(&self, prefix: &str) -> Vec<WordFrequency> {
        let matches = self
            .iter()
            .filter(|entry| entry.word().starts_with(prefix))
            .cloned()
            .collect();
        rank(matches, self.max_results)
    }

    fn contains(&self, word: &str) -> bool {
        self.find(word).is_some()
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl Drop for LinkedListDictionary {
    fn drop(&mut self) {
        // unlink one node at a time so long chains don't recurse
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl Debug for LinkedListDictionary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

struct ListCursor<'a> {
    node: Option<&'a ListNode>,
}

impl<'a> Iterator for ListCursor<'a> {
    type Item = &'a WordFrequency;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.next.as_deref();
        Some(&node.entry)
    }
}

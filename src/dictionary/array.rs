use crate::dictionary::base::{rank, Dictionary, AUTOCOMPLETE_LIMIT};
use crate::dictionary::WordFrequency;

/// Dictionary backed by a flat vector; every operation is a linear scan.
#[derive(Debug, Clone)]
pub struct ArrayDictionary {
    word_frequencies: Vec<WordFrequency>,
    max_results: usize,
}

impl ArrayDictionary {
    pub fn new() -> ArrayDictionary {
        Self::with_max_results(AUTOCOMPLETE_LIMIT)
    }

    pub fn with_max_results(max_results: usize) -> ArrayDictionary {
        ArrayDictionary {
            word_frequencies: vec![],
            max_results,
        }
    }

    fn position(&self, word: &str) -> Option<usize> {
        self.word_frequencies
            .iter()
            .position(|entry| entry.word() == word)
    }
}

impl Default for ArrayDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary for ArrayDictionary {
    fn search(&self, word: &str) -> usize {
        self.position(word)
            .map(|idx| self.word_frequencies[idx].frequency())
            .unwrap_or(0)
    }

    fn insert(&mut self, entry: WordFrequency) -> bool {
        if self.position(entry.word()).is_some() {
            log::trace!("Rejected duplicate word {:?}", entry.word());
            return false;
        }
        self.word_frequencies.push(entry);
        true
    }

    fn delete(&mut self, word: &str) -> bool {
        match self.position(word) {
            Some(idx) => {
                self.word_frequencies.remove(idx);
                true
            }
            None => {
                log::trace!("Nothing to delete for {:?}", word);
                false
            }
        }
    }

    fn autocomplete(&self, prefix: &str) -> Vec<WordFrequency> {
        let matches = self
            .word_frequencies
            .iter()
            .filter(|entry| entry.word().starts_with(prefix))
            .cloned()
            .collect();
        rank(matches, self.max_results)
    }

    fn contains(&self, word: &str) -> bool {
        self.position(word).is_some()
    }

    fn len(&self) -> usize {
        self.word_frequencies.len()
    }
}

use std::fmt::{Display, Formatter};

use derive_new::new;
use serde::{Deserialize, Serialize};

/// A word paired with how often it occurs.
///
/// Entries are never changed once built; a dictionary replaces or drops them
/// wholesale.
#[derive(new, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordFrequency {
    word: String,
    frequency: usize,
}

impl WordFrequency {
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn frequency(&self) -> usize {
        self.frequency
    }
}

impl From<(&str, usize)> for WordFrequency {
    fn from((word, frequency): (&str, usize)) -> Self {
        WordFrequency::new(word.to_owned(), frequency)
    }
}

impl Display for WordFrequency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.word, self.frequency)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::WordFrequency;

    #[test]
    fn displays_as_word_colon_frequency() {
        assert_eq!(WordFrequency::from(("apple", 10)).to_string(), "apple:10");
    }

    #[test]
    fn deserializes_from_json_object() {
        let entry: WordFrequency =
            serde_json::from_str(r#"{"word": "banana", "frequency": 3}"#).unwrap();
        assert_eq!(entry.word(), "banana");
        assert_eq!(entry.frequency(), 3);
    }
}

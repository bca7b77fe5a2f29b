//! Selection of the backing structure for a dictionary.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::dictionary::{
    ArrayDictionary, Dictionary, LinkedListDictionary, TrieDictionary, AUTOCOMPLETE_LIMIT,
};
use crate::error::{Error, Result};

/// The structure a dictionary is stored in, named by the tags `array`,
/// `linkedlist` and `trie`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Approach {
    Array,
    #[serde(alias = "linked_list", alias = "linked-list")]
    LinkedList,
    #[default]
    Trie,
}

impl Approach {
    pub const ALL: [Approach; 3] = [Approach::Array, Approach::LinkedList, Approach::Trie];

    pub fn tag(&self) -> &'static str {
        match self {
            Approach::Array => "array",
            Approach::LinkedList => "linkedlist",
            Approach::Trie => "trie",
        }
    }

    /// An empty dictionary of this kind with the default result limit.
    pub fn new_dictionary(&self) -> Box<dyn Dictionary> {
        self.with_max_results(AUTOCOMPLETE_LIMIT)
    }

    fn with_max_results(&self, max_results: usize) -> Box<dyn Dictionary> {
        match self {
            Approach::Array => Box::new(ArrayDictionary::with_max_results(max_results)),
            Approach::LinkedList => Box::new(LinkedListDictionary::with_max_results(max_results)),
            Approach::Trie => Box::new(TrieDictionary::with_max_results(max_results)),
        }
    }
}

impl FromStr for Approach {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "array" => Ok(Approach::Array),
            "linkedlist" | "linked_list" | "linked-list" => Ok(Approach::LinkedList),
            "trie" => Ok(Approach::Trie),
            _ => Err(Error::UnknownApproach(s.to_owned())),
        }
    }
}

impl Display for Approach {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Settings for constructing a dictionary.
///
/// ```
/// use word_dictionary::{Approach, DictionaryConfig};
///
/// let config = DictionaryConfig::builder()
///     .approach(Approach::LinkedList)
///     .max_results(5)
///     .build();
/// assert_eq!(config, DictionaryConfig::from_json(r#"{"approach": "linkedlist", "max_results": 5}"#).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    #[builder(default)]
    pub approach: Approach,
    /// Upper bound on the number of autocomplete results.
    #[builder(default = AUTOCOMPLETE_LIMIT)]
    pub max_results: usize,
}

impl DictionaryConfig {
    /// Reads a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<DictionaryConfig> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn build_dictionary(&self) -> Box<dyn Dictionary> {
        log::debug!(
            "Using {} dictionary (up to {} completions)",
            self.approach,
            self.max_results
        );
        self.approach.with_max_results(self.max_results)
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig::builder().build()
    }
}

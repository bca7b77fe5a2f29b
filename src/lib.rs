//! In-memory word dictionaries with exact lookup, insertion, deletion and
//! frequency-ranked prefix autocomplete.
//!
//! Three structures implement the same [`Dictionary`] contract and can be
//! swapped without changing observable results:
//!
//! * [`ArrayDictionary`] keeps entries in a flat vector,
//! * [`LinkedListDictionary`] keeps them in a singly-linked chain,
//! * [`TrieDictionary`] keeps them as paths in a prefix tree.
//!
//! ```
//! use word_dictionary::{Approach, Dictionary, WordFrequency};
//!
//! let mut dict = Approach::Trie.new_dictionary();
//! dict.build(vec![
//!     WordFrequency::from(("app", 5)),
//!     WordFrequency::from(("apple", 10)),
//!     WordFrequency::from(("apply", 7)),
//! ]);
//! let words: Vec<_> = dict.autocomplete("app").iter().map(|e| e.to_string()).collect();
//! assert_eq!(words, vec!["apple:10", "apply:7", "app:5"]);
//! ```

pub mod config;
pub mod dictionary;
pub mod error;

pub use config::{Approach, DictionaryConfig};
pub use dictionary::{
    ArrayDictionary, Dictionary, LinkedListDictionary, TrieDictionary, WordFrequency,
    AUTOCOMPLETE_LIMIT,
};
pub use error::{Error, Result};

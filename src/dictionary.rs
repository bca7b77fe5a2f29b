mod array;
mod base;
mod linked_list;
mod trie;
mod word_frequency;

pub use array::ArrayDictionary;
pub use base::{Dictionary, AUTOCOMPLETE_LIMIT};
pub use linked_list::LinkedListDictionary;
pub use trie::TrieDictionary;
pub use word_frequency::WordFrequency;

//! Error-handling module for the crate

use thiserror::Error;

/// Errors raised while selecting or configuring a dictionary.
///
/// The dictionary operations themselves never fail; they report duplicate or
/// missing words through their return values.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration tag names no known structure
    #[error("unknown dictionary approach `{0}` (expected one of: array, linkedlist, trie)")]
    UnknownApproach(String),
    /// The JSON configuration could not be parsed
    #[error("invalid dictionary configuration")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

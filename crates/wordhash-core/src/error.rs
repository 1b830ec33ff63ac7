//! Error types for the wordhash core.

use thiserror::Error;

/// Errors from loading or indexing a word list.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    #[error("word list has {found} usable words, need at least 2")]
    TooFewWords { found: usize },

    #[error("duplicate word in list: {0:?}")]
    DuplicateWord(String),

    #[error("word index {index} out of range for list of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors that can occur while encoding a friendly ID.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("input is empty")]
    EmptyInput,

    #[error("word count must be at least 1")]
    InvalidWordCount,

    #[error("separator must not be empty")]
    EmptySeparator,

    #[error("salt size must be at least 1 byte")]
    InvalidSaltSize,

    #[error("digest too short: {available} bytes cannot supply {needed} index groups")]
    InsufficientDigestLength { needed: usize, available: usize },

    #[error(transparent)]
    WordList(#[from] WordListError),
}

//! Encoder configuration.

use serde::{Deserialize, Serialize};

use crate::error::EncodeError;

/// Default number of words in a friendly ID.
pub const DEFAULT_N_WORDS: usize = 3;
/// Default checksum length in characters.
pub const DEFAULT_CHECKSUM_LEN: usize = 2;
/// Default token separator.
pub const DEFAULT_SEPARATOR: &str = ".";
/// Default generated-salt size in bytes.
pub const DEFAULT_SALT_SIZE: usize = 32;

/// Parameters for friendly-ID encoding.
///
/// A plain value object: no hidden defaults beyond the documented ones,
/// passed explicitly to every encoding call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Number of words in the phrase. Must be at least 1.
    pub n_words: usize,
    /// Checksum length in base36 characters. 0 disables the checksum.
    pub checksum_len: usize,
    /// Separator between tokens, shared by words and checksum. Non-empty.
    pub separator: String,
    /// Size in bytes of auto-generated salts. Must be at least 1.
    pub salt_size: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            n_words: DEFAULT_N_WORDS,
            checksum_len: DEFAULT_CHECKSUM_LEN,
            separator: DEFAULT_SEPARATOR.to_string(),
            salt_size: DEFAULT_SALT_SIZE,
        }
    }
}

impl EncoderConfig {
    /// Set the word count.
    pub fn with_n_words(mut self, n_words: usize) -> Self {
        self.n_words = n_words;
        self
    }

    /// Set the checksum length.
    pub fn with_checksum_len(mut self, checksum_len: usize) -> Self {
        self.checksum_len = checksum_len;
        self
    }

    /// Set the token separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the generated-salt size.
    pub fn with_salt_size(mut self, salt_size: usize) -> Self {
        self.salt_size = salt_size;
        self
    }

    /// Check the configuration invariants.
    pub fn validate(&self) -> Result<(), EncodeError> {
        if self.n_words == 0 {
            return Err(EncodeError::InvalidWordCount);
        }
        if self.separator.is_empty() {
            return Err(EncodeError::EmptySeparator);
        }
        if self.salt_size == 0 {
            return Err(EncodeError::InvalidSaltSize);
        }
        Ok(())
    }
}

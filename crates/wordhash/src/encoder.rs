//! The friendly-ID assembler.
//!
//! Orchestrates the core pipeline: keyed digest, word selection, checksum,
//! and joins the tokens with the configured separator.

use std::fmt;
use tracing::debug;

use wordhash_core::{
    compute_checksum, select_indices, Digest, EncodeError, EncoderConfig, WordList,
};

use crate::salt::Salt;

/// A friendly ID: the selected words plus an optional checksum token.
///
/// Never mutated after construction. `Display` joins the tokens with the
/// separator it was built with: `word1<sep>...<sep>wordN[<sep>checksum]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendlyId {
    words: Vec<String>,
    checksum: Option<String>,
    separator: String,
}

impl FriendlyId {
    /// The selected words, in selection order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The checksum token, if one was configured.
    pub fn checksum(&self) -> Option<&str> {
        self.checksum.as_deref()
    }

    /// The separator the phrase is joined with.
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl fmt::Display for FriendlyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in self.words.iter().map(String::as_str).chain(self.checksum.as_deref()) {
            if !first {
                f.write_str(&self.separator)?;
            }
            f.write_str(token)?;
            first = false;
        }
        Ok(())
    }
}

/// Encoder holding a word list and configuration.
///
/// The word list is read-only after construction, so an encoder can be
/// shared across threads and calls freely.
#[derive(Debug, Clone)]
pub struct FriendlyIdEncoder {
    wordlist: WordList,
    config: EncoderConfig,
}

impl FriendlyIdEncoder {
    /// Create an encoder, validating the configuration up front.
    pub fn new(wordlist: WordList, config: EncoderConfig) -> Result<Self, EncodeError> {
        config.validate()?;
        Ok(Self { wordlist, config })
    }

    /// The word list this encoder selects from.
    pub fn wordlist(&self) -> &WordList {
        &self.wordlist
    }

    /// The encoder's configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode a text input, normalizing it first.
    ///
    /// See [`normalize_input`] for the normalization rules. Input that
    /// normalizes to the empty string is rejected with
    /// [`EncodeError::EmptyInput`].
    pub fn encode(&self, input: &str, salt: &Salt) -> Result<FriendlyId, EncodeError> {
        let normalized = normalize_input(input);
        encode_with(&self.wordlist, &self.config, normalized.as_bytes(), salt)
    }

    /// Encode raw input bytes without normalization.
    pub fn encode_bytes(&self, input: &[u8], salt: &Salt) -> Result<FriendlyId, EncodeError> {
        encode_with(&self.wordlist, &self.config, input, salt)
    }
}

/// One-call convenience: encode `input` with `salt` against `wordlist`.
///
/// Pure function of its arguments; equivalent to building a
/// [`FriendlyIdEncoder`] and rendering the result.
pub fn friendly_id(
    input: &str,
    salt: &Salt,
    wordlist: &WordList,
    config: &EncoderConfig,
) -> Result<String, EncodeError> {
    config.validate()?;
    let normalized = normalize_input(input);
    let id = encode_with(wordlist, config, normalized.as_bytes(), salt)?;
    Ok(id.to_string())
}

/// Normalize a text input: trim, lowercase, collapse internal whitespace.
///
/// Makes `" Alice  Smith "` and `"alice smith"` encode identically.
pub fn normalize_input(input: &str) -> String {
    input
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn encode_with(
    wordlist: &WordList,
    config: &EncoderConfig,
    input: &[u8],
    salt: &Salt,
) -> Result<FriendlyId, EncodeError> {
    if input.is_empty() {
        return Err(EncodeError::EmptyInput);
    }
    if salt.is_empty() {
        return Err(EncodeError::InvalidSaltSize);
    }

    let digest = Digest::keyed(salt.as_bytes(), input);
    let indices = select_indices(&digest, config.n_words, wordlist.len())?;

    let mut words = Vec::with_capacity(indices.len());
    for index in indices {
        words.push(wordlist.word_at(index)?.to_string());
    }

    let checksum = match config.checksum_len {
        0 => None,
        len => Some(compute_checksum(&digest, len)),
    };

    debug!(
        n_words = words.len(),
        has_checksum = checksum.is_some(),
        "encoded friendly id"
    );

    Ok(FriendlyId {
        words,
        checksum,
        separator: config.separator.clone(),
    })
}

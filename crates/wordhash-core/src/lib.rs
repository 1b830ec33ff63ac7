//! # wordhash core
//!
//! Pure primitives for friendly-ID encoding: word lists, keyed digests,
//! word selection, and checksums.
//!
//! This crate contains no randomness and no I/O beyond one-time word-list
//! loading. It is pure computation: identical inputs always produce
//! identical outputs.
//!
//! ## Key Types
//!
//! - [`WordList`] - Validated, immutable list of distinct words
//! - [`Digest`] - 32-byte HMAC-SHA256 of (salt, input)
//! - [`EncoderConfig`] - Word count, checksum length, separator, salt size
//!
//! ## Pipeline
//!
//! [`Digest::keyed`] hashes the salted input, [`select_indices`] maps the
//! digest onto word-list indices, and [`compute_checksum`] derives the
//! optional base36 suffix. The `wordhash` facade crate assembles these
//! into the final phrase.
//!
//! Not a cryptographic primitive: the output space of a short word phrase
//! is small enough to brute-force. The salt only defeats precomputed
//! dictionaries of common inputs.

pub mod checksum;
pub mod config;
pub mod digest;
pub mod error;
pub mod selector;
pub mod wordlist;

pub use checksum::compute_checksum;
pub use config::{
    EncoderConfig, DEFAULT_CHECKSUM_LEN, DEFAULT_N_WORDS, DEFAULT_SALT_SIZE, DEFAULT_SEPARATOR,
};
pub use digest::{Digest, DIGEST_LEN};
pub use error::{EncodeError, WordListError};
pub use selector::{select_indices, BYTES_PER_INDEX};
pub use wordlist::{WordList, MIN_WORDS};

//! # wordhash
//!
//! Deterministic, salted, human-pronounceable identifiers.
//!
//! ## Overview
//!
//! wordhash converts an arbitrary input token into a short phrase of N
//! words drawn from a fixed word list, optionally followed by a checksum
//! suffix:
//!
//! ```text
//! alice@example.com  ->  foxtrot.echo.bravo.QV
//! ```
//!
//! The encoding is deterministic and salted: the same
//! (input, salt, word list, configuration) always yields the same phrase,
//! and different salts yield unrelated phrases, which defeats precomputed
//! dictionaries of common inputs.
//!
//! This is NOT a cryptographic primitive. A short word phrase is trivially
//! brute-forceable; the only guarantees are determinism and salt-dependent,
//! human-friendly obfuscation. The checksum exists to catch transcription
//! typos, nothing more.
//!
//! ## Usage
//!
//! ```rust
//! use wordhash::{EncoderConfig, FriendlyIdEncoder, Salt, WordList};
//!
//! let wordlist = WordList::from_words([
//!     "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
//! ])
//! .unwrap();
//!
//! // Generate a salt once and keep it: losing it makes IDs irreproducible.
//! let salt = Salt::generate(32).unwrap();
//! println!("salt: {}", salt.to_hex());
//!
//! let encoder = FriendlyIdEncoder::new(wordlist, EncoderConfig::default()).unwrap();
//! let id = encoder.encode("alice@example.com", &salt).unwrap();
//! println!("{}", id);
//! ```
//!
//! ## Re-exports
//!
//! The pure primitives live in `wordhash_core`, re-exported here as
//! [`core`].

pub mod encoder;
pub mod salt;

// Re-export the core crate
pub use wordhash_core as core;

// Re-export main types for convenience
pub use encoder::{friendly_id, normalize_input, FriendlyId, FriendlyIdEncoder};
pub use salt::Salt;
pub use wordhash_core::{Digest, EncodeError, EncoderConfig, WordList, WordListError};

/// Convenience alias for encode results.
pub type Result<T> = std::result::Result<T, EncodeError>;

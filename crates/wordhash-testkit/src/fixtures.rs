//! Test fixtures and helpers.
//!
//! Common setup code for integration and property tests.

use wordhash::{EncoderConfig, FriendlyId, FriendlyIdEncoder, Salt, WordList};

/// Eight NATO alphabet words, handy for exact-fixture tests.
pub const NATO_WORDS: &[&str] = &[
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
];

/// A test fixture with a word list, configuration, and salt.
pub struct TestFixture {
    pub encoder: FriendlyIdEncoder,
    pub salt: Salt,
}

impl TestFixture {
    /// Create a fixture with the NATO list, default config, and a zero salt.
    pub fn new() -> Self {
        Self::with_config(EncoderConfig::default())
    }

    /// Create a fixture with the NATO list and the given config.
    pub fn with_config(config: EncoderConfig) -> Self {
        let wordlist = WordList::from_words(NATO_WORDS).expect("NATO list is valid");
        Self {
            encoder: FriendlyIdEncoder::new(wordlist, config).expect("config is valid"),
            salt: Salt::from_bytes(vec![0u8; 32]),
        }
    }

    /// Replace the salt with `size` repeated `byte`s.
    pub fn with_salt_byte(mut self, byte: u8, size: usize) -> Self {
        self.salt = Salt::from_bytes(vec![byte; size]);
        self
    }

    /// Encode an input with the fixture's encoder and salt.
    pub fn encode(&self, input: &str) -> FriendlyId {
        self.encoder
            .encode(input, &self.salt)
            .expect("fixture inputs must encode")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

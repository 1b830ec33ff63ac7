//! Golden test vectors for deterministic verification.
//!
//! These vectors ensure that the encoding pipeline produces identical
//! phrases across all implementations. Expected values were derived from an
//! independent reference implementation of the same algorithm.

use serde::{Deserialize, Serialize};

use wordhash::{friendly_id, EncoderConfig, Salt, WordList};

const NATO: &[&str] = &[
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
];

const COLORS: &[&str] = &["red", "orange", "yellow", "green", "blue"];

/// A golden test vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: String,
    /// Input token to encode.
    pub input: String,
    /// Salt bytes, hex encoded.
    pub salt_hex: String,
    /// The word list, in order.
    pub wordlist: Vec<String>,
    /// Number of words to select.
    pub n_words: usize,
    /// Checksum length in characters.
    pub checksum_len: usize,
    /// Token separator.
    pub separator: String,
    /// Expected digest of the salted input, hex encoded.
    pub expected_digest: String,
    /// Expected final phrase.
    pub expected_phrase: String,
}

fn vector(
    name: &str,
    input: &str,
    salt_hex: &str,
    wordlist: &[&str],
    n_words: usize,
    checksum_len: usize,
    separator: &str,
    expected_digest: &str,
    expected_phrase: &str,
) -> GoldenVector {
    GoldenVector {
        name: name.to_string(),
        input: input.to_string(),
        salt_hex: salt_hex.to_string(),
        wordlist: wordlist.iter().map(|w| w.to_string()).collect(),
        n_words,
        checksum_len,
        separator: separator.to_string(),
        expected_digest: expected_digest.to_string(),
        expected_phrase: expected_phrase.to_string(),
    }
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    let zero_salt = "00".repeat(32);
    vec![
        vector(
            "three_words_no_checksum",
            "my super awesome input",
            &zero_salt,
            NATO,
            3,
            0,
            ".",
            "a36cef45c2fad14448d753f927982667e2e6196ff1fd6a398a91d73eb49a624b",
            "foxtrot.echo.bravo",
        ),
        vector(
            "three_words_with_checksum",
            "my super awesome input",
            &zero_salt,
            NATO,
            3,
            2,
            ".",
            "a36cef45c2fad14448d753f927982667e2e6196ff1fd6a398a91d73eb49a624b",
            "foxtrot.echo.bravo.QV",
        ),
        vector(
            "single_word",
            "my super awesome input",
            &zero_salt,
            NATO,
            1,
            0,
            ".",
            "a36cef45c2fad14448d753f927982667e2e6196ff1fd6a398a91d73eb49a624b",
            "foxtrot",
        ),
        vector(
            "eight_words_exact_digest",
            "my super awesome input",
            &zero_salt,
            NATO,
            8,
            2,
            ".",
            "a36cef45c2fad14448d753f927982667e2e6196ff1fd6a398a91d73eb49a624b",
            "foxtrot.echo.bravo.hotel.hotel.bravo.golf.delta.QV",
        ),
        vector(
            "short_salt_dash_separator",
            "bob",
            &"01".repeat(16),
            NATO,
            3,
            2,
            "-",
            "252da9f61a130de13d861e4734ed6a24459b6d892c7487b315e179b9f5e7a603",
            "golf-bravo-hotel-GR",
        ),
        vector(
            "five_word_list",
            "zebra",
            &"ff".repeat(32),
            COLORS,
            2,
            0,
            ".",
            "d65061cc867873e9821c197821fd32fe68095a55e925777c7b6d6a1db49bd7d4",
            "red.yellow",
        ),
        vector(
            "pool_extension_twelve_words",
            "carol@example.net",
            &"aa".repeat(32),
            COLORS,
            12,
            3,
            ".",
            "b765d4c72de5c7f1ad33d828cffbe07381888113b578275abd5494c3f8b9f0ba",
            "red.blue.red.yellow.green.red.orange.blue.green.orange.orange.green.TIU",
        ),
    ]
}

/// Encode the phrase described by a golden vector.
pub fn encode_vector(vector: &GoldenVector) -> String {
    let wordlist = WordList::from_words(&vector.wordlist).expect("vector word list is valid");
    let salt = Salt::from_hex(&vector.salt_hex).expect("vector salt is valid hex");
    let config = EncoderConfig::default()
        .with_n_words(vector.n_words)
        .with_checksum_len(vector.checksum_len)
        .with_separator(vector.separator.clone());

    friendly_id(&vector.input, &salt, &wordlist, &config).expect("vector must encode")
}

/// Verify all golden vectors against this implementation.
///
/// Returns `(name, matches, actual_phrase)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let phrase = encode_vector(v);
            let matches = phrase == v.expected_phrase;
            (v.name.clone(), matches, phrase)
        })
        .collect()
}

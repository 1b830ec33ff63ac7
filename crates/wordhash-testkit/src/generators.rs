//! Proptest generators for property-based testing.

use proptest::prelude::*;

use wordhash::{EncoderConfig, FriendlyId, FriendlyIdEncoder, Salt, WordList};
use wordhash_core::Digest;

/// Generate a random salt of 1..=64 bytes.
pub fn salt() -> impl Strategy<Value = Salt> {
    prop::collection::vec(any::<u8>(), 1..=64).prop_map(Salt::from_bytes)
}

/// Generate a random digest.
pub fn digest() -> impl Strategy<Value = Digest> {
    any::<[u8; 32]>().prop_map(Digest::from_bytes)
}

/// Generate a non-empty input token.
pub fn input() -> impl Strategy<Value = String> {
    "[a-z0-9@. -]{1,40}".prop_filter("must not normalize to empty", |s| {
        !s.trim().is_empty()
    })
}

/// Build a synthetic word list of `size` distinct words.
pub fn wordlist_of_size(size: usize) -> WordList {
    WordList::from_words((0..size).map(|i| format!("w{i:04}"))).expect("synthetic list is valid")
}

/// Generate a word-list size covering both small and large lists.
pub fn wordlist_size() -> impl Strategy<Value = usize> {
    prop_oneof![2usize..=10, 11usize..=100, 1000usize..=2000]
}

/// Generate a valid encoder configuration.
pub fn encoder_config() -> impl Strategy<Value = EncoderConfig> {
    (1usize..=16, 0usize..=5, prop_oneof![Just("."), Just("-"), Just("_")]).prop_map(
        |(n_words, checksum_len, sep)| {
            EncoderConfig::default()
                .with_n_words(n_words)
                .with_checksum_len(checksum_len)
                .with_separator(sep)
        },
    )
}

/// Parameters for a full encode call.
#[derive(Debug, Clone)]
pub struct EncodeParams {
    pub input: String,
    pub salt: Salt,
    pub wordlist_size: usize,
    pub config: EncoderConfig,
}

impl Arbitrary for EncodeParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (input(), salt(), wordlist_size(), encoder_config())
            .prop_map(|(input, salt, wordlist_size, config)| EncodeParams {
                input,
                salt,
                wordlist_size,
                config,
            })
            .boxed()
    }
}

/// Encode a phrase from generated parameters.
pub fn phrase_from_params(params: &EncodeParams) -> FriendlyId {
    let wordlist = wordlist_of_size(params.wordlist_size);
    let encoder =
        FriendlyIdEncoder::new(wordlist, params.config.clone()).expect("generated config is valid");
    encoder
        .encode(&params.input, &params.salt)
        .expect("generated params must encode")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordhash::friendly_id;

    proptest! {
        #[test]
        fn test_encode_deterministic(params: EncodeParams) {
            let a = phrase_from_params(&params);
            let b = phrase_from_params(&params);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn test_phrase_shape(params: EncodeParams) {
            let id = phrase_from_params(&params);
            prop_assert_eq!(id.words().len(), params.config.n_words);
            match params.config.checksum_len {
                0 => prop_assert!(id.checksum().is_none()),
                len => prop_assert_eq!(id.checksum().map(str::len), Some(len)),
            }
        }

        #[test]
        fn test_selected_words_come_from_list(params: EncodeParams) {
            let wordlist = wordlist_of_size(params.wordlist_size);
            let id = phrase_from_params(&params);
            for word in id.words() {
                prop_assert!(wordlist.words().contains(word));
            }
        }

        #[test]
        fn test_salt_sensitivity(
            input in input(),
            salt_a in any::<[u8; 32]>(),
            salt_b in any::<[u8; 32]>(),
        ) {
            prop_assume!(salt_a != salt_b);
            // A 2000-word list and 3 words give an 8e9 phrase space, so a
            // word-selection collision across salts is effectively never.
            let wordlist = wordlist_of_size(2000);
            let config = EncoderConfig::default().with_checksum_len(0);

            let a = friendly_id(&input, &Salt::from_bytes(salt_a.to_vec()), &wordlist, &config)
                .unwrap();
            let b = friendly_id(&input, &Salt::from_bytes(salt_b.to_vec()), &wordlist, &config)
                .unwrap();
            prop_assert_ne!(a, b);
        }

        #[test]
        fn test_checksum_catches_input_typos(
            input_a in input(),
            input_b in input(),
            salt_bytes in any::<[u8; 32]>(),
        ) {
            prop_assume!(
                wordhash::normalize_input(&input_a) != wordhash::normalize_input(&input_b)
            );
            // Four base36 digits: a random collision is ~1 in 1.7 million.
            let wordlist = wordlist_of_size(2000);
            let config = EncoderConfig::default().with_checksum_len(4);
            let salt = Salt::from_bytes(salt_bytes.to_vec());

            let encoder = FriendlyIdEncoder::new(wordlist, config).unwrap();
            let a = encoder.encode(&input_a, &salt).unwrap();
            let b = encoder.encode(&input_b, &salt).unwrap();
            prop_assert_ne!(a.checksum(), b.checksum());
        }
    }
}

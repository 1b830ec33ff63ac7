//! Word selection: mapping digest bytes onto word-list indices.
//!
//! The digest is consumed in consecutive 4-byte big-endian groups, each
//! reduced modulo the word-list size. Four bytes per group keeps modulo
//! bias negligible for list sizes in the low thousands. When more indices
//! are needed than the digest can supply, the pool is extended
//! deterministically by hashing `pool || counter`.

use sha2::{Digest as _, Sha256};

use crate::digest::Digest;
use crate::error::EncodeError;

/// Digest bytes consumed per selected index.
pub const BYTES_PER_INDEX: usize = 4;

/// Map a digest to exactly `n_words` indices, each in `[0, wordlist_size)`.
pub fn select_indices(
    digest: &Digest,
    n_words: usize,
    wordlist_size: usize,
) -> Result<Vec<usize>, EncodeError> {
    if n_words == 0 {
        return Err(EncodeError::InvalidWordCount);
    }

    let mut pool: Vec<u8> = digest.as_bytes().to_vec();
    if pool.len() < BYTES_PER_INDEX {
        // Unreachable with the 32-byte engine; defensive invariant check.
        return Err(EncodeError::InsufficientDigestLength {
            needed: n_words,
            available: pool.len(),
        });
    }

    let mut indices = Vec::with_capacity(n_words);
    let mut counter: u16 = 0;
    while indices.len() < n_words {
        for chunk in pool.chunks_exact(BYTES_PER_INDEX) {
            let group = u32::from_be_bytes(chunk.try_into().expect("chunk is 4 bytes"));
            indices.push(group as usize % wordlist_size);
            if indices.len() == n_words {
                break;
            }
        }
        if indices.len() < n_words {
            counter += 1;
            pool = extend_pool(&pool, counter);
        }
    }
    Ok(indices)
}

/// Deterministically extend the index pool: `SHA256(pool || counter_be)`.
fn extend_pool(pool: &[u8], counter: u16) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(pool);
    hasher.update(counter.to_be_bytes());
    hasher.finalize().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fixture_digest() -> Digest {
        // HMAC-SHA256(key = 32 zero bytes, msg = "my super awesome input")
        Digest::keyed(&[0u8; 32], b"my super awesome input")
    }

    #[test]
    fn test_known_indices() {
        let indices = select_indices(&fixture_digest(), 3, 8).unwrap();
        assert_eq!(indices, vec![5, 4, 1]);
    }

    #[test]
    fn test_extension_past_eight_groups() {
        // A 32-byte digest supplies 8 groups; the rest come from the
        // extended pool and must match the recorded fixture.
        let indices = select_indices(&fixture_digest(), 10, 8).unwrap();
        assert_eq!(indices, vec![5, 4, 1, 7, 7, 1, 6, 3, 3, 6]);
    }

    #[test]
    fn test_rejects_zero_words() {
        let result = select_indices(&fixture_digest(), 0, 8);
        assert!(matches!(result, Err(EncodeError::InvalidWordCount)));
    }

    #[test]
    fn test_single_word() {
        let indices = select_indices(&fixture_digest(), 1, 8).unwrap();
        assert_eq!(indices, vec![5]);
    }

    proptest! {
        #[test]
        fn test_indices_in_bounds(
            digest_bytes in any::<[u8; 32]>(),
            n_words in 1usize..=64,
            wordlist_size in 2usize..=10_000,
        ) {
            let digest = Digest::from_bytes(digest_bytes);
            let indices = select_indices(&digest, n_words, wordlist_size).unwrap();
            prop_assert_eq!(indices.len(), n_words);
            for index in indices {
                prop_assert!(index < wordlist_size);
            }
        }

        #[test]
        fn test_selection_deterministic(
            digest_bytes in any::<[u8; 32]>(),
            n_words in 1usize..=32,
            wordlist_size in 2usize..=5_000,
        ) {
            let digest = Digest::from_bytes(digest_bytes);
            let a = select_indices(&digest, n_words, wordlist_size).unwrap();
            let b = select_indices(&digest, n_words, wordlist_size).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}

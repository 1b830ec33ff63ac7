//! Salt generation and handling.
//!
//! A salt keys the digest so that common inputs do not map to guessable
//! phrases. The library never stores or logs salt material; a caller who
//! generates a salt must retain it to reproduce the same IDs later.

use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt;

use wordhash_core::EncodeError;

/// A secret salt, held as raw bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Salt(Vec<u8>);

impl Salt {
    /// Generate `size_bytes` of cryptographically strong random bytes.
    pub fn generate(size_bytes: usize) -> Result<Self, EncodeError> {
        if size_bytes == 0 {
            return Err(EncodeError::InvalidSaltSize);
        }
        let mut bytes = vec![0u8; size_bytes];
        OsRng.fill_bytes(&mut bytes);
        Ok(Self(bytes))
    }

    /// Wrap caller-supplied salt bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Parse a salt from its hex form.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        Ok(Self(hex::decode(s)?))
    }

    /// Hex form, for surfacing a generated salt to the user.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// The raw salt bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Salt length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the salt is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Debug must not leak salt material.
impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Salt({} bytes)", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_requested_size() {
        let salt = Salt::generate(32).unwrap();
        assert_eq!(salt.len(), 32);

        let salt = Salt::generate(16).unwrap();
        assert_eq!(salt.len(), 16);
    }

    #[test]
    fn test_generate_rejects_zero_size() {
        assert!(matches!(
            Salt::generate(0),
            Err(EncodeError::InvalidSaltSize)
        ));
    }

    #[test]
    fn test_generated_salts_differ() {
        let a = Salt::generate(32).unwrap();
        let b = Salt::generate(32).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_hex_roundtrip() {
        let salt = Salt::from_bytes(vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(salt.to_hex(), "deadbeef");
        let recovered = Salt::from_hex("deadbeef").unwrap();
        assert_eq!(salt, recovered);
    }

    #[test]
    fn test_debug_does_not_leak() {
        let salt = Salt::from_bytes(vec![0xde, 0xad, 0xbe, 0xef]);
        let debug = format!("{:?}", salt);
        assert_eq!(debug, "Salt(4 bytes)");
        assert!(!debug.contains("dead"));
    }
}

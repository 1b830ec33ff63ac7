//! The keyed digest engine: HMAC-SHA256 over (salt, input).
//!
//! Keying with the salt, rather than hashing `salt || input`, means every
//! output byte depends on the salt. A precomputed dictionary of common
//! inputs is useless without it.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Length of a [`Digest`] in bytes.
pub const DIGEST_LEN: usize = 32;

/// A 32-byte keyed digest of (salt, input).
///
/// Deterministic function of its inputs only: identical `(salt, input)`
/// always yields an identical digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest(pub [u8; DIGEST_LEN]);

impl Digest {
    /// Compute the HMAC-SHA256 digest of `input` keyed with `salt`.
    pub fn keyed(salt: &[u8], input: &[u8]) -> Self {
        let mut mac =
            HmacSha256::new_from_slice(salt).expect("HMAC-SHA256 accepts keys of any length");
        mac.update(input);
        let bytes: [u8; DIGEST_LEN] = mac.finalize().into_bytes().into();
        Self(bytes)
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

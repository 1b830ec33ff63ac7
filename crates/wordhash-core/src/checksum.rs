//! Checksum suffix derivation.
//!
//! The checksum is a short base36 token derived from a secondary hash of
//! the digest. It lets a human catch transcription errors in the word
//! phrase; it is an integrity aid, not a security control.

use sha2::{Digest as _, Sha256};

use crate::digest::Digest;

const BASE36_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Derive a `checksum_len`-character base36 checksum from the digest.
///
/// The secondary hash `SHA256(digest)` is read as a big-endian integer and
/// its `checksum_len` least-significant base36 digits are emitted,
/// most-significant first. `checksum_len == 0` yields an empty string.
pub fn compute_checksum(digest: &Digest, checksum_len: usize) -> String {
    if checksum_len == 0 {
        return String::new();
    }
    let secondary = Sha256::digest(digest.as_bytes());
    base36_suffix(secondary.as_slice(), checksum_len)
}

/// The `length` least-significant base36 digits of a big-endian integer.
fn base36_suffix(bytes: &[u8], length: usize) -> String {
    let mut num = bytes.to_vec();
    let mut out = vec![0u8; length];
    for slot in out.iter_mut().rev() {
        // Long division of the big-endian integer by 36.
        let mut rem: u32 = 0;
        for byte in num.iter_mut() {
            let acc = rem * 256 + u32::from(*byte);
            *byte = (acc / 36) as u8;
            rem = acc % 36;
        }
        *slot = BASE36_ALPHABET[rem as usize];
    }
    String::from_utf8(out).expect("alphabet is ASCII")
}

//! # wordhash testkit
//!
//! Testing utilities for wordhash.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with expected digests and phrases for
//!   cross-implementation verification
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helper structs for setting up test scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use wordhash_testkit::vectors::{all_vectors, encode_vector};
//!
//! for vector in all_vectors() {
//!     let phrase = encode_vector(&vector);
//!     assert_eq!(phrase, vector.expected_phrase);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use wordhash_testkit::generators::{phrase_from_params, EncodeParams};
//!
//! proptest! {
//!     #[test]
//!     fn phrase_is_deterministic(params: EncodeParams) {
//!         prop_assert_eq!(phrase_from_params(&params), phrase_from_params(&params));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use wordhash_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let id = fixture.encode("alice@example.com");
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{TestFixture, NATO_WORDS};
pub use generators::{phrase_from_params, EncodeParams};
pub use vectors::{all_vectors, encode_vector, verify_all_vectors, GoldenVector};

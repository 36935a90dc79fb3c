//! Multiplicative hashes and a from-scratch truncated-512 digest.
//!
//! # Modules
//!
//! - [`crypto`] - SHA-512/256 (FIPS 180-4).
//! - [`fast`] - Fowler–Noll–Vo multiplicative hashes (**NOT CRYPTO**).
//!
//! Every engine consumes a fully materialized byte sequence and produces a
//! fixed-length digest; canonicalization of typed values into bytes lives in
//! the `canonical` crate.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod crypto;
pub mod fast;

mod util;

pub use traits::{Digest, HashFunction};

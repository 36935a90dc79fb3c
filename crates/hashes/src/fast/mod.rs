//! Fast non-cryptographic hashes (**NOT CRYPTO**).
//!
//! These hashes are suitable for hash tables, sharding, and fingerprints in
//! non-adversarial settings. They are **not** suitable for signatures, MACs,
//! or untrusted inputs where collision attacks matter.

pub mod fnv;

pub use fnv::{Fnv, FnvAlgorithm, FnvOptions};

//! Cryptographic hash functions.

pub mod sha512_256;

pub use sha512_256::Sha512_256;

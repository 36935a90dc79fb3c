//! Core hashing traits and shared vocabulary for bytehash.
//!
//! This crate provides the foundational pieces every bytehash engine conforms
//! to. It is `no_std` compatible (with `alloc`) and carries only the two text
//! encoders used by [`HashValue`].
//!
//! # Contents
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`HashFunction`] | One-shot digest computation over a byte sequence |
//! | [`Digest`] | Block-buffered digest computation with an explicit reset |
//! | [`ByteOrder`] | Output/canonicalization endianness selector |
//! | [`HashValue`] | Immutable digest bytes with textual renderings |
//! | [`UnsupportedWidthError`] | Rejected engine configuration |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to
//! ensure all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod digest;
pub mod error;
mod function;
mod order;
mod value;

pub use digest::Digest;
pub use error::UnsupportedWidthError;
pub use function::HashFunction;
pub use order::ByteOrder;
pub use value::HashValue;

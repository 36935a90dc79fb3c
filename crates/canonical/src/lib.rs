//! Deterministic canonicalization of typed values into byte sequences.
//!
//! Every hash computation in bytehash starts here: a typed scalar value, or
//! an ordered sequence of them, is converted into *the* canonical byte
//! sequence for that value under a chosen byte order and text encoding. The
//! engines never see anything but bytes, so this layer is the single source
//! of truth for "what bytes represent this value".
//!
//! # Rules
//!
//! - Each scalar kind has exactly one layout at a given byte order.
//!   Multi-byte kinds honor [`CanonicalOptions::byte_order`]; single-byte
//!   kinds (byte, boolean, the absence marker) do not vary with it.
//! - Strings and characters encode through the configured
//!   [`TextEncoding`] (UTF-8 by default) and ignore the numeric byte order.
//! - A sequence canonicalizes to the concatenation of its elements' bytes in
//!   iteration order. Order is significant: `[1, 2, 3]` and `[3, 2, 1]`
//!   produce different byte sequences.
//! - Binary streams are drained from their current read position in one pass
//!   (requires the `std` feature).
//!
//! # Example
//!
//! ```
//! use canonical::{CanonicalOptions, Value, encode_value};
//! use traits::ByteOrder;
//!
//! let opts = CanonicalOptions::default(); // big-endian, UTF-8
//! let bytes = encode_value(&Value::from(0x0102_0304_u32), &opts)?;
//! assert_eq!(bytes, [0x01, 0x02, 0x03, 0x04]);
//!
//! let little = CanonicalOptions {
//!   byte_order: ByteOrder::LittleEndian,
//!   ..CanonicalOptions::default()
//! };
//! let bytes = encode_value(&Value::from(0x0102_0304_u32), &little)?;
//! assert_eq!(bytes, [0x04, 0x03, 0x02, 0x01]);
//! # Ok::<(), canonical::CanonicalError>(())
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod config;
mod encode;
mod error;
mod value;

pub use config::{CanonicalOptions, TextEncoding};
pub use encode::{encode_sequence, encode_str, encode_value};
#[cfg(feature = "std")]
pub use encode::encode_reader;
pub use error::CanonicalError;
pub use value::Value;

//! Byte-oriented hashing primitives.
//!
//! `bytehash` bundles three digest families behind one surface, plus the
//! canonicalization layer that turns typed values into the bytes they hash:
//!
//! | Family | Type | Output | Cryptographic |
//! |--------|------|--------|---------------|
//! | Fowler–Noll–Vo | [`Fnv`] | 32–1024 bits | No |
//! | Parametric CRC | [`Crc`] | 32/64 bits | No |
//! | SHA-512/256 | [`Sha512_256`] | 256 bits | Yes |
//!
//! Every computation is deterministic and reproducible across platforms:
//! inputs are materialized byte sequences, outputs are fixed-length
//! [`HashValue`]s assembled at an explicit, caller-selected byte order.
//!
//! # Quick Start
//!
//! ```
//! use bytehash::{Crc, Fnv, FnvOptions, HashFunction};
//!
//! let crc = Crc::crc32_ieee();
//! assert_eq!(crc.hash(b"123456789").to_hex(), "cbf43926");
//!
//! let fnv = Fnv::new(64, FnvOptions::default())?;
//! assert_eq!(fnv.hash(b"hello").to_hex(), "a430d84680aabd0b");
//! # Ok::<(), bytehash::UnsupportedWidthError>(())
//! ```
//!
//! # Hashing Typed Values
//!
//! The canonicalizer defines the single byte layout for each scalar kind;
//! engines never see anything but bytes.
//!
//! ```
//! use bytehash::canonical::{CanonicalOptions, Value, encode_sequence};
//! use bytehash::{Fnv, FnvOptions, HashFunction};
//!
//! let opts = CanonicalOptions::default();
//! let values = [Value::from(42_i32), Value::from("answer")];
//! let bytes = encode_sequence(values.iter(), &opts)?;
//!
//! let fnv = Fnv::new(32, FnvOptions::default())?;
//! let digest = fnv.hash(&bytes);
//! assert_eq!(digest.len(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

// =============================================================================
// Shared vocabulary
// =============================================================================

pub use traits::{ByteOrder, Digest, HashFunction, HashValue, UnsupportedWidthError};

// =============================================================================
// Canonicalization
// =============================================================================

pub use ::canonical::{CanonicalError, CanonicalOptions, TextEncoding, Value};

/// The full canonicalization surface.
pub mod canonical {
  pub use ::canonical::*;
}

// =============================================================================
// Engines
// =============================================================================

pub use checksum::{Crc, CrcParams};
pub use hashes::crypto::Sha512_256;
pub use hashes::fast::{Fnv, FnvAlgorithm, FnvOptions};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn canonicalize_then_hash_end_to_end() {
    let opts = CanonicalOptions::default();
    let forward = [Value::from(1_u8), Value::from(2_u8), Value::from(3_u8)];
    let reverse = [Value::from(3_u8), Value::from(2_u8), Value::from(1_u8)];

    let fnv = Fnv::new(64, FnvOptions::default()).unwrap();
    let a = fnv.hash(&canonical::encode_sequence(forward.iter(), &opts).unwrap());
    let b = fnv.hash(&canonical::encode_sequence(reverse.iter(), &opts).unwrap());
    assert_ne!(a, b);
  }

  #[test]
  fn all_engines_share_the_hash_function_contract() {
    let engines: [&dyn HashFunction; 3] = [
      &Crc::crc32_ieee(),
      &Fnv::new(128, FnvOptions::default()).unwrap(),
      &Sha512_256::default(),
    ];
    for engine in engines {
      let digest = engine.hash(b"contract");
      assert_eq!(digest.len(), engine.output_size());
    }
  }
}

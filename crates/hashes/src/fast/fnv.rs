#![allow(clippy::indexing_slicing)] // Word arrays have a fixed length invariant (bits / 32)

//! Fowler–Noll–Vo multiplicative hashes (**NOT CRYPTO**).
//!
//! One engine covers every supported width: 32 and 64 bits run on native
//! wrapping arithmetic, everything wider runs on the [`multiword`]
//! truncated-multiplication engine. Both historical mixing orders are
//! available; FNV-1a (XOR, then multiply) is the default.
//!
//! ```
//! use hashes::fast::{Fnv, FnvOptions};
//!
//! let fnv = Fnv::new(32, FnvOptions::default())?;
//! assert_eq!(fnv.hash(b"hello").to_hex(), "4f9f2cab");
//!
//! // Zero-length input returns the untouched offset basis.
//! assert_eq!(fnv.hash(b"").to_hex(), "811c9dc5");
//! # Ok::<(), traits::UnsupportedWidthError>(())
//! ```

use alloc::vec;
use alloc::vec::Vec;

use traits::{ByteOrder, HashFunction, HashValue, UnsupportedWidthError};

pub mod constants;
pub mod multiword;

use self::constants::standard_constants;
use self::multiword::{expand_words, mul_trunc, xor_byte};

/// Widths (in bits) the engine accepts.
pub const SUPPORTED_BITS: [u16; 6] = [32, 64, 128, 256, 512, 1024];

/// Mixing order applied to every input byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FnvAlgorithm {
  /// XOR the byte into the accumulator, then multiply by the prime.
  #[default]
  Fnv1a,
  /// Multiply the accumulator by the prime, then XOR the byte in.
  Fnv1,
}

/// Options fixed at engine construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FnvOptions {
  /// Mixing order; [`FnvAlgorithm::Fnv1a`] by default.
  pub algorithm: FnvAlgorithm,
  /// Byte order of the assembled digest; big-endian by default.
  pub byte_order: ByteOrder,
}

/// A Fowler–Noll–Vo engine for one width and parameterization.
///
/// The prime and offset basis are expanded to little-endian 32-bit words
/// once, at construction. The engine itself is immutable afterwards and safe
/// to share; each computation runs on its own accumulator.
#[derive(Clone, Debug)]
pub struct Fnv {
  bits: u16,
  options: FnvOptions,
  prime: Vec<u32>,
  offset_basis: Vec<u32>,
}

impl Fnv {
  /// Build an engine for `bits` using the standard FNV constants.
  ///
  /// # Errors
  ///
  /// Rejects any width outside [`SUPPORTED_BITS`] before any input is
  /// processed.
  pub fn new(bits: u16, options: FnvOptions) -> Result<Self, UnsupportedWidthError> {
    let (prime, offset_basis) = standard_constants(bits).ok_or(UnsupportedWidthError::new(bits))?;
    Ok(Self::from_parts(bits, prime, offset_basis, options))
  }

  /// Build an engine with caller-supplied constants.
  ///
  /// `prime_be` and `offset_basis_be` are arbitrary-precision unsigned
  /// integers in big-endian byte form; values shorter than `bits` are
  /// zero-extended, longer values are truncated modulo 2^bits.
  ///
  /// # Errors
  ///
  /// Rejects any width outside [`SUPPORTED_BITS`].
  pub fn with_constants(
    bits: u16,
    prime_be: &[u8],
    offset_basis_be: &[u8],
    options: FnvOptions,
  ) -> Result<Self, UnsupportedWidthError> {
    if !SUPPORTED_BITS.contains(&bits) {
      return Err(UnsupportedWidthError::new(bits));
    }
    Ok(Self::from_parts(bits, prime_be, offset_basis_be, options))
  }

  fn from_parts(bits: u16, prime_be: &[u8], offset_basis_be: &[u8], options: FnvOptions) -> Self {
    let words = usize::from(bits / 32);
    Self {
      bits,
      options,
      prime: expand_words(prime_be, words),
      offset_basis: expand_words(offset_basis_be, words),
    }
  }

  /// The configured width in bits.
  #[must_use]
  pub const fn bits(&self) -> u16 {
    self.bits
  }

  /// The configured options.
  #[must_use]
  pub const fn options(&self) -> FnvOptions {
    self.options
  }

  /// The prime, as little-endian 32-bit words.
  #[must_use]
  pub fn prime(&self) -> &[u32] {
    &self.prime
  }

  /// The offset basis, as little-endian 32-bit words.
  #[must_use]
  pub fn offset_basis(&self) -> &[u32] {
    &self.offset_basis
  }

  /// Compute the digest of `input`: exactly `bits / 8` bytes at the
  /// configured byte order.
  ///
  /// Zero-length input yields the untouched offset basis.
  #[must_use]
  pub fn hash(&self, input: &[u8]) -> HashValue {
    let le_bytes = match self.bits {
      32 => self.hash32(input).to_le_bytes().to_vec(),
      64 => self.hash64(input).to_le_bytes().to_vec(),
      _ => {
        let words = self.hash_wide(input);
        let mut bytes = Vec::with_capacity(words.len() * 4);
        for w in &words {
          bytes.extend_from_slice(&w.to_le_bytes());
        }
        bytes
      }
    };
    HashValue::new(self.assemble(le_bytes))
  }

  fn hash32(&self, input: &[u8]) -> u32 {
    let prime = self.prime[0];
    let mut acc = self.offset_basis[0];
    match self.options.algorithm {
      FnvAlgorithm::Fnv1a => {
        for &byte in input {
          acc ^= u32::from(byte);
          acc = acc.wrapping_mul(prime);
        }
      }
      FnvAlgorithm::Fnv1 => {
        for &byte in input {
          acc = acc.wrapping_mul(prime);
          acc ^= u32::from(byte);
        }
      }
    }
    acc
  }

  fn hash64(&self, input: &[u8]) -> u64 {
    let prime = u64::from(self.prime[0]) | u64::from(self.prime[1]) << 32;
    let mut acc = u64::from(self.offset_basis[0]) | u64::from(self.offset_basis[1]) << 32;
    match self.options.algorithm {
      FnvAlgorithm::Fnv1a => {
        for &byte in input {
          acc ^= u64::from(byte);
          acc = acc.wrapping_mul(prime);
        }
      }
      FnvAlgorithm::Fnv1 => {
        for &byte in input {
          acc = acc.wrapping_mul(prime);
          acc ^= u64::from(byte);
        }
      }
    }
    acc
  }

  fn hash_wide(&self, input: &[u8]) -> Vec<u32> {
    let mut acc = self.offset_basis.clone();
    let mut scratch = vec![0_u32; acc.len()];
    match self.options.algorithm {
      FnvAlgorithm::Fnv1a => {
        for &byte in input {
          xor_byte(&mut acc, byte);
          mul_trunc(&mut acc, &self.prime, &mut scratch);
        }
      }
      FnvAlgorithm::Fnv1 => {
        for &byte in input {
          mul_trunc(&mut acc, &self.prime, &mut scratch);
          xor_byte(&mut acc, byte);
        }
      }
    }
    acc
  }

  /// Orient the little-endian accumulator bytes to the configured byte
  /// order. Big-endian output is a pure reversal.
  fn assemble(&self, mut le_bytes: Vec<u8>) -> Vec<u8> {
    if self.options.byte_order == ByteOrder::BigEndian {
      le_bytes.reverse();
    }
    le_bytes
  }
}

impl HashFunction for Fnv {
  fn output_size(&self) -> usize {
    usize::from(self.bits / 8)
  }

  fn byte_order(&self) -> ByteOrder {
    self.options.byte_order
  }

  fn hash(&self, input: &[u8]) -> HashValue {
    Fnv::hash(self, input)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejects_unsupported_widths() {
    for bits in [0, 8, 16, 48, 96, 160, 2048] {
      let err = Fnv::new(bits, FnvOptions::default()).unwrap_err();
      assert_eq!(err.bits(), bits);
    }
  }

  #[test]
  fn accepts_all_supported_widths() {
    for bits in SUPPORTED_BITS {
      let fnv = Fnv::new(bits, FnvOptions::default()).unwrap();
      assert_eq!(fnv.bits(), bits);
      assert_eq!(fnv.prime().len(), usize::from(bits / 32));
      assert_eq!(fnv.hash(b"x").len(), usize::from(bits / 8));
    }
  }

  #[test]
  fn known_answers_32() {
    let fnv1a = Fnv::new(32, FnvOptions::default()).unwrap();
    assert_eq!(fnv1a.hash(b"hello").to_hex(), "4f9f2cab");
    assert_eq!(fnv1a.hash(b"foobar").to_hex(), "bf9cf968");

    let fnv1 = Fnv::new(
      32,
      FnvOptions {
        algorithm: FnvAlgorithm::Fnv1,
        ..FnvOptions::default()
      },
    )
    .unwrap();
    assert_eq!(fnv1.hash(b"hello").to_hex(), "b6fa7167");
  }

  #[test]
  fn known_answers_64() {
    let fnv1a = Fnv::new(64, FnvOptions::default()).unwrap();
    assert_eq!(fnv1a.hash(b"hello").to_hex(), "a430d84680aabd0b");
    assert_eq!(fnv1a.hash(b"foobar").to_hex(), "85944171f73967e8");

    let fnv1 = Fnv::new(
      64,
      FnvOptions {
        algorithm: FnvAlgorithm::Fnv1,
        ..FnvOptions::default()
      },
    )
    .unwrap();
    assert_eq!(fnv1.hash(b"hello").to_hex(), "7b495389bdbdd4c7");
  }

  #[test]
  fn custom_constants_follow_the_same_width_rule() {
    assert!(Fnv::with_constants(40, &[3], &[5], FnvOptions::default()).is_err());

    // A toy parameterization: prime 3, offset basis 5, width 32.
    let fnv = Fnv::with_constants(32, &[3], &[5], FnvOptions::default()).unwrap();
    // FNV-1a over one byte 0x01: (5 ^ 1) * 3 = 12.
    assert_eq!(fnv.hash(&[0x01]).as_slice(), [0, 0, 0, 12]);
  }

  #[test]
  fn big_endian_output_is_reversal_of_little_endian() {
    for bits in SUPPORTED_BITS {
      let big = Fnv::new(bits, FnvOptions::default()).unwrap();
      let little = Fnv::new(
        bits,
        FnvOptions {
          byte_order: ByteOrder::LittleEndian,
          ..FnvOptions::default()
        },
      )
      .unwrap();

      let mut reversed = big.hash(b"hello world").to_vec();
      reversed.reverse();
      assert_eq!(reversed, little.hash(b"hello world").to_vec(), "width {bits}");
    }
  }
}

#![allow(clippy::indexing_slicing)] // 256-entry table walk over fixed-size arrays

//! The table-driven CRC engine.

use alloc::vec::Vec;

use traits::{ByteOrder, HashFunction, HashValue};

use crate::params::{CrcParams, reflect_bits};

/// A CRC engine for one fixed parameter set.
///
/// The 256-entry lookup table is derived from the polynomial once, at
/// construction, by simulating bit-serial polynomial division for every
/// possible input byte. After that the engine is immutable: computations
/// only read the table, so a single engine is safe to share across threads.
///
/// # Example
///
/// ```
/// use checksum::{Crc, CrcParams};
///
/// let crc = Crc::new(CrcParams::CRC64_ECMA);
/// assert_eq!(crc.checksum(b"123456789"), 0x6C40_DF5F_0B49_7347);
/// ```
#[derive(Clone)]
pub struct Crc {
  params: CrcParams,
  byte_order: ByteOrder,
  table: [u64; 256],
}

impl Crc {
  /// Build an engine for `params` with big-endian digest assembly.
  #[must_use]
  pub fn new(params: CrcParams) -> Self {
    Self::with_byte_order(params, ByteOrder::BigEndian)
  }

  /// Build an engine for `params`, assembling digests at `byte_order`.
  #[must_use]
  pub fn with_byte_order(params: CrcParams, byte_order: ByteOrder) -> Self {
    Self {
      params,
      byte_order,
      table: build_table(&params),
    }
  }

  /// The CRC-32/IEEE 802.3 engine.
  #[must_use]
  pub fn crc32_ieee() -> Self {
    Self::new(CrcParams::CRC32_IEEE)
  }

  /// The CRC-64/ECMA-182 engine.
  #[must_use]
  pub fn crc64_ecma() -> Self {
    Self::new(CrcParams::CRC64_ECMA)
  }

  /// The parameters this engine was built with.
  #[must_use]
  pub const fn params(&self) -> CrcParams {
    self.params
  }

  /// The precomputed lookup table, one partial remainder per byte value.
  ///
  /// Exposed for verification; the contents never change after
  /// construction.
  #[must_use]
  pub const fn lookup_table(&self) -> &[u64; 256] {
    &self.table
  }

  /// Compute the checksum of `input` as a raw register value.
  ///
  /// Applies the configured initial value, reflection flags, and final XOR;
  /// the result occupies the low `width` bits.
  #[must_use]
  pub fn checksum(&self, input: &[u8]) -> u64 {
    let p = &self.params;
    let mask = p.mask();
    let shift = u32::from(p.width) - 8;

    let mut reg = p.initial & mask;
    for &byte in input {
      let byte = if p.reflect_in { byte.reverse_bits() } else { byte };
      let idx = ((reg >> shift) ^ u64::from(byte)) & 0xFF;
      reg = ((reg << 8) ^ self.table[idx as usize]) & mask;
    }
    if p.reflect_out {
      reg = reflect_bits(reg, p.width);
    }
    (reg ^ p.xor_out) & mask
  }

  /// Compute the checksum of `input` as a digest value of `width / 8`
  /// bytes at the configured byte order.
  #[must_use]
  pub fn hash(&self, input: &[u8]) -> HashValue {
    let reg = self.checksum(input);
    let n = usize::from(self.params.width / 8);
    let bytes: Vec<u8> = match self.byte_order {
      ByteOrder::BigEndian => reg.to_be_bytes()[8 - n..].to_vec(),
      ByteOrder::LittleEndian => reg.to_le_bytes()[..n].to_vec(),
    };
    HashValue::new(bytes)
  }
}

impl HashFunction for Crc {
  fn output_size(&self) -> usize {
    usize::from(self.params.width / 8)
  }

  fn byte_order(&self) -> ByteOrder {
    self.byte_order
  }

  fn hash(&self, input: &[u8]) -> HashValue {
    Crc::hash(self, input)
  }
}

/// Derive the 256-entry table by bit-serial long division.
///
/// Entry `i` is the remainder after dividing `i`, placed in the register's
/// most-significant byte, by the generator polynomial.
fn build_table(params: &CrcParams) -> [u64; 256] {
  let mask = params.mask();
  let top = 1_u64 << (params.width - 1);
  let shift = u32::from(params.width) - 8;

  let mut table = [0_u64; 256];
  for (i, entry) in table.iter_mut().enumerate() {
    let mut reg = (i as u64) << shift;
    for _ in 0..8 {
      if reg & top != 0 {
        reg = ((reg << 1) ^ params.polynomial) & mask;
      } else {
        reg = (reg << 1) & mask;
      }
    }
    *entry = reg;
  }
  table
}

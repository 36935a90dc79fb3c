#![allow(clippy::indexing_slicing)] // Fixed-size state, block, and schedule arrays

//! SHA-512/256 (FIPS 180-4): the 512-bit compression function truncated to a
//! 256-bit digest, with its own initial hash value.
//!
//! ```
//! use hashes::crypto::Sha512_256;
//! use traits::Digest;
//!
//! let digest = Sha512_256::digest(b"abc");
//! assert_eq!(
//!   hex::encode(digest),
//!   "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23"
//! );
//! ```

use traits::{ByteOrder, Digest, HashFunction, HashValue};

use crate::util::rotr64;

const BLOCK_LEN: usize = 128;
const BLOCK_BITS: u64 = (BLOCK_LEN as u64) * 8;
const SCHEDULE_LEN: usize = 80;

// SHA-512/256 initial hash value (FIPS 180-4 §5.3.6.2), distinct from the
// untruncated SHA-512 IV.
const IV: [u64; 8] = [
  0x2231_2194_fc2b_f72c,
  0x9f55_5fa3_c84c_64c2,
  0x2393_b86b_6f53_b151,
  0x9638_7719_5940_eabd,
  0x9628_3ee2_a88e_ffe3,
  0xbe5e_1e25_5386_3992,
  0x2b01_99fc_2c85_b8aa,
  0x0eb7_2ddc_81c5_2ca2,
];

// SHA-384/512 family round constants (FIPS 180-4 §4.2.3).
const K: [u64; 80] = [
  0x428a_2f98_d728_ae22, 0x7137_4491_23ef_65cd, 0xb5c0_fbcf_ec4d_3b2f, 0xe9b5_dba5_8189_dbbc,
  0x3956_c25b_f348_b538, 0x59f1_11f1_b605_d019, 0x923f_82a4_af19_4f9b, 0xab1c_5ed5_da6d_8118,
  0xd807_aa98_a303_0242, 0x1283_5b01_4570_6fbe, 0x2431_85be_4ee4_b28c, 0x550c_7dc3_d5ff_b4e2,
  0x72be_5d74_f27b_896f, 0x80de_b1fe_3b16_96b1, 0x9bdc_06a7_25c7_1235, 0xc19b_f174_cf69_2694,
  0xe49b_69c1_9ef1_4ad2, 0xefbe_4786_384f_25e3, 0x0fc1_9dc6_8b8c_d5b5, 0x240c_a1cc_77ac_9c65,
  0x2de9_2c6f_592b_0275, 0x4a74_84aa_6ea6_e483, 0x5cb0_a9dc_bd41_fbd4, 0x76f9_88da_8311_53b5,
  0x983e_5152_ee66_dfab, 0xa831_c66d_2db4_3210, 0xb003_27c8_98fb_213f, 0xbf59_7fc7_beef_0ee4,
  0xc6e0_0bf3_3da8_8fc2, 0xd5a7_9147_930a_a725, 0x06ca_6351_e003_826f, 0x1429_2967_0a0e_6e70,
  0x27b7_0a85_46d2_2ffc, 0x2e1b_2138_5c26_c926, 0x4d2c_6dfc_5ac4_2aed, 0x5338_0d13_9d95_b3df,
  0x650a_7354_8baf_63de, 0x766a_0abb_3c77_b2a8, 0x81c2_c92e_47ed_aee6, 0x9272_2c85_1482_353b,
  0xa2bf_e8a1_4cf1_0364, 0xa81a_664b_bc42_3001, 0xc24b_8b70_d0f8_9791, 0xc76c_51a3_0654_be30,
  0xd192_e819_d6ef_5218, 0xd699_0624_5565_a910, 0xf40e_3585_5771_202a, 0x106a_a070_32bb_d1b8,
  0x19a4_c116_b8d2_d0c8, 0x1e37_6c08_5141_ab53, 0x2748_774c_df8e_eb99, 0x34b0_bcb5_e19b_48a8,
  0x391c_0cb3_c5c9_5a63, 0x4ed8_aa4a_e341_8acb, 0x5b9c_ca4f_7763_e373, 0x682e_6ff3_d6b2_b8a3,
  0x748f_82ee_5def_b2fc, 0x78a5_636f_4317_2f60, 0x84c8_7814_a1f0_ab72, 0x8cc7_0208_1a64_39ec,
  0x90be_fffa_2363_1e28, 0xa450_6ceb_de82_bde9, 0xbef9_a3f7_b2c6_7915, 0xc671_78f2_e372_532b,
  0xca27_3ece_ea26_619c, 0xd186_b8c7_21c0_c207, 0xeada_7dd6_cde0_eb1e, 0xf57d_4f7f_ee6e_d178,
  0x06f0_67aa_7217_6fba, 0x0a63_7dc5_a2c8_98a6, 0x113f_9804_bef9_0dae, 0x1b71_0b35_131c_471b,
  0x28db_77f5_2304_7d84, 0x32ca_ab7b_40c7_2493, 0x3c9e_be0a_15c9_bebc, 0x431d_67c4_9c10_0d4c,
  0x4cc5_d4be_cb3e_42b6, 0x597f_299c_fc65_7e2a, 0x5fcb_6fab_3ad6_faec, 0x6c44_198c_4a47_5817,
];

#[inline(always)]
fn ch(x: u64, y: u64, z: u64) -> u64 {
  (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u64, y: u64, z: u64) -> u64 {
  (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u64) -> u64 {
  rotr64(x, 28) ^ rotr64(x, 34) ^ rotr64(x, 39)
}

#[inline(always)]
fn big_sigma1(x: u64) -> u64 {
  rotr64(x, 14) ^ rotr64(x, 18) ^ rotr64(x, 41)
}

#[inline(always)]
fn small_sigma0(x: u64) -> u64 {
  rotr64(x, 1) ^ rotr64(x, 8) ^ (x >> 7)
}

#[inline(always)]
fn small_sigma1(x: u64) -> u64 {
  rotr64(x, 19) ^ rotr64(x, 61) ^ (x >> 6)
}

/// The SHA-512/256 engine.
///
/// Holds eight 64-bit state words, a one-block buffer, and a 128-bit
/// message bit counter kept as two 64-bit halves. One instance serves one
/// in-flight computation; [`reset`](Digest::reset) returns it to the
/// freshly-initialized state, and [`finalize`](Digest::finalize) consumes
/// it.
#[derive(Clone)]
pub struct Sha512_256 {
  state: [u64; 8],
  block: [u8; BLOCK_LEN],
  filled: usize,
  bit_len_low: u64,
  bit_len_high: u64,
}

impl Default for Sha512_256 {
  #[inline]
  fn default() -> Self {
    Self {
      state: IV,
      block: [0_u8; BLOCK_LEN],
      filled: 0,
      bit_len_low: 0,
      bit_len_high: 0,
    }
  }
}

impl Sha512_256 {
  /// Rounds per compressed block.
  pub const ROUNDS: usize = SCHEDULE_LEN;

  /// Add `bits` to the 128-bit message length, carrying into the high word
  /// when the low word wraps. The addend never exceeds one block, so a wrap
  /// carries exactly 1.
  #[inline]
  fn count_bits(low: &mut u64, high: &mut u64, bits: u64) {
    let (sum, wrapped) = low.overflowing_add(bits);
    *low = sum;
    if wrapped {
      *high = high.wrapping_add(1);
    }
  }

  fn compress(state: &mut [u64; 8], block: &[u8; BLOCK_LEN]) {
    let mut w = [0_u64; SCHEDULE_LEN];
    let (words, _) = block.as_chunks::<8>();
    for (slot, chunk) in w.iter_mut().zip(words) {
      *slot = u64::from_be_bytes(*chunk);
    }
    for t in 16..SCHEDULE_LEN {
      w[t] = small_sigma1(w[t - 2])
        .wrapping_add(w[t - 7])
        .wrapping_add(small_sigma0(w[t - 15]))
        .wrapping_add(w[t - 16]);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for t in 0..SCHEDULE_LEN {
      let t1 = h
        .wrapping_add(big_sigma1(e))
        .wrapping_add(ch(e, f, g))
        .wrapping_add(K[t])
        .wrapping_add(w[t]);
      let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

      h = g;
      g = f;
      f = e;
      e = d.wrapping_add(t1);
      d = c;
      c = b;
      b = a;
      a = t1.wrapping_add(t2);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
  }
}

impl Digest for Sha512_256 {
  const OUTPUT_SIZE: usize = 32;
  type Output = [u8; 32];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    if self.filled != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.filled, data.len());
      self.block[self.filled..self.filled + take].copy_from_slice(&data[..take]);
      self.filled += take;
      data = &data[take..];

      if self.filled == BLOCK_LEN {
        Self::compress(&mut self.state, &self.block);
        Self::count_bits(&mut self.bit_len_low, &mut self.bit_len_high, BLOCK_BITS);
        self.filled = 0;
      }
    }

    let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
    for block in blocks {
      Self::compress(&mut self.state, block);
      Self::count_bits(&mut self.bit_len_low, &mut self.bit_len_high, BLOCK_BITS);
    }

    if !rest.is_empty() {
      self.block[..rest.len()].copy_from_slice(rest);
      self.filled = rest.len();
    }
  }

  fn finalize(self) -> Self::Output {
    let mut state = self.state;
    let mut block = self.block;
    let mut filled = self.filled;

    // Total message length in bits: compressed blocks plus the buffered tail.
    let mut low = self.bit_len_low;
    let mut high = self.bit_len_high;
    Self::count_bits(&mut low, &mut high, (filled as u64) * 8);

    block[filled] = 0x80;
    filled += 1;

    if filled > 112 {
      block[filled..].fill(0);
      Self::compress(&mut state, &block);
      block = [0_u8; BLOCK_LEN];
      filled = 0;
    }

    block[filled..112].fill(0);
    // 128-bit length trailer: high word then low word, each big-endian.
    block[112..120].copy_from_slice(&high.to_be_bytes());
    block[120..128].copy_from_slice(&low.to_be_bytes());
    Self::compress(&mut state, &block);

    let mut out = [0_u8; 32];
    for (i, word) in state.iter().take(4).enumerate() {
      out[i * 8..i * 8 + 8].copy_from_slice(&word.to_be_bytes());
    }
    out
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}

impl HashFunction for Sha512_256 {
  fn output_size(&self) -> usize {
    Self::OUTPUT_SIZE
  }

  /// Digest words are serialized big-endian per FIPS 180-4; the order is
  /// not configurable.
  fn byte_order(&self) -> ByteOrder {
    ByteOrder::BigEndian
  }

  /// Runs an independent one-shot computation; any state buffered on `self`
  /// is left untouched.
  fn hash(&self, input: &[u8]) -> HashValue {
    HashValue::new(Self::digest(input).to_vec())
  }
}

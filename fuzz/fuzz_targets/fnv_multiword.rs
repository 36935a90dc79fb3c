//! Fuzz target for the multi-word truncated multiplication.
//!
//! Tests that the schoolbook word-level product matches an independent
//! base-256 big-number multiplication truncated to the same width.

#![no_main]

use arbitrary::Arbitrary;
use hashes::fast::fnv::multiword::mul_trunc;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  words_exp: u8,
  a: Vec<u32>,
  b: Vec<u32>,
}

fn reference_mul(a: &[u32], b: &[u32]) -> Vec<u32> {
  let a_bytes: Vec<u8> = a.iter().flat_map(|w| w.to_le_bytes()).collect();
  let b_bytes: Vec<u8> = b.iter().flat_map(|w| w.to_le_bytes()).collect();

  let mut prod = vec![0_u32; a_bytes.len() + b_bytes.len() + 1];
  for (i, &x) in a_bytes.iter().enumerate() {
    let mut carry = 0_u32;
    for (j, &y) in b_bytes.iter().enumerate() {
      let t = prod[i + j] + u32::from(x) * u32::from(y) + carry;
      prod[i + j] = t & 0xFF;
      carry = t >> 8;
    }
    let mut k = i + b_bytes.len();
    while carry > 0 {
      let t = prod[k] + carry;
      prod[k] = t & 0xFF;
      carry = t >> 8;
      k += 1;
    }
  }

  (0..a.len())
    .map(|w| u32::from_le_bytes([prod[w * 4] as u8, prod[w * 4 + 1] as u8, prod[w * 4 + 2] as u8, prod[w * 4 + 3] as u8]))
    .collect()
}

fuzz_target!(|input: Input| {
  // 2..=32 words, i.e. 64..=1024 bits.
  let words = 2usize << (input.words_exp % 5);
  let take = |src: &[u32]| -> Vec<u32> {
    let mut v = src.to_vec();
    v.resize(words, 0);
    v
  };

  let a = take(&input.a);
  let b = take(&input.b);

  let mut acc = a.clone();
  let mut scratch = vec![0_u32; words];
  mul_trunc(&mut acc, &b, &mut scratch);

  assert_eq!(acc, reference_mul(&a, &b), "truncated product mismatch at {words} words");
});

//! Fuzz target for SHA-512/256 buffering.
//!
//! Tests that:
//! - No panics on arbitrary input
//! - Split updates produce the same digest as one-shot
//! - Reset after partial input restores fresh behavior

#![no_main]

use arbitrary::Arbitrary;
use hashes::crypto::Sha512_256;
use libfuzzer_sys::fuzz_target;
use traits::Digest;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  split_point: usize,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let split = input.split_point % (data.len() + 1);

  let oneshot = Sha512_256::digest(data);
  assert_eq!(oneshot.len(), 32);

  let (a, b) = data.split_at(split);
  let mut hasher = Sha512_256::new();
  hasher.update(a);
  hasher.update(b);
  assert_eq!(hasher.finalize(), oneshot, "split mismatch");

  let mut resetter = Sha512_256::new();
  resetter.update(b);
  resetter.reset();
  resetter.update(data);
  assert_eq!(resetter.finalize(), oneshot, "reset mismatch");
});

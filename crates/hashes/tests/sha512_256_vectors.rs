//! SHA-512/256 vectors and streaming invariants.
//!
//! Digest values follow FIPS 180-4 and were cross-checked against an
//! independent implementation.

use hashes::crypto::Sha512_256;
use traits::Digest;

const VECTORS: [(&[u8], &str); 4] = [
  (b"", "c672b8d1ef56ed28ab87c3622c5114069bdd3ad7b8f9737498d0c01ecef0967a"),
  (b"abc", "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23"),
  (b"hello", "e30d87cfa2a75db545eac4d61baf970366a8357c7f72fa95b52d0accb698f13a"),
  (
    b"123456789",
    "1877345237853a31ad79e14c1fcb0ddcd3df9973b61af7f906e4b4d052cc9416",
  ),
];

#[test]
fn known_vectors() {
  for (input, expected) in VECTORS {
    assert_eq!(hex::encode(Sha512_256::digest(input)), expected, "input {input:?}");
  }
}

#[test]
fn output_is_always_32_bytes() {
  assert_eq!(Sha512_256::digest(b"").len(), 32);
  assert_eq!(Sha512_256::digest(&[0xAA; 1000]).len(), 32);
}

#[test]
fn fresh_instances_are_deterministic() {
  let input = b"the same bytes twice";
  assert_eq!(Sha512_256::digest(input), Sha512_256::digest(input));
}

#[test]
fn split_updates_match_one_shot() {
  let data: Vec<u8> = (0..512_u32).map(|i| (i * 31 + 7) as u8).collect();
  let oneshot = Sha512_256::digest(&data);

  for split in [0, 1, 63, 64, 111, 112, 127, 128, 129, 256, 511, 512] {
    let (a, b) = data.split_at(split);
    let mut hasher = Sha512_256::new();
    hasher.update(a);
    hasher.update(b);
    assert_eq!(hasher.finalize(), oneshot, "split at {split}");
  }
}

#[test]
fn byte_at_a_time_matches_one_shot() {
  let data = b"incremental bytes, one at a time";
  let mut hasher = Sha512_256::new();
  for &b in data {
    hasher.update(&[b]);
  }
  assert_eq!(hasher.finalize(), Sha512_256::digest(data));
}

#[test]
fn padding_boundaries() {
  // Lengths straddling the 112-byte padding threshold and the block size.
  for len in [110, 111, 112, 113, 119, 120, 127, 128, 129, 255, 256] {
    let data = vec![0x61_u8; len];
    let mut hasher = Sha512_256::new();
    hasher.update(&data);
    assert_eq!(hasher.finalize(), Sha512_256::digest(&data), "len {len}");
  }
}

#[test]
fn exactly_two_blocks_of_a() {
  // 128 bytes of 'a', verified externally.
  let data = vec![b'a'; 128];
  assert_eq!(
    hex::encode(Sha512_256::digest(&data)),
    "b88f97e274f9c1d49f181c8cbd01a9c74930ad055a46ac4499a1d601f1c80bf2"
  );
}

#[test]
fn reset_discards_buffered_input() {
  let mut hasher = Sha512_256::new();
  hasher.update(b"garbage that must vanish");
  hasher.reset();
  hasher.update(b"abc");
  assert_eq!(hasher.finalize(), Sha512_256::digest(b"abc"));
}

#[test]
fn clone_snapshots_accumulating_state() {
  let mut hasher = Sha512_256::new();
  hasher.update(b"shared prefix ");

  let snapshot = hasher.clone();
  hasher.update(b"left");

  let mut other = snapshot;
  other.update(b"left");
  assert_eq!(hasher.finalize(), other.finalize());
}

//! Standard FNV primes and offset bases.
//!
//! Values follow the published FNV reference parameters: the prime for an
//! n-bit hash is `2^t + 2^8 + b` for the documented `(t, b)` pair, and the
//! offset basis is the FNV-0 hash of the 32-byte signature string
//! `chongo <Landon Curt Noll> /\../\`. All constants are stored as
//! big-endian byte strings and expanded to words at engine construction.

/// FNV-32 prime `0x01000193`.
pub const PRIME_32: [u8; 4] = [0x01, 0x00, 0x01, 0x93];

/// FNV-32 offset basis `0x811C9DC5`.
pub const OFFSET_BASIS_32: [u8; 4] = [0x81, 0x1c, 0x9d, 0xc5];

/// FNV-64 prime `0x00000100000001B3`.
pub const PRIME_64: [u8; 8] = [0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0xb3];

/// FNV-64 offset basis `0xCBF29CE484222325`.
pub const OFFSET_BASIS_64: [u8; 8] = [0xcb, 0xf2, 0x9c, 0xe4, 0x84, 0x22, 0x23, 0x25];

/// FNV-128 prime `2^88 + 2^8 + 0x3B`.
pub const PRIME_128: [u8; 16] = [
  0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x3b,
];

/// FNV-128 offset basis.
pub const OFFSET_BASIS_128: [u8; 16] = [
  0x6c, 0x62, 0x27, 0x2e, 0x07, 0xbb, 0x01, 0x42,
  0x62, 0xb8, 0x21, 0x75, 0x62, 0x95, 0xc5, 0x8d,
];

/// FNV-256 prime `2^168 + 2^8 + 0x63`.
pub const PRIME_256: [u8; 32] = [
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x63,
];

/// FNV-256 offset basis.
pub const OFFSET_BASIS_256: [u8; 32] = [
  0xdd, 0x26, 0x8d, 0xbc, 0xaa, 0xc5, 0x50, 0x36,
  0x2d, 0x98, 0xc3, 0x84, 0xc4, 0xe5, 0x76, 0xcc,
  0xc8, 0xb1, 0x53, 0x68, 0x47, 0xb6, 0xbb, 0xb3,
  0x10, 0x23, 0xb4, 0xc8, 0xca, 0xee, 0x05, 0x35,
];

/// FNV-512 prime `2^344 + 2^8 + 0x57`.
pub const PRIME_512: [u8; 64] = [
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x57,
];

/// FNV-512 offset basis.
pub const OFFSET_BASIS_512: [u8; 64] = [
  0xb8, 0x6d, 0xb0, 0xb1, 0x17, 0x1f, 0x44, 0x16,
  0xdc, 0xa1, 0xe5, 0x0f, 0x30, 0x99, 0x90, 0xac,
  0xac, 0x87, 0xd0, 0x59, 0xc9, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0d, 0x21,
  0xe9, 0x48, 0xf6, 0x8a, 0x34, 0xc1, 0x92, 0xf6,
  0x2e, 0xa7, 0x9b, 0xc9, 0x42, 0xdb, 0xe7, 0xce,
  0x18, 0x20, 0x36, 0x41, 0x5f, 0x56, 0xe3, 0x4b,
  0xac, 0x98, 0x2a, 0xac, 0x4a, 0xfe, 0x9f, 0xd9,
];

/// FNV-1024 prime `2^680 + 2^8 + 0x8D`.
pub const PRIME_1024: [u8; 128] = [
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x8d,
];

/// FNV-1024 offset basis.
pub const OFFSET_BASIS_1024: [u8; 128] = [
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x5f, 0x7a, 0x76, 0x75, 0x8e, 0xcc, 0x4d,
  0x32, 0xe5, 0x6d, 0x5a, 0x59, 0x10, 0x28, 0xb7,
  0x4b, 0x29, 0xfc, 0x42, 0x23, 0xfd, 0xad, 0xa1,
  0x6c, 0x3b, 0xf3, 0x4e, 0xda, 0x36, 0x74, 0xda,
  0x9a, 0x21, 0xd9, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0xc6, 0xd7,
  0xeb, 0x6e, 0x73, 0x80, 0x27, 0x34, 0x51, 0x0a,
  0x55, 0x5f, 0x25, 0x6c, 0xc0, 0x05, 0xae, 0x55,
  0x6b, 0xde, 0x8c, 0xc9, 0xc6, 0xa9, 0x3b, 0x21,
  0xaf, 0xf4, 0xb1, 0x6c, 0x71, 0xee, 0x90, 0xb3,
];

/// The `(prime, offset basis)` pair for a supported width, big-endian.
#[must_use]
pub(crate) const fn standard_constants(bits: u16) -> Option<(&'static [u8], &'static [u8])> {
  match bits {
    32 => Some((&PRIME_32, &OFFSET_BASIS_32)),
    64 => Some((&PRIME_64, &OFFSET_BASIS_64)),
    128 => Some((&PRIME_128, &OFFSET_BASIS_128)),
    256 => Some((&PRIME_256, &OFFSET_BASIS_256)),
    512 => Some((&PRIME_512, &OFFSET_BASIS_512)),
    1024 => Some((&PRIME_1024, &OFFSET_BASIS_1024)),
    _ => None,
  }
}

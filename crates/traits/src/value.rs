//! The digest value type.

use alloc::{string::String, vec::Vec};
use core::fmt;
use core::fmt::Write as _;

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

/// An immutable, fixed-length digest produced by a hash computation.
///
/// The length is determined by the producing engine and never changes after
/// construction. A zero-length value is the marker for "no value" (absence),
/// distinct from any zero-filled digest.
///
/// Equality, ordering-free hashing, and `Display` are defined over the digest
/// *content*: two values holding the same bytes compare equal regardless of
/// how they were produced.
///
/// # Examples
///
/// ```
/// use traits::HashValue;
///
/// let value = HashValue::new(vec![0x0f, 0xa0, 0x01]);
/// assert_eq!(value.to_hex(), "0fa001");
/// assert_eq!(value.len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct HashValue {
  bytes: Vec<u8>,
}

impl HashValue {
  /// Wrap `bytes` as a digest value.
  #[inline]
  #[must_use]
  pub const fn new(bytes: Vec<u8>) -> Self {
    Self { bytes }
  }

  /// The zero-length "no value" marker.
  #[inline]
  #[must_use]
  pub const fn absent() -> Self {
    Self { bytes: Vec::new() }
  }

  /// `true` when the value holds at least one byte.
  #[inline]
  #[must_use]
  pub fn has_value(&self) -> bool {
    !self.bytes.is_empty()
  }

  /// Digest length in bytes.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.bytes.len()
  }

  /// `true` for the absence marker.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.bytes.is_empty()
  }

  /// Borrow the digest bytes.
  ///
  /// The borrow is immutable; the stored digest cannot be modified through
  /// any reads.
  #[inline]
  #[must_use]
  pub fn as_slice(&self) -> &[u8] {
    &self.bytes
  }

  /// An owned copy of the digest bytes.
  #[inline]
  #[must_use]
  pub fn to_vec(&self) -> Vec<u8> {
    self.bytes.clone()
  }

  /// Lowercase hexadecimal, two characters per byte, no separators.
  #[must_use]
  pub fn to_hex(&self) -> String {
    hex::encode(&self.bytes)
  }

  /// Standard base64.
  #[must_use]
  pub fn to_base64(&self) -> String {
    STANDARD.encode(&self.bytes)
  }

  /// URL-safe base64: `+` → `-`, `/` → `_`, trailing `=` padding stripped.
  #[must_use]
  pub fn to_url_safe_base64(&self) -> String {
    URL_SAFE_NO_PAD.encode(&self.bytes)
  }

  /// Binary digits, eight characters per byte, most-significant bit first.
  #[must_use]
  pub fn to_binary_string(&self) -> String {
    let mut out = String::with_capacity(self.bytes.len() * 8);
    for &b in &self.bytes {
      // Infallible: writing to a String cannot fail.
      let _ = write!(out, "{b:08b}");
    }
    out
  }

  /// Apply `convert` to the digest bytes.
  pub fn to<T>(&self, convert: impl FnOnce(&[u8]) -> T) -> T {
    convert(&self.bytes)
  }
}

impl AsRef<[u8]> for HashValue {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    &self.bytes
  }
}

impl From<Vec<u8>> for HashValue {
  #[inline]
  fn from(bytes: Vec<u8>) -> Self {
    Self::new(bytes)
  }
}

impl fmt::Display for HashValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.to_hex())
  }
}

#[cfg(test)]
mod tests {
  use alloc::string::ToString;
  use alloc::vec;

  use super::*;

  #[test]
  fn hex_is_lowercase_without_separators() {
    let v = HashValue::new(vec![0x0f, 0xa0, 0x01]);
    assert_eq!(v.to_hex(), "0fa001");
    assert_eq!(v.to_string(), "0fa001");
  }

  #[test]
  fn base64_standard() {
    let v = HashValue::new(vec![0x01, 0x02, 0x03]);
    assert_eq!(v.to_base64(), "AQID");
  }

  #[test]
  fn base64_url_safe_strips_padding_and_remaps() {
    let v = HashValue::new(vec![0xff, 0xee, 0xdd, 0xcc]);
    assert_eq!(v.to_base64(), "/+7dzA==");
    assert_eq!(v.to_url_safe_base64(), "_-7dzA");
  }

  #[test]
  fn binary_string_is_msb_first() {
    let v = HashValue::new(vec![0x01, 0x02]);
    assert_eq!(v.to_binary_string(), "0000000100000010");
  }

  #[test]
  fn equality_is_content_based() {
    let a = HashValue::new(vec![2, 3, 4]);
    let b = HashValue::new(vec![2, 3, 4]);
    let c = HashValue::new(vec![2, 3, 5]);
    assert_eq!(a, b);
    assert_ne!(a, c);
  }

  #[test]
  fn absent_marker() {
    let v = HashValue::absent();
    assert!(!v.has_value());
    assert!(v.is_empty());
    assert_eq!(v.len(), 0);
    assert_eq!(v.to_hex(), "");
  }

  #[test]
  fn reads_leave_stored_bytes_untouched() {
    let v = HashValue::new(vec![11, 22, 33]);
    let mut copy = v.to_vec();
    copy[0] = 99;
    assert_eq!(v.as_slice(), &[11, 22, 33]);
  }

  #[test]
  fn to_converter_sees_underlying_bytes() {
    let v = HashValue::new(vec![10, 20, 30]);
    assert_eq!(v.to(|b| b.len()), 3);
    assert_eq!(v.to(|b| hex::encode(b)), v.to_hex());
  }
}

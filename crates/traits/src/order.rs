//! Byte-order selection shared by canonicalization and digest assembly.

/// Endianness applied to multi-byte values.
///
/// Controls two things: how the canonicalizer lays out multi-byte scalars,
/// and how an engine assembles its final accumulator into digest bytes.
/// Single-byte values are unaffected.
///
/// Big-endian is the default: the 32-bit offset basis `0x811C9DC5` renders
/// as the bytes `81 1C 9D C5`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
  /// Most-significant byte first.
  #[default]
  BigEndian,
  /// Least-significant byte first.
  LittleEndian,
}

impl ByteOrder {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::BigEndian => "big-endian",
      Self::LittleEndian => "little-endian",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_is_big_endian() {
    assert_eq!(ByteOrder::default(), ByteOrder::BigEndian);
  }

  #[test]
  fn names() {
    assert_eq!(ByteOrder::BigEndian.as_str(), "big-endian");
    assert_eq!(ByteOrder::LittleEndian.as_str(), "little-endian");
  }
}

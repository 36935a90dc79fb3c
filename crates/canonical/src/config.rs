//! Canonicalization options.

use traits::ByteOrder;

/// Text encoding applied to strings and characters.
///
/// The default is UTF-8. Text never honors the numeric byte-order setting;
/// the UTF-16 variants carry their unit order in the encoding itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextEncoding {
  /// Variable-width Unicode, one to four bytes per scalar value.
  #[default]
  Utf8,
  /// UTF-16, code units emitted least-significant byte first.
  Utf16Le,
  /// UTF-16, code units emitted most-significant byte first.
  Utf16Be,
}

impl TextEncoding {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Utf8 => "utf-8",
      Self::Utf16Le => "utf-16le",
      Self::Utf16Be => "utf-16be",
    }
  }
}

/// Options applied uniformly to one canonicalization pass.
///
/// Cheap to copy; fixed for the duration of a computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CanonicalOptions {
  /// Byte order for multi-byte numeric scalars.
  pub byte_order: ByteOrder,
  /// Encoding for strings and characters.
  pub encoding: TextEncoding,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    let opts = CanonicalOptions::default();
    assert_eq!(opts.byte_order, ByteOrder::BigEndian);
    assert_eq!(opts.encoding, TextEncoding::Utf8);
  }

  #[test]
  fn encoding_names() {
    assert_eq!(TextEncoding::Utf8.as_str(), "utf-8");
    assert_eq!(TextEncoding::Utf16Le.as_str(), "utf-16le");
    assert_eq!(TextEncoding::Utf16Be.as_str(), "utf-16be");
  }
}

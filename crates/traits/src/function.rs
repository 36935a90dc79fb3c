//! One-shot digest computation.

use crate::{ByteOrder, HashValue};

/// A hash function that maps a byte sequence to a fixed-length digest in one
/// pass.
///
/// Implementors are configured entirely at construction time; a single
/// computation applies that configuration uniformly to every input byte.
/// Engines whose state is immutable after construction (precomputed lookup
/// tables, expanded constants) are safe to share across threads.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::Crc;
/// use traits::HashFunction;
///
/// let crc = Crc::crc32_ieee();
/// let digest = crc.hash(b"123456789");
/// assert_eq!(digest.to_hex(), "cbf43926");
/// ```
pub trait HashFunction {
  /// Digest length in bytes.
  fn output_size(&self) -> usize;

  /// Byte order used when assembling the digest.
  fn byte_order(&self) -> ByteOrder;

  /// Compute the digest of `input`.
  ///
  /// The returned value always holds exactly [`output_size`](Self::output_size)
  /// bytes.
  #[must_use]
  fn hash(&self, input: &[u8]) -> HashValue;
}

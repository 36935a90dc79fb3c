//! Canonicalization errors.

use thiserror::Error;

/// Errors surfaced before any algorithm-specific processing begins.
///
/// A canonicalization either completes and hands a full byte sequence to the
/// engine, or fails here; no partial byte sequence is ever hashed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CanonicalError {
  /// A date/time value lies outside the representable tick range.
  #[error("instant is outside the canonical date/time range")]
  InstantOutOfRange,
  /// Reading a binary stream failed.
  #[cfg(feature = "std")]
  #[error("failed to read stream: {0}")]
  Stream(#[from] std::io::Error),
}

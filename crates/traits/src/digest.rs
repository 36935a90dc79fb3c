//! Block-buffered digest computation.

use core::fmt::Debug;

/// A digest computation that buffers input internally and is finalized
/// exactly once.
///
/// The lifecycle is a three-state machine:
///
/// 1. **Ready** — freshly constructed or [`reset`](Self::reset); no input
///    buffered, length counters zero.
/// 2. **Accumulating** — one or more [`update`](Self::update) calls applied.
/// 3. **Finalized** — [`finalize`](Self::finalize) consumes the hasher,
///    applies padding, and returns the digest. Feeding more input afterwards
///    is impossible by construction; start over with a fresh instance or
///    keep a [`Clone`] from before finalization.
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `reset()` must restore the hasher to its freshly-constructed state
/// - two finalizations of equal input on fresh instances must be byte-equal
pub trait Digest: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The digest output type, typically `[u8; N]`.
  type Output: Copy + Eq + Debug;

  /// Create a new hasher in its initial state.
  #[must_use]
  fn new() -> Self;

  /// Buffer additional input.
  fn update(&mut self, data: &[u8]);

  /// Apply padding, process the trailing block(s), and return the digest.
  ///
  /// Consumes the hasher: the finalized state accepts no further input.
  #[must_use]
  fn finalize(self) -> Self::Output;

  /// Return the hasher to its initial state, discarding buffered input and
  /// length counters.
  fn reset(&mut self);

  /// Compute the digest of `data` in one shot.
  #[inline]
  #[must_use]
  fn digest(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }
}

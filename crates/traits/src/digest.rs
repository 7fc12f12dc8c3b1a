//! One-shot digest trait for bulk, length-contracted inputs.

use core::fmt::Debug;

use crate::error::DigestError;

/// Cryptographic hash over complete, length-contracted buffers.
///
/// Unlike a streaming digest, implementations consume the whole input in a
/// single call and may reject inputs that violate their length contract.
/// This fits accelerator-style engines that hash large, aligned buffers and
/// keep no incremental state: the caller owns buffer preparation, the engine
/// owns everything between the input bytes and the digest bytes.
pub trait BulkDigest {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The digest output type.
  ///
  /// Typically `[u8; N]`.
  type Output: Copy + Eq + Debug;

  /// Compute the digest of `input` in one shot.
  ///
  /// # Errors
  ///
  /// Returns [`DigestError::InvalidInput`] when `input` violates the
  /// implementation's length contract, and [`DigestError::OutOfMemory`] when
  /// working storage cannot be allocated. No partial digest is ever produced.
  fn digest(input: &[u8]) -> Result<Self::Output, DigestError>;

  /// Compute the digest of `input` into a caller-provided buffer.
  ///
  /// # Errors
  ///
  /// Same as [`BulkDigest::digest`]. `out` is left unchanged on every
  /// failure path.
  fn digest_into(input: &[u8], out: &mut Self::Output) -> Result<(), DigestError>;
}

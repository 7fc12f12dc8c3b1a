//! Error types for bulk digest operations.
//!
//! Small, `Copy` error types. The engine validates its whole length contract
//! before touching any input byte, so every error here is raised synchronously
//! at the entry point and no partial digest can ever be observed.

use core::fmt;

/// A bulk digest operation failed.
///
/// # Examples
///
/// ```
/// use traits::{DigestError, InvalidInput};
///
/// fn check(len: usize) -> Result<(), DigestError> {
///   if len % 1024 != 0 {
///     return Err(DigestError::InvalidInput(InvalidInput::UnalignedLength { len }));
///   }
///   Ok(())
/// }
///
/// assert!(check(1025).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DigestError {
  /// The input violates the engine's length contract.
  ///
  /// Raised before any compression work; the output buffer is untouched.
  InvalidInput(InvalidInput),
  /// Scratch buffer allocation failed.
  ///
  /// Raised before any compression work; the output buffer is untouched.
  OutOfMemory,
}

/// The specific length-contract violation behind [`DigestError::InvalidInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum InvalidInput {
  /// Input length is not a whole number of 1024-byte chunks.
  UnalignedLength {
    /// The offending input length in bytes.
    len: usize,
  },
  /// The chunk count is not a power of two.
  ChunkCountNotPowerOfTwo {
    /// The offending chunk count.
    chunk_count: usize,
  },
  /// The chunk count is below the engine minimum.
  TooFewChunks {
    /// The offending chunk count.
    chunk_count: usize,
  },
}

impl fmt::Display for DigestError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidInput(cause) => write!(f, "invalid input: {cause}"),
      Self::OutOfMemory => f.write_str("scratch buffer allocation failed"),
    }
  }
}

impl fmt::Display for InvalidInput {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnalignedLength { len } => {
        write!(f, "input length {len} is not a multiple of the chunk size")
      }
      Self::ChunkCountNotPowerOfTwo { chunk_count } => {
        write!(f, "chunk count {chunk_count} is not a power of two")
      }
      Self::TooFewChunks { chunk_count } => {
        write!(f, "chunk count {chunk_count} is below the engine minimum")
      }
    }
  }
}

impl core::error::Error for InvalidInput {}

impl core::error::Error for DigestError {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      Self::InvalidInput(cause) => Some(cause),
      Self::OutOfMemory => None,
    }
  }
}

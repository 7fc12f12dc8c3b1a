//! BLAKE3 bulk tree-hash engine.
//!
//! This crate computes 32-byte BLAKE3 digests of contiguous buffers whose
//! length is a power-of-two multiple of the 1024-byte chunk size, with at
//! least [`MIN_CHUNK_COUNT`] chunks. It is the portable re-architecture of an
//! accelerator-style design: every chunk is compressed into a leaf chaining
//! value, leaves are merklised level by level, and the root compression
//! yields the digest. The intended operating point is large inputs (the
//! original accelerator targeted 2^20 chunks and up); 2^10 chunks (1 MiB) is
//! the hard floor.
//!
//! Inputs outside the contract are rejected up front - there is no padding,
//! no streaming, and no keyed or derive-key mode. Callers with general-shaped
//! data belong on a general-purpose BLAKE3 implementation; this engine trades
//! that generality for a driver whose passes are embarrassingly parallel.
//!
//! Output bits match upstream BLAKE3 exactly for every input the contract
//! admits.
//!
//! # Example
//!
//! ```
//! use engine::Blake3Bulk;
//!
//! let input = vec![0u8; 1024 * 1024];
//! let digest = Blake3Bulk::digest(&input)?;
//! assert_eq!(digest.len(), 32);
//! # Ok::<(), engine::DigestError>(())
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

#[doc(hidden)]
pub mod bench;
mod chunk;
mod dispatch;
mod kernels;
mod scratch;
mod tree;
mod words;

pub use dispatch::{EngineInfo, describe};
pub use traits::{BulkDigest, DigestError, InvalidInput};

/// Digest size in bytes.
pub const OUT_LEN: usize = 32;

/// Block size in bytes (one compression consumes one block).
pub const BLOCK_LEN: usize = 64;

/// Chunk size in bytes (16 blocks; one chunk produces one leaf).
pub const CHUNK_LEN: usize = 1024;

/// Smallest chunk count the engine accepts.
pub const MIN_CHUNK_COUNT: usize = 1024;

pub(crate) const ROUNDS: usize = 7;

pub(crate) const CHUNK_START: u32 = 1 << 0;
pub(crate) const CHUNK_END: u32 = 1 << 1;
pub(crate) const PARENT: u32 = 1 << 2;
pub(crate) const ROOT: u32 = 1 << 3;

pub(crate) const IV: [u32; 8] = [
  0x6A09_E667,
  0xBB67_AE85,
  0x3C6E_F372,
  0xA54F_F53A,
  0x510E_527F,
  0x9B05_688C,
  0x1F83_D9AB,
  0x5BE0_CD19,
];

/// Validate the length contract and return the chunk count.
pub(crate) fn chunk_count_for(len: usize) -> Result<usize, DigestError> {
  if !len.is_multiple_of(CHUNK_LEN) {
    return Err(DigestError::InvalidInput(InvalidInput::UnalignedLength { len }));
  }
  let chunk_count = len / CHUNK_LEN;
  if !chunk_count.is_power_of_two() {
    return Err(DigestError::InvalidInput(InvalidInput::ChunkCountNotPowerOfTwo {
      chunk_count,
    }));
  }
  if chunk_count < MIN_CHUNK_COUNT {
    return Err(DigestError::InvalidInput(InvalidInput::TooFewChunks { chunk_count }));
  }
  Ok(chunk_count)
}

/// One-shot BLAKE3 over power-of-two chunk counts.
///
/// See the crate docs for the length contract. All methods are stateless;
/// scratch storage lives for exactly one call.
#[derive(Clone, Copy, Debug, Default)]
pub struct Blake3Bulk;

impl Blake3Bulk {
  /// Compute the BLAKE3 digest of `input` in one shot.
  ///
  /// # Errors
  ///
  /// [`DigestError::InvalidInput`] when `input` is not a whole number of
  /// chunks, the chunk count is not a power of two, or the chunk count is
  /// below [`MIN_CHUNK_COUNT`]. [`DigestError::OutOfMemory`] when the scratch
  /// buffer cannot be allocated.
  #[inline]
  pub fn digest(input: &[u8]) -> Result<[u8; OUT_LEN], DigestError> {
    let chunk_count = chunk_count_for(input.len())?;
    let engine = dispatch::engine();
    let driver = dispatch::driver_for(chunk_count);
    tree::root_digest(engine.kernel, input, chunk_count, driver)
  }

  /// Compute the BLAKE3 digest of `input` into `digest_out`.
  ///
  /// # Errors
  ///
  /// Same as [`Blake3Bulk::digest`]. `digest_out` is left unchanged on every
  /// failure path.
  #[inline]
  pub fn digest_into(input: &[u8], digest_out: &mut [u8; OUT_LEN]) -> Result<(), DigestError> {
    let digest = Self::digest(input)?;
    *digest_out = digest;
    Ok(())
  }
}

impl BulkDigest for Blake3Bulk {
  const OUTPUT_SIZE: usize = OUT_LEN;
  type Output = [u8; OUT_LEN];

  #[inline]
  fn digest(input: &[u8]) -> Result<Self::Output, DigestError> {
    Self::digest(input)
  }

  #[inline]
  fn digest_into(input: &[u8], out: &mut Self::Output) -> Result<(), DigestError> {
    Self::digest_into(input, out)
  }
}

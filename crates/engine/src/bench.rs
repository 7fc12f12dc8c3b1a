//! Glue for benchmarks and cross-driver tests: digest with an explicitly
//! selected kernel or driver, bypassing dispatch. Not part of the public API
//! contract.

pub use crate::kernels::{ALL, KernelId};
use crate::{DigestError, OUT_LEN, chunk_count_for, dispatch, kernels, tree};

/// One-shot digest using an explicitly selected kernel, sequential driver.
///
/// # Errors
///
/// Same contract as [`crate::Blake3Bulk::digest`].
pub fn digest_with_kernel(id: KernelId, input: &[u8]) -> Result<[u8; OUT_LEN], DigestError> {
  let chunk_count = chunk_count_for(input.len())?;
  tree::root_digest(kernels::kernel(id), input, chunk_count, dispatch::Driver::Sequential)
}

/// One-shot digest forced onto the sequential driver.
///
/// # Errors
///
/// Same contract as [`crate::Blake3Bulk::digest`].
pub fn digest_sequential(input: &[u8]) -> Result<[u8; OUT_LEN], DigestError> {
  let chunk_count = chunk_count_for(input.len())?;
  tree::root_digest(dispatch::engine().kernel, input, chunk_count, dispatch::Driver::Sequential)
}

/// One-shot digest forced onto the parallel driver, regardless of tuning.
///
/// # Errors
///
/// Same contract as [`crate::Blake3Bulk::digest`].
#[cfg(feature = "parallel")]
pub fn digest_parallel(input: &[u8]) -> Result<[u8; OUT_LEN], DigestError> {
  let chunk_count = chunk_count_for(input.len())?;
  tree::root_digest(dispatch::engine().kernel, input, chunk_count, dispatch::Driver::Parallel)
}

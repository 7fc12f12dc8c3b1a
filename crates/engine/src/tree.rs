//! Merkle driver: leaf production, parent passes, root compression.
//!
//! `N` leaves reduce through `log2(N) - 1` parent levels; the final
//! compression pairs the last two chaining values under `PARENT | ROOT` and
//! its output serialises to the digest. Pairing is strictly `(2i, 2i + 1)`.
//!
//! Leaves and the parents within one level have no data dependencies, so both
//! passes run on either driver below. What must never happen is overlap
//! across levels: level `r` reads what level `r - 1` wrote. The sequential
//! driver orders levels by construction; the parallel driver issues one
//! parallel iterator per level, whose join is the level barrier.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use traits::DigestError;

use crate::{
  BLOCK_LEN, CHUNK_LEN, IV, OUT_LEN, PARENT, ROOT,
  chunk::compress_chunk,
  dispatch::Driver,
  kernels::Kernel,
  scratch::Scratch,
  words::digest_from_cv,
};

/// Compress two child chaining values into their parent's.
///
/// Parents always run with counter 0 and a full block; `flags` adds `ROOT`
/// for the final compression only.
pub(crate) fn parent_cv(kernel: Kernel, left: &[u32; 8], right: &[u32; 8], flags: u32) -> [u32; 8] {
  let mut block = [0u32; 16];
  let (lo, hi) = block.split_at_mut(8);
  lo.copy_from_slice(left);
  hi.copy_from_slice(right);
  (kernel.compress)(&IV, &block, 0, BLOCK_LEN as u32, PARENT | flags)
}

fn leaf_pass(kernel: Kernel, input: &[u8], leaves: &mut [[u32; 8]], driver: Driver) {
  let (chunks, rest) = input.as_chunks::<CHUNK_LEN>();
  debug_assert!(rest.is_empty());
  debug_assert_eq!(chunks.len(), leaves.len());

  match driver {
    Driver::Sequential => {
      for (i, (chunk, leaf)) in chunks.iter().zip(leaves.iter_mut()).enumerate() {
        *leaf = compress_chunk(kernel, chunk, i as u64);
      }
    }
    #[cfg(feature = "parallel")]
    Driver::Parallel => {
      chunks
        .par_iter()
        .zip_eq(leaves.par_iter_mut())
        .enumerate()
        .for_each(|(i, (chunk, leaf))| {
          *leaf = compress_chunk(kernel, chunk, i as u64);
        });
    }
  }
}

fn parent_pass(kernel: Kernel, read: &[[u32; 8]], write: &mut [[u32; 8]], driver: Driver) {
  debug_assert_eq!(read.len(), 2 * write.len());
  let (pairs, rest) = read.as_chunks::<2>();
  debug_assert!(rest.is_empty());

  match driver {
    Driver::Sequential => {
      for (dst, pair) in write.iter_mut().zip(pairs) {
        let [left, right] = pair;
        *dst = parent_cv(kernel, left, right, 0);
      }
    }
    #[cfg(feature = "parallel")]
    Driver::Parallel => {
      write.par_iter_mut().zip_eq(pairs.par_iter()).for_each(|(dst, pair)| {
        let [left, right] = pair;
        *dst = parent_cv(kernel, left, right, 0);
      });
    }
  }
}

/// Run the full tree: leaves, parent levels, root, digest.
///
/// `input` must already satisfy the length contract for `chunk_count`.
pub(crate) fn root_digest(
  kernel: Kernel,
  input: &[u8],
  chunk_count: usize,
  driver: Driver,
) -> Result<[u8; OUT_LEN], DigestError> {
  debug_assert_eq!(input.len(), chunk_count * CHUNK_LEN);

  let mut scratch = Scratch::new(chunk_count)?;

  leaf_pass(kernel, input, scratch.leaves_mut(), driver);

  // Intermediate parent levels, root excluded. Each level completes (the
  // parallel driver joins) before the next starts.
  let levels = chunk_count.trailing_zeros() - 1;
  for r in 1..=levels {
    let (write, read) = scratch.level_mut(r);
    parent_pass(kernel, read, write, driver);
  }

  // The final compression, and only this one, carries ROOT.
  let (left, right) = scratch.root_pair();
  let root = parent_cv(kernel, &left, &right, ROOT);
  Ok(digest_from_cv(&root))
}

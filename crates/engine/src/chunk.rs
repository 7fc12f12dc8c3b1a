//! Chunk compression: sixteen blocks folded into one leaf chaining value.

use crate::{BLOCK_LEN, CHUNK_END, CHUNK_LEN, CHUNK_START, IV, kernels::Kernel, words::block_from_le_bytes};

/// Compress one 1024-byte chunk into its 32-byte chaining value.
///
/// The first block carries `CHUNK_START`, the last carries `CHUNK_END`, the
/// fourteen in between carry no flags. Every block sees the chunk's index as
/// its counter and a full 64-byte block length.
pub(crate) fn compress_chunk(kernel: Kernel, chunk: &[u8; CHUNK_LEN], chunk_index: u64) -> [u32; 8] {
  let (blocks, rest) = chunk.as_chunks::<BLOCK_LEN>();
  debug_assert!(rest.is_empty());
  let last = blocks.len() - 1;

  let mut cv = IV;
  for (j, block_bytes) in blocks.iter().enumerate() {
    let start = if j == 0 { CHUNK_START } else { 0 };
    let end = if j == last { CHUNK_END } else { 0 };
    let block = block_from_le_bytes(block_bytes);
    cv = (kernel.compress)(&cv, &block, chunk_index, BLOCK_LEN as u32, start | end);
  }
  cv
}

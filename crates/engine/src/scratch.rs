//! Scratch storage for intermediate chaining values.
//!
//! The buffer holds `2N` chaining-value slots arranged as a pyramid: the leaf
//! level occupies slots `[N, 2N)` and parent level `r` occupies
//! `[N >> r, 2N >> r)`. Every level's write region sits strictly below its
//! read region, so a level pass borrows one mutable and one shared slice with
//! no overlap. After the last parent pass the root's two children sit in
//! slots `[2, 4)`.
//!
//! The buffer is owned by exactly one digest invocation and dropped with it;
//! nothing persists across calls.

use alloc::vec::Vec;

use traits::DigestError;

pub(crate) struct Scratch {
  cvs: Vec<[u32; 8]>,
  chunk_count: usize,
}

impl Scratch {
  /// Allocate scratch for `chunk_count` leaves.
  ///
  /// Allocation happens before any compression work; on failure the digest
  /// call returns [`DigestError::OutOfMemory`] without reading the input.
  pub(crate) fn new(chunk_count: usize) -> Result<Self, DigestError> {
    debug_assert!(chunk_count.is_power_of_two());
    debug_assert!(chunk_count >= 2);

    let slots = 2 * chunk_count;
    let mut cvs = Vec::new();
    cvs.try_reserve_exact(slots).map_err(|_| DigestError::OutOfMemory)?;
    cvs.resize(slots, [0u32; 8]);
    Ok(Self { cvs, chunk_count })
  }

  /// The leaf level, slots `[N, 2N)`, one per chunk in input order.
  pub(crate) fn leaves_mut(&mut self) -> &mut [[u32; 8]] {
    let (_, leaves) = self.cvs.split_at_mut(self.chunk_count);
    leaves
  }

  /// Disjoint (write, read) regions for parent level `r >= 1`.
  ///
  /// Reads level `r - 1` (slots `[N >> (r-1), 2N >> (r-1))`), writes level
  /// `r` (slots `[N >> r, N >> (r-1))`).
  pub(crate) fn level_mut(&mut self, r: u32) -> (&mut [[u32; 8]], &[[u32; 8]]) {
    debug_assert!(r >= 1);
    let read_base = self.chunk_count >> (r - 1);
    debug_assert!(read_base >= 2);

    let (below, from_read) = self.cvs.split_at_mut(read_base);
    let (_, write) = below.split_at_mut(read_base >> 1);
    let (read, _) = from_read.split_at(read_base);
    (write, read)
  }

  /// The root's two children, once every parent pass has run.
  pub(crate) fn root_pair(&self) -> ([u32; 8], [u32; 8]) {
    match self.cvs.get(2..4) {
      Some([left, right]) => (*left, *right),
      _ => unreachable!("scratch holds at least four slots"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn region_geometry() {
    let mut scratch = Scratch::new(8).expect("allocation");

    assert_eq!(scratch.leaves_mut().len(), 8);

    let (write, read) = scratch.level_mut(1);
    assert_eq!(write.len(), 4);
    assert_eq!(read.len(), 8);

    let (write, read) = scratch.level_mut(2);
    assert_eq!(write.len(), 2);
    assert_eq!(read.len(), 4);

    let (write, read) = scratch.level_mut(3);
    assert_eq!(write.len(), 1);
    assert_eq!(read.len(), 2);
  }

  #[test]
  fn levels_chain_reads_onto_previous_writes() {
    let mut scratch = Scratch::new(8).expect("allocation");

    // Mark the leaves, then check each level pass reads exactly what the
    // previous one wrote.
    for (i, leaf) in scratch.leaves_mut().iter_mut().enumerate() {
      *leaf = [i as u32; 8];
    }

    let (write, read) = scratch.level_mut(1);
    for (i, cv) in read.iter().enumerate() {
      assert_eq!(cv, &[i as u32; 8]);
    }
    for (i, slot) in write.iter_mut().enumerate() {
      *slot = [100 + i as u32; 8];
    }

    let (write, read) = scratch.level_mut(2);
    for (i, cv) in read.iter().enumerate() {
      assert_eq!(cv, &[100 + i as u32; 8]);
    }
    for slot in write.iter_mut() {
      *slot = [200; 8];
    }

    let (write, read) = scratch.level_mut(3);
    assert_eq!(read, &[[200u32; 8]; 2]);
    write[0] = [0u32; 8];

    // Level 3's write landed in slots [1, 2); the root pair lives in [2, 4),
    // which level 3 read from.
    let (left, right) = scratch.root_pair();
    assert_eq!(left, [200u32; 8]);
    assert_eq!(right, [200u32; 8]);
  }
}

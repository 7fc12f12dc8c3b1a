//! Row-rotation compression.
//!
//! The state is treated as a 4x4 row-major matrix. A round mixes the four
//! columns, rotates rows 1-3 left by their row index so the diagonals become
//! columns, mixes again, and rotates back. Vectorised backends express the
//! same trick with lane swizzles; here it is plain slice rotation. Unlike
//! [`super::scalar`], the message is physically permuted between rounds.

#![allow(clippy::indexing_slicing)] // Fixed-size state and message arrays

use super::MSG_PERMUTATION;
use crate::{IV, ROUNDS};

/// Quarter-round on column `i`, feeding two message words.
#[inline(always)]
fn mix(state: &mut [u32; 16], i: usize, mx: u32, my: u32) {
  state[i] = state[i].wrapping_add(state[4 + i]).wrapping_add(mx);
  state[12 + i] = (state[12 + i] ^ state[i]).rotate_right(16);
  state[8 + i] = state[8 + i].wrapping_add(state[12 + i]);
  state[4 + i] = (state[4 + i] ^ state[8 + i]).rotate_right(12);
  state[i] = state[i].wrapping_add(state[4 + i]).wrapping_add(my);
  state[12 + i] = (state[12 + i] ^ state[i]).rotate_right(8);
  state[8 + i] = state[8 + i].wrapping_add(state[12 + i]);
  state[4 + i] = (state[4 + i] ^ state[8 + i]).rotate_right(7);
}

/// Rotate rows 1-3 so each diagonal lines up as a column. Row 0 stays put.
#[inline(always)]
fn diagonalize(state: &mut [u32; 16]) {
  state[4..8].rotate_left(1);
  state[8..12].rotate_left(2);
  state[12..16].rotate_left(3);
}

#[inline(always)]
fn undiagonalize(state: &mut [u32; 16]) {
  state[4..8].rotate_right(1);
  state[8..12].rotate_right(2);
  state[12..16].rotate_right(3);
}

/// One round: four column mixes, then four diagonal mixes.
pub(crate) fn round(state: &mut [u32; 16], msg: &[u32; 16]) {
  for i in 0..4 {
    mix(state, i, msg[2 * i], msg[2 * i + 1]);
  }
  diagonalize(state);
  for i in 0..4 {
    mix(state, i, msg[8 + 2 * i], msg[8 + 2 * i + 1]);
  }
  undiagonalize(state);
}

/// Apply the message permutation in place.
pub(crate) fn permute(msg: &mut [u32; 16]) {
  let mut permuted = [0u32; 16];
  for (dst, &src) in permuted.iter_mut().zip(MSG_PERMUTATION.iter()) {
    *dst = msg[src];
  }
  *msg = permuted;
}

/// Compress one block into an output chaining value.
///
/// Same contract as [`super::scalar::compress`]; the two must agree bit for
/// bit on every operand.
pub(crate) fn compress(
  chaining_value: &[u32; 8],
  block_words: &[u32; 16],
  counter: u64,
  block_len: u32,
  flags: u32,
) -> [u32; 8] {
  let mut state = [0u32; 16];
  state[..8].copy_from_slice(chaining_value);
  state[8..12].copy_from_slice(&IV[..4]);
  state[12] = counter as u32;
  state[13] = (counter >> 32) as u32;
  state[14] = block_len;
  state[15] = flags;

  // The local message copy is scratch: permuted after every round but the
  // last, where a permute would feed nothing.
  let mut msg = *block_words;
  for r in 0..ROUNDS {
    round(&mut state, &msg);
    if r + 1 < ROUNDS {
      permute(&mut msg);
    }
  }

  let mut out = [0u32; 8];
  for (i, slot) in out.iter_mut().enumerate() {
    *slot = state[i] ^ state[8 + i];
  }
  out
}

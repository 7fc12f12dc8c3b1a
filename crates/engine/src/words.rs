//! Little-endian conversions at the input and digest boundaries.
//!
//! Total functions over fixed-size operands; no failure modes. On
//! little-endian targets the compiler lowers these loops to straight copies.

use crate::{BLOCK_LEN, OUT_LEN};

/// Four little-endian bytes as one message word.
#[inline(always)]
pub(crate) fn word_from_le_bytes(bytes: &[u8; 4]) -> u32 {
  u32::from_le_bytes(*bytes)
}

/// 64 little-endian bytes as the sixteen words of one message block.
#[inline]
pub(crate) fn block_from_le_bytes(bytes: &[u8; BLOCK_LEN]) -> [u32; 16] {
  let mut words = [0u32; 16];
  let (quads, rest) = bytes.as_chunks::<4>();
  debug_assert!(rest.is_empty());
  for (word, quad) in words.iter_mut().zip(quads) {
    *word = word_from_le_bytes(quad);
  }
  words
}

/// 32 little-endian bytes as an 8-word chaining value.
#[cfg(test)]
#[inline]
pub(crate) fn cv_from_le_bytes(bytes: &[u8; OUT_LEN]) -> [u32; 8] {
  let mut words = [0u32; 8];
  let (quads, rest) = bytes.as_chunks::<4>();
  debug_assert!(rest.is_empty());
  for (word, quad) in words.iter_mut().zip(quads) {
    *word = word_from_le_bytes(quad);
  }
  words
}

/// One message word as four little-endian bytes.
#[inline(always)]
pub(crate) fn word_to_le_bytes(word: u32) -> [u8; 4] {
  word.to_le_bytes()
}

/// The root chaining value serialised as the 32-byte digest.
#[inline]
pub(crate) fn digest_from_cv(cv: &[u32; 8]) -> [u8; OUT_LEN] {
  let mut out = [0u8; OUT_LEN];
  let (quads, rest) = out.as_chunks_mut::<4>();
  debug_assert!(rest.is_empty());
  for (quad, &word) in quads.iter_mut().zip(cv) {
    *quad = word_to_le_bytes(word);
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn word_order_is_little_endian() {
    assert_eq!(word_from_le_bytes(&[0x01, 0x02, 0x03, 0x04]), 0x0403_0201);
    assert_eq!(word_to_le_bytes(0x0403_0201), [0x01, 0x02, 0x03, 0x04]);
  }

  #[test]
  fn block_parse_places_words_in_order() {
    let mut bytes = [0u8; BLOCK_LEN];
    for (i, b) in bytes.iter_mut().enumerate() {
      *b = i as u8;
    }
    let words = block_from_le_bytes(&bytes);
    assert_eq!(words[0], 0x0302_0100);
    assert_eq!(words[15], 0x3F3E_3D3C);
  }

  #[test]
  fn cv_roundtrip() {
    // digest_from_cv(cv_from_le_bytes(b)) == b for any 32-byte value.
    let mut bytes = [0u8; OUT_LEN];
    for (i, b) in bytes.iter_mut().enumerate() {
      *b = (i as u8).wrapping_mul(37).wrapping_add(11);
    }
    assert_eq!(digest_from_cv(&cv_from_le_bytes(&bytes)), bytes);

    let all_ff = [0xFFu8; OUT_LEN];
    assert_eq!(digest_from_cv(&cv_from_le_bytes(&all_ff)), all_ff);
  }
}

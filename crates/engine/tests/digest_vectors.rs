//! End-to-end digest vectors and boundary behaviour.

use engine::{Blake3Bulk, CHUNK_LEN, DigestError, InvalidInput, MIN_CHUNK_COUNT};

const MIB: usize = 1024 * 1024;

/// BLAKE3 of one MiB of 0xFF bytes.
const ALL_FF_1MIB_DIGEST: [u8; 32] = [
  0x03, 0x6B, 0xA9, 0x36, 0xBC, 0xDC, 0x69, 0xC6, 0x38, 0x13, 0x9E, 0xB6, 0x7D, 0xCB, 0x04, 0x4D, 0xDC, 0xC5, 0x84,
  0xD7, 0x2C, 0xBB, 0x7D, 0x82, 0xA1, 0x5C, 0xEA, 0x70, 0xDF, 0x2D, 0xD4, 0xCD,
];

fn official(input: &[u8]) -> [u8; 32] {
  *blake3::hash(input).as_bytes()
}

#[test]
fn all_ff_one_mib_known_answer() {
  let input = vec![0xFFu8; MIB];
  let digest = Blake3Bulk::digest(&input).expect("1 MiB of 0xFF is a legal input");
  assert_eq!(digest, ALL_FF_1MIB_DIGEST);
  // The hardcoded vector and the official crate must agree with each other.
  assert_eq!(digest, official(&input));
}

#[test]
fn all_zero_one_mib_matches_official() {
  let input = vec![0u8; MIB];
  assert_eq!(Blake3Bulk::digest(&input).expect("legal input"), official(&input));
}

#[test]
fn counter_pattern_one_mib_matches_official() {
  let input: Vec<u8> = (0..MIB).map(|k| k as u8).collect();
  assert_eq!(Blake3Bulk::digest(&input).expect("legal input"), official(&input));
}

#[test]
fn two_mib_aa_matches_official() {
  let input = vec![0xAAu8; 2 * MIB];
  assert_eq!(Blake3Bulk::digest(&input).expect("legal input"), official(&input));
}

#[test]
fn four_mib_pattern_matches_official() {
  // Exercises two more parent levels than the minimum input.
  let input: Vec<u8> = (0..4 * MIB).map(|k| (k % 251) as u8).collect();
  assert_eq!(Blake3Bulk::digest(&input).expect("legal input"), official(&input));
}

#[test]
fn digests_are_deterministic() {
  let input: Vec<u8> = (0..MIB).map(|k| (k / 3) as u8).collect();
  let first = Blake3Bulk::digest(&input).expect("legal input");
  let second = Blake3Bulk::digest(&input).expect("legal input");
  assert_eq!(first, second);
}

#[test]
fn smallest_permitted_input_is_min_chunk_count() {
  assert_eq!(MIN_CHUNK_COUNT * CHUNK_LEN, MIB);

  let half = vec![0u8; (MIN_CHUNK_COUNT / 2) * CHUNK_LEN];
  assert_eq!(
    Blake3Bulk::digest(&half),
    Err(DigestError::InvalidInput(InvalidInput::TooFewChunks {
      chunk_count: MIN_CHUNK_COUNT / 2,
    }))
  );
}

#[test]
fn unaligned_length_is_rejected() {
  let input = vec![0u8; MIB + 1];
  assert_eq!(
    Blake3Bulk::digest(&input),
    Err(DigestError::InvalidInput(InvalidInput::UnalignedLength { len: MIB + 1 }))
  );
}

#[test]
fn non_power_of_two_chunk_count_is_rejected() {
  let input = vec![0u8; 1536 * CHUNK_LEN];
  assert_eq!(
    Blake3Bulk::digest(&input),
    Err(DigestError::InvalidInput(InvalidInput::ChunkCountNotPowerOfTwo {
      chunk_count: 1536,
    }))
  );
}

#[test]
fn empty_input_is_rejected() {
  assert!(Blake3Bulk::digest(&[]).is_err());
}

#[test]
fn failed_digest_leaves_output_untouched() {
  let sentinel = [0xA5u8; 32];
  let mut out = sentinel;

  let unaligned = vec![0u8; CHUNK_LEN + 7];
  assert!(Blake3Bulk::digest_into(&unaligned, &mut out).is_err());
  assert_eq!(out, sentinel);

  let too_few = vec![0u8; CHUNK_LEN];
  assert!(Blake3Bulk::digest_into(&too_few, &mut out).is_err());
  assert_eq!(out, sentinel);
}

#[test]
fn digest_into_matches_digest() {
  let input = vec![0x5Au8; MIB];
  let mut out = [0u8; 32];
  Blake3Bulk::digest_into(&input, &mut out).expect("legal input");
  assert_eq!(out, Blake3Bulk::digest(&input).expect("legal input"));
}

#[test]
fn describe_is_coherent() {
  let info = engine::describe();
  assert!(!info.kernel.is_empty());
  assert!(info.workers >= 1);
  if info.parallel {
    assert!(info.workers > 1);
  }
}

#![no_main]

use engine::{Blake3Bulk, CHUNK_LEN, MIN_CHUNK_COUNT};
use libfuzzer_sys::fuzz_target;

fn splitmix(state: &mut u64) -> u64 {
  *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
  let mut z = *state;
  z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
  z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
  z ^ (z >> 31)
}

// The engine's smallest legal input is 1 MiB, so raw fuzz bytes act as a seed
// that deterministically expands into a legal buffer.
fuzz_target!(|data: &[u8]| {
  let mut seed = 0xB31F_1E1D_0000_0000u64 ^ data.len() as u64;
  for &b in data.iter().take(32) {
    seed = seed.rotate_left(7) ^ u64::from(b);
  }

  let chunk_count = MIN_CHUNK_COUNT << (data.len() % 2);
  let mut input = vec![0u8; chunk_count * CHUNK_LEN];
  let mut state = seed;
  for word in input.chunks_exact_mut(8) {
    word.copy_from_slice(&splitmix(&mut state).to_le_bytes());
  }

  let ours = Blake3Bulk::digest(&input).expect("expanded input satisfies the length contract");
  assert_eq!(ours, *blake3::hash(&input).as_bytes());

  // Any truncation breaks the contract and must leave the output untouched.
  let cut = 1 + (seed as usize % (CHUNK_LEN - 1));
  let sentinel = [0x5Au8; 32];
  let mut out = sentinel;
  assert!(Blake3Bulk::digest_into(&input[..input.len() - cut], &mut out).is_err());
  assert_eq!(out, sentinel);
});

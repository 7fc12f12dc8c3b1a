//! Minimal usage: hash a 1 MiB buffer and print the digest.
//!
//! Run with: `cargo run --example basic -p engine`

use engine::{Blake3Bulk, describe};

fn main() {
  let info = describe();
  println!("kernel: {}, workers: {}, parallel: {}", info.kernel, info.workers, info.parallel);

  let input = vec![0xFFu8; 1024 * 1024];
  match Blake3Bulk::digest(&input) {
    Ok(digest) => {
      let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
      println!("blake3(0xFF * 1MiB) = {hex}");
    }
    Err(err) => eprintln!("digest failed: {err}"),
  }

  // Inputs outside the length contract are rejected up front.
  let err = Blake3Bulk::digest(&input[..input.len() - 1]).unwrap_err();
  println!("truncated input: {err}");
}

//! One-shot BLAKE3 for accelerator-style bulk inputs.
//!
//! `bulkhash` computes 32-byte BLAKE3 digests of contiguous buffers whose
//! length is a power-of-two multiple of the 1024-byte chunk size, with at
//! least 1024 chunks (1 MiB). Within that contract the output is bit-exact
//! with upstream BLAKE3; outside it, calls fail fast and touch nothing.
//!
//! The tree driver is embarrassingly parallel by construction: chunks hash
//! independently, and each merkle level reduces independently behind a level
//! barrier. With the default `parallel` feature, multi-core machines fan both
//! passes out via rayon.
//!
//! # Quick Start
//!
//! ```
//! use bulkhash::Blake3Bulk;
//!
//! let input = vec![0xFFu8; 1024 * 1024];
//! let digest = Blake3Bulk::digest(&input)?;
//! assert_eq!(digest[..4], [0x03, 0x6B, 0xA9, 0x36]);
//!
//! // The length contract is enforced up front.
//! assert!(Blake3Bulk::digest(&input[..1024]).is_err());
//! # Ok::<(), bulkhash::DigestError>(())
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Worker detection and cached dispatch |
//! | `parallel` | Yes | Rayon-backed leaf and level passes (implies `std`) |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! bulkhash = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std` the engine runs its sequential driver; `alloc` is still
//! required for the scratch buffer.
#![cfg_attr(not(feature = "std"), no_std)]

pub use engine::{
  BLOCK_LEN, Blake3Bulk, CHUNK_LEN, EngineInfo, MIN_CHUNK_COUNT, OUT_LEN, describe,
};
pub use traits::{BulkDigest, DigestError, InvalidInput};

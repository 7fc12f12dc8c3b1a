//! Execution-resource detection and tuning for the bulkhash workspace.
//!
//! This crate is the single source of truth for "how much hardware do I
//! have" and "when is it worth using" across the workspace.
//!
//! # Core Types
//!
//! - [`Tune`]: What strategies are optimal on this machine (tuning hints)
//! - [`workers()`]: How many workers the engine may fan out to
//!
//! # Main Entry Point
//!
//! ```
//! let tune = platform::tune();
//! let workers = platform::workers();
//!
//! if workers > 1 {
//!   // chunk counts at or above `tune.min_parallel_chunks` are worth
//!   // splitting across workers
//!   let _ = tune.min_parallel_chunks;
//! }
//! ```
//!
//! # Design Philosophy
//!
//! 1. **One API**: The engine queries `platform::workers()` / `platform::tune()` instead of doing
//!    ad-hoc detection.
//! 2. **Resources vs Tuning**: `workers()` says what's *available*; `Tune` says what's *worth it*.
//! 3. **Cached**: Runtime detection runs once and is cached in a `OnceLock` (std). Without `std`
//!    there is nothing to detect: one worker, portable tuning.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod detect;
pub mod tune;

pub use tune::{Tune, TuneKind};

/// Number of workers the engine may fan data-parallel passes out to.
///
/// With `std` this is the detected available parallelism, cached after the
/// first call. Without `std` it is always 1.
#[inline]
#[must_use]
pub fn workers() -> usize {
  detect::workers()
}

/// Tuning hints for the detected machine.
///
/// Convenience wrapper around the detection layer; see [`Tune`].
#[inline]
#[must_use]
pub fn tune() -> Tune {
  detect::tune()
}

/// Set or clear a detection override.
///
/// When set, [`workers()`] and [`tune()`] return the override instead of
/// detecting. Useful for pinning behaviour in tests and for deployments where
/// the execution environment is known up front. Pass `None` to clear the
/// override and resume detection.
#[inline]
pub fn set_override(value: Option<(usize, Tune)>) {
  detect::set_override(value);
}

/// Check whether a detection override is currently set.
#[inline]
#[must_use]
pub fn has_override() -> bool {
  detect::has_override()
}

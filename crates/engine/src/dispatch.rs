//! Engine configuration: kernel selection and execution strategy.
//!
//! Resolution runs once per process and is cached (`OnceLock` under `std`;
//! recomputed per call otherwise, where resolution is a constant anyway).
//! The kernel choice never affects output bits, only which expression of the
//! compression function runs; the driver choice is refined per call from the
//! chunk count so undersized inputs skip fan-out overhead.

use crate::kernels::{self, Kernel, KernelId};

/// Table preference. The scalar kernel keeps the whole state in registers;
/// the rows kernel carries the swizzle-style round structure and stays
/// selectable through [`crate::bench`].
const PREFERRED: KernelId = KernelId::Scalar;

/// How a single digest call executes its passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Driver {
  Sequential,
  #[cfg(feature = "parallel")]
  Parallel,
}

#[derive(Clone, Copy)]
pub(crate) struct Engine {
  pub(crate) kernel: Kernel,
  pub(crate) workers: usize,
}

fn resolve() -> Engine {
  Engine {
    kernel: kernels::kernel(PREFERRED),
    workers: platform::workers(),
  }
}

#[cfg(feature = "std")]
pub(crate) fn engine() -> Engine {
  use std::sync::OnceLock;
  static ACTIVE: OnceLock<Engine> = OnceLock::new();
  *ACTIVE.get_or_init(resolve)
}

#[cfg(not(feature = "std"))]
pub(crate) fn engine() -> Engine {
  resolve()
}

/// Pick the driver for one call.
///
/// The parallel driver engages only when it can pay for its per-level joins:
/// more than one worker, a chunk count at or above the tuning threshold, and
/// enough chunks that every worker keeps a meaningful span.
#[cfg(feature = "parallel")]
pub(crate) fn driver_for(chunk_count: usize) -> Driver {
  let workers = engine().workers;
  let tune = platform::tune();
  if workers > 1
    && chunk_count >= tune.min_parallel_chunks
    && chunk_count / workers >= tune.min_chunks_per_worker
  {
    Driver::Parallel
  } else {
    Driver::Sequential
  }
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn driver_for(_chunk_count: usize) -> Driver {
  Driver::Sequential
}

/// A snapshot of the resolved engine configuration.
///
/// Purely informational; nothing here changes output bits.
#[derive(Clone, Copy, Debug)]
pub struct EngineInfo {
  /// Active compression kernel name.
  pub kernel: &'static str,
  /// Workers available to the parallel driver.
  pub workers: usize,
  /// Whether the parallel driver can engage at all.
  pub parallel: bool,
}

/// Describe the resolved engine configuration.
#[must_use]
pub fn describe() -> EngineInfo {
  let engine = engine();
  EngineInfo {
    kernel: engine.kernel.name,
    workers: engine.workers,
    parallel: cfg!(feature = "parallel") && engine.workers > 1,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn describe_reports_active_kernel() {
    let info = describe();
    assert_eq!(info.kernel, PREFERRED.as_str());
    assert!(info.workers >= 1);
  }

  #[cfg(feature = "parallel")]
  #[test]
  fn tiny_counts_stay_sequential() {
    // Far below any sane per-worker span; must not fan out.
    assert_eq!(driver_for(2), Driver::Sequential);
  }
}

//! Worker detection and caching.
//!
//! With `std`, available parallelism is detected once and cached in a
//! `OnceLock`; a process-wide override can replace the detected values (the
//! override is consulted on every call, so tests can flip it at will).
//! Without `std` there is nothing to detect: one worker, portable tuning.

use crate::tune::Tune;

#[cfg(feature = "std")]
mod imp {
  use std::sync::{OnceLock, RwLock};

  use crate::tune::Tune;

  static DETECTED_WORKERS: OnceLock<usize> = OnceLock::new();
  static OVERRIDE: RwLock<Option<(usize, Tune)>> = RwLock::new(None);

  fn override_value() -> Option<(usize, Tune)> {
    // A poisoned lock means a writer panicked mid-store of a Copy value;
    // treat it as "no override" rather than propagating the panic.
    OVERRIDE.read().ok().and_then(|guard| *guard)
  }

  pub(super) fn workers() -> usize {
    if let Some((workers, _)) = override_value() {
      return workers.max(1);
    }
    *DETECTED_WORKERS.get_or_init(|| std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1))
  }

  pub(super) fn tune() -> Tune {
    if let Some((_, tune)) = override_value() {
      return tune;
    }
    if workers() > 1 { Tune::DEFAULT } else { Tune::PORTABLE }
  }

  pub(super) fn set_override(value: Option<(usize, Tune)>) {
    if let Ok(mut guard) = OVERRIDE.write() {
      *guard = value;
    }
  }

  pub(super) fn has_override() -> bool {
    override_value().is_some()
  }
}

#[cfg(not(feature = "std"))]
mod imp {
  use crate::tune::Tune;

  pub(super) fn workers() -> usize {
    1
  }

  pub(super) fn tune() -> Tune {
    Tune::PORTABLE
  }

  pub(super) fn set_override(_value: Option<(usize, Tune)>) {}

  pub(super) fn has_override() -> bool {
    false
  }
}

#[inline]
pub(crate) fn workers() -> usize {
  imp::workers()
}

#[inline]
pub(crate) fn tune() -> Tune {
  imp::tune()
}

#[inline]
pub(crate) fn set_override(value: Option<(usize, Tune)>) {
  imp::set_override(value);
}

#[inline]
pub(crate) fn has_override() -> bool {
  imp::has_override()
}

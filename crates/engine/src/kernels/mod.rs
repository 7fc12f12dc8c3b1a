//! Compression kernels.
//!
//! The round function has two portable expressions that must produce
//! identical bits: the fully unrolled scalar form ([`scalar`]) and the
//! row-rotation form ([`rows`]) that mirrors how vectorised backends reuse
//! the column mix for the diagonal mix. Dispatch picks one per process; the
//! other stays selectable for benches and the agreement tests.

pub(crate) mod rows;
pub(crate) mod scalar;

/// Message word permutation applied between rounds.
pub(crate) const MSG_PERMUTATION: [usize; 16] = [2, 6, 3, 10, 7, 0, 4, 13, 1, 11, 12, 5, 9, 14, 15, 8];

/// Core compression function.
///
/// Consumes an input chaining value, one message block, the 64-bit counter,
/// the block length and the flag word; produces the output chaining value.
pub(crate) type CompressFn = fn(&[u32; 8], &[u32; 16], u64, u32, u32) -> [u32; 8];

#[derive(Clone, Copy)]
pub(crate) struct Kernel {
  pub(crate) compress: CompressFn,
  /// Kernel name for introspection and benches.
  pub(crate) name: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum KernelId {
  Scalar = 0,
  Rows = 1,
}

pub const ALL: &[KernelId] = &[KernelId::Scalar, KernelId::Rows];

impl KernelId {
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Scalar => "portable/scalar",
      Self::Rows => "portable/rows",
    }
  }
}

#[must_use]
pub(crate) fn kernel(id: KernelId) -> Kernel {
  match id {
    KernelId::Scalar => Kernel {
      compress: scalar::compress,
      name: id.as_str(),
    },
    KernelId::Rows => Kernel {
      compress: rows::compress,
      name: id.as_str(),
    },
  }
}

//! Shared-memory parallel kernels.
//!
//! Available with the `rayon` feature. Each routine checks the same shape
//! preconditions as its serial counterpart in [`crate::core::kernel`] and
//! produces bit-identical output: work is split only across independent
//! rows (or columns, for `vecmat`), never inside a single reduction.

#[cfg(feature = "rayon")]
pub mod rayon_pool;
#[cfg(feature = "rayon")]
pub use rayon_pool::{init_thread_pool, par_matmat, par_matvec, par_vecmat};

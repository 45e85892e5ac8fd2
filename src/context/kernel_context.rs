//! Options-driven entry point for the dense kernels.
//!
//! `KernelContext` holds a [`KernelOptions`] and routes each call to the
//! serial kernel in [`crate::core::kernel`] or to the rayon path in
//! [`crate::parallel`], depending on the flags and on operand size. Both
//! paths return identical values; the choice only affects wall time.
//!
//! # Example
//! ```rust
//! use rowla::{KernelContext, KernelOptions, RowMatrix};
//!
//! let ctx = KernelContext::new(KernelOptions::serial());
//! let m = RowMatrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
//! assert_eq!(ctx.matvec(&m, &[5.0, 7.0]).unwrap(), vec![5.0, 7.0]);
//! ```

use log::{debug, trace};
use num_traits::Float;

use crate::config::{KernelFlags, KernelOptions};
use crate::core::kernel;
use crate::error::Result;
use crate::matrix::RowMatrix;

#[derive(Debug, Clone)]
pub struct KernelContext {
    pub options: KernelOptions,
}

impl Default for KernelContext {
    fn default() -> Self {
        Self::new(KernelOptions::default())
    }
}

impl KernelContext {
    /// Create a context. With `PARALLEL_ROWS` set and the `rayon` feature
    /// enabled this also sizes the global rayon pool.
    pub fn new(options: KernelOptions) -> Self {
        debug!("kernel context: {:?}", options);
        #[cfg(feature = "rayon")]
        {
            if options.flags.contains(KernelFlags::PARALLEL_ROWS) {
                crate::parallel::init_thread_pool(options.num_threads);
            }
        }
        Self { options }
    }

    fn parallel(&self, len: usize) -> bool {
        cfg!(feature = "rayon") && self.options.use_parallel(len)
    }

    /// Transpose, bug-compatible when `LEGACY_TRANSPOSE` is set.
    pub fn transpose<T: Float>(&self, m: &RowMatrix<T>) -> Result<RowMatrix<T>> {
        trace!("transpose {}x{}", m.nrows(), m.ncols());
        if self.options.flags.contains(KernelFlags::LEGACY_TRANSPOSE) {
            kernel::transpose_legacy(m)
        } else {
            Ok(kernel::transpose(m))
        }
    }

    /// Always serial; a split reduction would change rounding.
    pub fn dot<T: Float>(&self, v1: &[T], v2: &[T]) -> Result<T> {
        trace!("dot len {} . len {}", v1.len(), v2.len());
        kernel::dot(v1, v2)
    }

    pub fn matvec<T: Float + Send + Sync>(&self, m: &RowMatrix<T>, v: &[T]) -> Result<Vec<T>> {
        let par = self.parallel(m.nrows());
        trace!("matvec {}x{} . {} (parallel: {})", m.nrows(), m.ncols(), v.len(), par);
        #[cfg(feature = "rayon")]
        {
            if par {
                return crate::parallel::par_matvec(m, v);
            }
        }
        kernel::matvec(m, v)
    }

    pub fn vecmat<T: Float + Send + Sync>(&self, v: &[T], m: &RowMatrix<T>) -> Result<Vec<T>> {
        let par = self.parallel(m.ncols());
        trace!("vecmat {} . {}x{} (parallel: {})", v.len(), m.nrows(), m.ncols(), par);
        #[cfg(feature = "rayon")]
        {
            if par {
                return crate::parallel::par_vecmat(v, m);
            }
        }
        kernel::vecmat(v, m)
    }

    pub fn matmat<T: Float + Send + Sync>(
        &self,
        m1: &RowMatrix<T>,
        m2: &RowMatrix<T>,
    ) -> Result<RowMatrix<T>> {
        let par = self.parallel(m1.nrows());
        trace!(
            "matmat {}x{} . {}x{} (parallel: {})",
            m1.nrows(), m1.ncols(), m2.nrows(), m2.ncols(), par
        );
        #[cfg(feature = "rayon")]
        {
            if par {
                return crate::parallel::par_matmat(m1, m2);
            }
        }
        kernel::matmat(m1, m2)
    }
}

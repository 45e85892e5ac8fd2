//! Core linear-algebra traits for rowla.

use crate::error::Result;

/// Multiplication `self · rhs`, one impl per operand pairing.
///
/// Implemented for vector·vector (scalar), matrix·vector, vector·matrix and
/// matrix·matrix. Shape preconditions are reported as
/// [`KernelError::DimensionMismatch`](crate::error::KernelError).
pub trait Matmul<Rhs: ?Sized> {
    type Output;
    /// Compute `self · rhs`.
    fn matmul(&self, rhs: &Rhs) -> Result<Self::Output>;
}

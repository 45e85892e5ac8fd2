//! Core traits and serial kernels.

pub mod kernel;
pub mod traits;

pub use kernel::{dot, matmat, matmul, matvec, transpose, transpose_legacy, vecmat};
pub use traits::Matmul;

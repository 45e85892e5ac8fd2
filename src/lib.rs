//! rowla: dense row-major linear-algebra kernels
//!
//! This crate provides transpose, dot products and the four matrix/vector
//! multiplication forms (vector·vector, matrix·vector, vector·matrix,
//! matrix·matrix) over row-major matrices stored as lists of rows. Shape
//! violations are returned as errors instead of aborting, and large operands
//! can be processed row-parallel with rayon without changing results.

pub mod parallel;

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod matrix;

// Re-exports for convenience
pub use config::*;
pub use context::*;
pub use crate::core::*;
pub use error::*;
pub use matrix::*;

//! Context module for rowla.
//!
//! Provides [`KernelContext`], which pairs the kernels with runtime
//! [`KernelOptions`](crate::config::KernelOptions): serial or row-parallel
//! execution and the transpose compatibility mode.

pub mod kernel_context;
pub use kernel_context::KernelContext;

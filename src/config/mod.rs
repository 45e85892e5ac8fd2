//! Configuration for the kernel context.

pub mod options;
pub use options::{KernelFlags, KernelOptions};

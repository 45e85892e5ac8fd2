//! Runtime options for the kernel context.
//!
//! `KernelOptions` selects between the serial and row-parallel code paths
//! and between the corrected and the bug-compatible transpose. The defaults
//! give corrected semantics with parallelism enabled for large operands.

use bitflags::bitflags;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct KernelFlags: u32 {
        const PARALLEL_ROWS    = 0b0000_0001; // rayon over rows (columns for vecmat)
        const LEGACY_TRANSPOSE = 0b0000_0010; // reproduce the old transpose loop bound
    }
}

/// Kernel context options.
#[derive(Debug, Clone)]
pub struct KernelOptions {
    /// Behavior switches
    pub flags: KernelFlags,

    /// Smallest row (or column) count that takes the parallel path
    pub par_min_rows: usize,

    /// Global rayon pool size; `None` uses the number of logical CPUs
    pub num_threads: Option<usize>,
}

impl Default for KernelOptions {
    fn default() -> Self {
        Self {
            flags: KernelFlags::PARALLEL_ROWS,
            par_min_rows: 64,
            num_threads: None,
        }
    }
}

impl KernelOptions {
    /// Serial execution, corrected transpose.
    pub fn serial() -> Self {
        Self { flags: KernelFlags::empty(), ..Self::default() }
    }

    pub fn with_flags(mut self, flags: KernelFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_par_min_rows(mut self, n: usize) -> Self {
        self.par_min_rows = n;
        self
    }

    pub fn with_num_threads(mut self, n: usize) -> Self {
        self.num_threads = Some(n);
        self
    }

    /// True when an operand of `len` rows/columns should run in parallel.
    pub fn use_parallel(&self, len: usize) -> bool {
        self.flags.contains(KernelFlags::PARALLEL_ROWS) && len >= self.par_min_rows
    }
}

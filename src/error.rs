use thiserror::Error;

// Unified error type for rowla

/// Ways a row list can fail the rectangular invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Malformed {
    #[error("matrix has no rows")]
    NoRows,
    #[error("matrix rows have zero length")]
    EmptyRow,
    #[error("row {row} has length {actual}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    #[error("dimension mismatch in {op}: expected {expected}, got {actual}")]
    DimensionMismatch {
        op: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("malformed matrix: {0}")]
    MalformedMatrix(#[from] Malformed),
    #[error("legacy transpose reads out of bounds for a {nrows}x{ncols} matrix")]
    LegacyOutOfBounds { nrows: usize, ncols: usize },
}

pub type Result<T> = std::result::Result<T, KernelError>;

impl KernelError {
    pub(crate) fn mismatch(op: &'static str, expected: usize, actual: usize) -> Self {
        KernelError::DimensionMismatch { op, expected, actual }
    }
}

//! Row-major dense matrix stored as a list of row vectors.
//!
//! `RowMatrix` owns its rows and guarantees the rectangular invariant: at
//! least one row, every row the same non-zero length. Kernel routines rely on
//! that guarantee and never re-check it. Conversions to and from
//! `faer::Mat<T>` are provided for interop with column-major code.

use std::ops::Index;

use crate::error::{Malformed, Result};
use faer::Mat;
use num_traits::Float;

#[derive(Clone, Debug, PartialEq)]
pub struct RowMatrix<T> {
    rows: Vec<Vec<T>>,
    ncols: usize,
}

/// Check the rectangular invariant and return `(nrows, ncols)`.
pub fn check_rows<T>(rows: &[Vec<T>]) -> std::result::Result<(usize, usize), Malformed> {
    let first = rows.first().ok_or(Malformed::NoRows)?;
    let ncols = first.len();
    if ncols == 0 {
        return Err(Malformed::EmptyRow);
    }
    for (row, r) in rows.iter().enumerate().skip(1) {
        if r.len() != ncols {
            return Err(Malformed::Ragged { row, expected: ncols, actual: r.len() });
        }
    }
    Ok((rows.len(), ncols))
}

impl<T> RowMatrix<T> {
    /// Build from a list of rows, rejecting empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let (_, ncols) = check_rows(&rows)?;
        Ok(Self { rows, ncols })
    }

    /// Caller guarantees the rows already satisfy the invariant.
    pub(crate) fn from_rows_unchecked(rows: Vec<Vec<T>>, ncols: usize) -> Self {
        debug_assert!(check_rows(&rows).is_ok());
        Self { rows, ncols }
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.ncols)
    }

    /// Borrow row `i`. Panics if `i` is out of range, like slice indexing.
    pub fn row(&self, i: usize) -> &[T] {
        &self.rows[i]
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }
}

impl<T: Float> RowMatrix<T> {
    /// `nrows x ncols` matrix of zeros. Both dimensions must be non-zero.
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self> {
        Self::from_rows(vec![vec![T::zero(); ncols]; nrows])
    }

    /// `n x n` identity. `n` must be non-zero.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for (i, row) in m.rows.iter_mut().enumerate() {
            row[i] = T::one();
        }
        Ok(m)
    }

    /// Copy a column-major faer matrix into row-major storage.
    pub fn from_faer(m: &Mat<T>) -> Result<Self> {
        let rows = (0..m.nrows())
            .map(|i| (0..m.ncols()).map(|j| m[(i, j)]).collect())
            .collect();
        Self::from_rows(rows)
    }

    pub fn to_faer(&self) -> Mat<T> {
        Mat::from_fn(self.nrows(), self.ncols, |i, j| self.rows[i][j])
    }
}

impl<T> Index<(usize, usize)> for RowMatrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.rows[i][j]
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for RowMatrix<T> {
    type Error = crate::error::KernelError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

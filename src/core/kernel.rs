//! Serial dense kernels over row-major matrices.
//!
//! Every routine borrows its inputs and returns freshly allocated output.
//! Shape preconditions surface as [`KernelError::DimensionMismatch`]; the
//! rectangular invariant is already guaranteed by [`RowMatrix`].
//!
//! Accumulation order is fixed so results are reproducible bit-for-bit:
//! - `dot` sums products in ascending index order, starting from zero;
//! - `matvec` applies `dot` once per row;
//! - `vecmat` accumulates `v[i] * M[i]` in ascending row order into a zero
//!   vector;
//! - `matmat` applies `vecmat` once per row of the left operand.

use crate::core::traits::Matmul;
use crate::error::{KernelError, Result};
use crate::matrix::RowMatrix;
use num_traits::Float;

/// Inner product `Σ v1[k] * v2[k]`.
pub fn dot<T: Float>(v1: &[T], v2: &[T]) -> Result<T> {
    if v1.len() != v2.len() {
        return Err(KernelError::mismatch("dot", v1.len(), v2.len()));
    }
    Ok(v1
        .iter()
        .zip(v2)
        .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
}

/// `Mᵗ[i][j] = M[j][i]`; an `n x m` input gives an `m x n` output.
pub fn transpose<T: Copy>(m: &RowMatrix<T>) -> RowMatrix<T> {
    let (nrows, ncols) = m.shape();
    let rows = (0..ncols)
        .map(|i| (0..nrows).map(|j| m[(j, i)]).collect())
        .collect();
    RowMatrix::from_rows_unchecked(rows, nrows)
}

/// Bug-compatible transpose for callers that must match legacy output.
///
/// Legacy code bounded the inner loop by the column count instead of the row
/// count. For `nrows > ncols` the trailing entries of each output row stay
/// zero; for `ncols > nrows` legacy code read past the last row, which is
/// reported as [`KernelError::LegacyOutOfBounds`]. Square input matches
/// [`transpose`].
pub fn transpose_legacy<T: Float>(m: &RowMatrix<T>) -> Result<RowMatrix<T>> {
    let (nrows, ncols) = m.shape();
    if ncols > nrows {
        return Err(KernelError::LegacyOutOfBounds { nrows, ncols });
    }
    let mut rows = vec![vec![T::zero(); nrows]; ncols];
    for (i, out) in rows.iter_mut().enumerate() {
        for j in 0..ncols {
            out[j] = m[(j, i)];
        }
    }
    Ok(RowMatrix::from_rows_unchecked(rows, nrows))
}

pub(crate) fn check_matvec<T>(m: &RowMatrix<T>, v: &[T]) -> Result<()> {
    if m.ncols() != v.len() {
        return Err(KernelError::mismatch("matvec", m.ncols(), v.len()));
    }
    Ok(())
}

pub(crate) fn check_vecmat<T>(v: &[T], m: &RowMatrix<T>) -> Result<()> {
    if v.len() != m.nrows() {
        return Err(KernelError::mismatch("vecmat", m.nrows(), v.len()));
    }
    Ok(())
}

/// Only the transpose-paired shape is accepted: `n x m` times `m x n`.
pub(crate) fn check_matmat<T>(m1: &RowMatrix<T>, m2: &RowMatrix<T>) -> Result<()> {
    if m2.nrows() != m1.ncols() {
        return Err(KernelError::mismatch("matmat (rhs rows)", m1.ncols(), m2.nrows()));
    }
    if m2.ncols() != m1.nrows() {
        return Err(KernelError::mismatch("matmat (rhs cols)", m1.nrows(), m2.ncols()));
    }
    Ok(())
}

/// `r = M · v` for an `n x m` matrix and length-`m` column vector.
pub fn matvec<T: Float>(m: &RowMatrix<T>, v: &[T]) -> Result<Vec<T>> {
    check_matvec(m, v)?;
    m.rows().iter().map(|row| dot(row, v)).collect()
}

/// `r = v · M` for a length-`n` row vector and `n x m` matrix.
pub fn vecmat<T: Float>(v: &[T], m: &RowMatrix<T>) -> Result<Vec<T>> {
    check_vecmat(v, m)?;
    let mut res = vec![T::zero(); m.ncols()];
    for (&vi, row) in v.iter().zip(m.rows()) {
        for (r, &mij) in res.iter_mut().zip(row) {
            *r = *r + vi * mij;
        }
    }
    Ok(res)
}

/// `M3 = M1 · M2` for `M1: n x m` and `M2: m x n`, giving `n x n`.
///
/// The general `n x k` by `k x p` product is deliberately not accepted.
pub fn matmat<T: Float>(m1: &RowMatrix<T>, m2: &RowMatrix<T>) -> Result<RowMatrix<T>> {
    check_matmat(m1, m2)?;
    let rows = m1
        .rows()
        .iter()
        .map(|row| vecmat(row, m2))
        .collect::<Result<Vec<_>>>()?;
    Ok(RowMatrix::from_rows_unchecked(rows, m2.ncols()))
}

/// `lhs · rhs` for any supported operand pairing.
pub fn matmul<L, R>(lhs: &L, rhs: &R) -> Result<L::Output>
where
    L: Matmul<R> + ?Sized,
    R: ?Sized,
{
    lhs.matmul(rhs)
}

impl<T: Float> Matmul<[T]> for [T] {
    type Output = T;
    fn matmul(&self, rhs: &[T]) -> Result<T> {
        dot(self, rhs)
    }
}

impl<T: Float> Matmul<Vec<T>> for Vec<T> {
    type Output = T;
    fn matmul(&self, rhs: &Vec<T>) -> Result<T> {
        dot(self, rhs)
    }
}

impl<T: Float> Matmul<[T]> for RowMatrix<T> {
    type Output = Vec<T>;
    fn matmul(&self, rhs: &[T]) -> Result<Vec<T>> {
        matvec(self, rhs)
    }
}

impl<T: Float> Matmul<Vec<T>> for RowMatrix<T> {
    type Output = Vec<T>;
    fn matmul(&self, rhs: &Vec<T>) -> Result<Vec<T>> {
        matvec(self, rhs)
    }
}

impl<T: Float> Matmul<RowMatrix<T>> for [T] {
    type Output = Vec<T>;
    fn matmul(&self, rhs: &RowMatrix<T>) -> Result<Vec<T>> {
        vecmat(self, rhs)
    }
}

impl<T: Float> Matmul<RowMatrix<T>> for Vec<T> {
    type Output = Vec<T>;
    fn matmul(&self, rhs: &RowMatrix<T>) -> Result<Vec<T>> {
        vecmat(self, rhs)
    }
}

impl<T: Float> Matmul<RowMatrix<T>> for RowMatrix<T> {
    type Output = RowMatrix<T>;
    fn matmul(&self, rhs: &RowMatrix<T>) -> Result<RowMatrix<T>> {
        matmat(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat(rows: Vec<Vec<f64>>) -> RowMatrix<f64> {
        RowMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn dot_known_value() {
        let d = dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
        assert_eq!(d, 32.0);
    }

    #[test]
    fn dot_length_mismatch_is_an_error() {
        let err = dot(&[1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            KernelError::DimensionMismatch { op: "dot", expected: 2, actual: 3 }
        );
    }

    #[test]
    fn transpose_rectangular() {
        let m = mat(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        let t = transpose(&m);
        assert_eq!(t.shape(), (2, 3));
        assert_eq!(t.rows(), &[vec![1.0, 3.0, 5.0], vec![2.0, 4.0, 6.0]]);
        assert_eq!(transpose(&t), m);
    }

    #[test]
    fn legacy_transpose_tall_leaves_zeros() {
        let m = mat(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        let t = transpose_legacy(&m).unwrap();
        assert_eq!(t.rows(), &[vec![1.0, 3.0, 0.0], vec![2.0, 4.0, 0.0]]);
    }

    #[test]
    fn legacy_transpose_wide_is_out_of_bounds() {
        let m = mat(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(
            transpose_legacy(&m),
            Err(KernelError::LegacyOutOfBounds { nrows: 2, ncols: 3 })
        );
    }

    #[test]
    fn legacy_transpose_square_matches_corrected() {
        let m = mat(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(transpose_legacy(&m).unwrap(), transpose(&m));
    }

    #[test]
    fn identity_matvec() {
        let id = mat(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        let v: Vec<f64> = vec![5.0, 7.0];
        assert_eq!(matmul(&id, &v).unwrap(), vec![5.0, 7.0]);
    }

    #[test]
    fn matvec_rejects_wrong_length() {
        let m = mat(vec![vec![1.0, 2.0, 3.0]]);
        assert_eq!(
            matvec(&m, &[1.0, 2.0]),
            Err(KernelError::DimensionMismatch { op: "matvec", expected: 3, actual: 2 })
        );
    }

    #[test]
    fn vecmat_output_has_column_length() {
        // 2x3 matrix, row vector of length 2 -> length 3
        let m = mat(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let r = vecmat(&[1.0, 10.0], &m).unwrap();
        assert_eq!(r, vec![41.0, 52.0, 63.0]);
        assert!(vecmat(&[1.0, 2.0, 3.0], &m).is_err());
    }

    #[test]
    fn matmat_transpose_paired() {
        let a = mat(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        let b = transpose(&a);
        let c = matmul(&a, &b).unwrap();
        assert_eq!(c.shape(), (3, 3));
        assert_eq!(c.row(0), &[5.0, 11.0, 17.0]);
        assert_eq!(c.row(2), &[17.0, 39.0, 61.0]);
    }

    #[test]
    fn matmat_rejects_general_rectangular_shapes() {
        // 2x3 times 3x4 is a valid conventional product, but not accepted here
        let a = mat(vec![vec![1.0; 3]; 2]);
        let b = mat(vec![vec![1.0; 4]; 3]);
        assert_eq!(
            matmat(&a, &b),
            Err(KernelError::DimensionMismatch { op: "matmat (rhs cols)", expected: 2, actual: 4 })
        );
        let c = mat(vec![vec![1.0; 2]; 2]);
        assert_eq!(
            matmat(&a, &c),
            Err(KernelError::DimensionMismatch { op: "matmat (rhs rows)", expected: 3, actual: 2 })
        );
    }

    #[test]
    fn slice_operands_dispatch() {
        let x: &[f64] = &[1.0, 2.0];
        let y: &[f64] = &[3.0, 4.0];
        assert_eq!(matmul(x, y).unwrap(), 11.0);
        let m = mat(vec![vec![1.0, 1.0], vec![0.0, 1.0]]);
        assert_eq!(matmul(x, &m).unwrap(), vec![1.0, 3.0]);
        assert_eq!(matmul(&m, x).unwrap(), vec![3.0, 2.0]);
    }
}

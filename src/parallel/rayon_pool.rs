// rayon-based row-parallel kernels

use log::debug;
use num_traits::Float;
use rayon::prelude::*;

use crate::core::kernel::{check_matmat, check_matvec, check_vecmat, dot, vecmat};
use crate::error::Result;
use crate::matrix::RowMatrix;

/// Build the global rayon pool with `num_threads` workers (all logical CPUs
/// when `None`). The global pool can only be built once; later calls keep
/// the existing pool. Returns the pool size actually in use.
pub fn init_thread_pool(num_threads: Option<usize>) -> usize {
    let n = num_threads.unwrap_or_else(num_cpus::get);
    match rayon::ThreadPoolBuilder::new().num_threads(n).build_global() {
        Ok(()) => debug!("rayon global pool built with {} threads", n),
        Err(e) => debug!("keeping existing rayon global pool: {}", e),
    }
    rayon::current_num_threads()
}

/// Row-parallel `M · v`.
pub fn par_matvec<T>(m: &RowMatrix<T>, v: &[T]) -> Result<Vec<T>>
where
    T: Float + Send + Sync,
{
    check_matvec(m, v)?;
    m.rows().par_iter().map(|row| dot(row, v)).collect()
}

/// Column-parallel `v · M`. Each column still accumulates rows in ascending
/// order starting from zero.
pub fn par_vecmat<T>(v: &[T], m: &RowMatrix<T>) -> Result<Vec<T>>
where
    T: Float + Send + Sync,
{
    check_vecmat(v, m)?;
    Ok((0..m.ncols())
        .into_par_iter()
        .map(|j| {
            v.iter()
                .zip(m.rows())
                .fold(T::zero(), |acc, (&vi, row)| acc + vi * row[j])
        })
        .collect())
}

/// Row-parallel `M1 · M2` under the same shape contract as
/// [`crate::core::kernel::matmat`].
pub fn par_matmat<T>(m1: &RowMatrix<T>, m2: &RowMatrix<T>) -> Result<RowMatrix<T>>
where
    T: Float + Send + Sync,
{
    check_matmat(m1, m2)?;
    let rows = m1
        .rows()
        .par_iter()
        .map(|row| vecmat(row, m2))
        .collect::<Result<Vec<_>>>()?;
    Ok(RowMatrix::from_rows_unchecked(rows, m2.ncols()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kernel::{matmat, matvec, vecmat};

    fn sample(nrows: usize, ncols: usize) -> RowMatrix<f64> {
        let rows = (0..nrows)
            .map(|i| (0..ncols).map(|j| ((i * ncols + j) as f64 * 0.37).sin()).collect())
            .collect();
        RowMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn pool_reports_threads() {
        assert!(init_thread_pool(Some(2)) >= 1);
    }

    #[test]
    fn parallel_matches_serial_exactly() {
        let m = sample(37, 11);
        let x: Vec<f64> = (0..11).map(|i| (i as f64).cos()).collect();
        let y: Vec<f64> = (0..37).map(|i| (i as f64 * 0.5).cos()).collect();
        assert_eq!(par_matvec(&m, &x).unwrap(), matvec(&m, &x).unwrap());
        assert_eq!(par_vecmat(&y, &m).unwrap(), vecmat(&y, &m).unwrap());
        let mt = sample(11, 37);
        assert_eq!(par_matmat(&m, &mt).unwrap(), matmat(&m, &mt).unwrap());
    }

    #[test]
    fn parallel_checks_shapes() {
        let m = sample(4, 3);
        assert!(par_matvec(&m, &[1.0; 4]).is_err());
        assert!(par_vecmat(&[1.0; 3], &m).is_err());
        assert!(par_matmat(&m, &m).is_err());
    }
}

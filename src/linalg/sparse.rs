//! Sparse matrix types and operations.
//!
//! Thin wrappers around `sprs` CSC matrices: triplet construction plus the
//! matrix-vector products the projectors need. CSC is the format consumed
//! by the sparse direct solver.

use sprs::{CsMat, TriMat};

/// Sparse matrix in CSC format.
pub type SparseCsc = CsMat<f64>;

/// Build a sparse CSC matrix from (row, col, value) triplets.
pub fn from_triplets<I>(nrows: usize, ncols: usize, triplets: I) -> SparseCsc
where
    I: IntoIterator<Item = (usize, usize, f64)>,
{
    let mut tri = TriMat::new((nrows, ncols));
    for (i, j, v) in triplets {
        tri.add_triplet(i, j, v);
    }
    tri.to_csc()
}

/// Sparse matrix-vector product: y = alpha * A * x + beta * y
pub fn spmv(a: &SparseCsc, x: &[f64], y: &mut [f64], alpha: f64, beta: f64) {
    assert_eq!(a.cols(), x.len());
    assert_eq!(a.rows(), y.len());

    if beta == 0.0 {
        y.fill(0.0);
    } else if beta != 1.0 {
        for yi in y.iter_mut() {
            *yi *= beta;
        }
    }

    if alpha != 0.0 {
        for (val, (row, col)) in a.iter() {
            y[row] += alpha * (*val) * x[col];
        }
    }
}

/// Transpose-vector product: y = alpha * A^T * x + beta * y
///
/// For CSC storage, A^T x is computed by dotting each column against x.
pub fn spmv_transpose(a: &SparseCsc, x: &[f64], y: &mut [f64], alpha: f64, beta: f64) {
    assert_eq!(a.rows(), x.len());
    assert_eq!(a.cols(), y.len());

    if beta == 0.0 {
        y.fill(0.0);
    } else if beta != 1.0 {
        for yi in y.iter_mut() {
            *yi *= beta;
        }
    }

    if alpha != 0.0 {
        for col_idx in 0..a.cols() {
            if let Some(col) = a.outer_view(col_idx) {
                for (row_idx, &val) in col.iter() {
                    y[col_idx] += alpha * val * x[row_idx];
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_triplets() {
        let mat = from_triplets(2, 2, vec![(0, 0, 1.0), (1, 1, 2.0), (0, 1, 3.0)]);
        assert_eq!(mat.rows(), 2);
        assert_eq!(mat.cols(), 2);
        assert_eq!(mat.nnz(), 3);
    }

    #[test]
    fn test_spmv() {
        // [[1, 2], [3, 4]] * [1, 2] = [5, 11]
        let mat = from_triplets(
            2,
            2,
            vec![(0, 0, 1.0), (0, 1, 2.0), (1, 0, 3.0), (1, 1, 4.0)],
        );

        let mut y = vec![0.0; 2];
        spmv(&mat, &[1.0, 2.0], &mut y, 1.0, 0.0);
        assert!((y[0] - 5.0).abs() < 1e-12);
        assert!((y[1] - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_spmv_transpose() {
        // [[1, 2], [3, 4]]^T * [1, 2] = [7, 10]
        let mat = from_triplets(
            2,
            2,
            vec![(0, 0, 1.0), (0, 1, 2.0), (1, 0, 3.0), (1, 1, 4.0)],
        );

        let mut y = vec![0.0; 2];
        spmv_transpose(&mat, &[1.0, 2.0], &mut y, 1.0, 0.0);
        assert!((y[0] - 7.0).abs() < 1e-12);
        assert!((y[1] - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_spmv_accumulate() {
        let mat = from_triplets(2, 2, vec![(0, 0, 1.0), (1, 1, 1.0)]);

        let mut y = vec![1.0, 1.0];
        spmv(&mat, &[2.0, 3.0], &mut y, 2.0, 1.0);
        assert!((y[0] - 5.0).abs() < 1e-12);
        assert!((y[1] - 7.0).abs() < 1e-12);
    }
}

//! Linear operator storage and classification.
//!
//! A [`LinearOperator`] is immutable for the lifetime of the indicator
//! built on top of it. Construction classifies the matrix once — dense or
//! sparse storage, tall or wide shape — and caches its ∞-norm, which the
//! indicator later uses to scale the graph-residual tolerance.

use nalgebra::DMatrix;

use crate::error::ProxError;
use crate::linalg::sparse::{self, SparseCsc};

/// Shape classification of an m×n operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// More rows than columns (m > n).
    Tall,
    /// At least as many columns as rows (m ≤ n).
    Wide,
}

/// Matrix payload of a [`LinearOperator`].
#[derive(Debug, Clone)]
pub enum OperatorStorage {
    /// Dense column-major storage.
    Dense(DMatrix<f64>),
    /// Sparse CSC storage.
    Sparse(SparseCsc),
}

/// A fixed linear map together with its derived classification.
#[derive(Debug, Clone)]
pub struct LinearOperator {
    storage: OperatorStorage,
    m: usize,
    n: usize,
    shape: Shape,
    inf_norm: f64,
}

impl LinearOperator {
    /// Wrap a dense matrix.
    ///
    /// Rejects matrices with a zero dimension.
    pub fn dense(a: DMatrix<f64>) -> Result<Self, ProxError> {
        let (m, n) = (a.nrows(), a.ncols());
        Self::validate_dims(m, n)?;

        let mut inf_norm = 0.0f64;
        for i in 0..m {
            let row_sum: f64 = (0..n).map(|j| a[(i, j)].abs()).sum();
            inf_norm = inf_norm.max(row_sum);
        }

        Ok(Self {
            storage: OperatorStorage::Dense(a),
            m,
            n,
            shape: Self::classify(m, n),
            inf_norm,
        })
    }

    /// Wrap a sparse CSC matrix.
    pub fn sparse(a: SparseCsc) -> Result<Self, ProxError> {
        let (m, n) = (a.rows(), a.cols());
        Self::validate_dims(m, n)?;

        let mut row_sums = vec![0.0f64; m];
        for (val, (row, _)) in a.iter() {
            row_sums[row] += val.abs();
        }
        let inf_norm = row_sums.iter().fold(0.0f64, |acc, &s| acc.max(s));

        Ok(Self {
            storage: OperatorStorage::Sparse(a),
            m,
            n,
            shape: Self::classify(m, n),
            inf_norm,
        })
    }

    /// Treat a single vector as a 1×n row operator.
    pub fn row(v: &[f64]) -> Result<Self, ProxError> {
        Self::dense(DMatrix::from_row_slice(1, v.len(), v))
    }

    fn validate_dims(m: usize, n: usize) -> Result<(), ProxError> {
        if m == 0 || n == 0 {
            return Err(ProxError::InvalidOperator { rows: m, cols: n });
        }
        Ok(())
    }

    fn classify(m: usize, n: usize) -> Shape {
        if m > n {
            Shape::Tall
        } else {
            Shape::Wide
        }
    }

    /// Output dimension m (number of rows).
    pub fn nrows(&self) -> usize {
        self.m
    }

    /// Input dimension n (number of columns).
    pub fn ncols(&self) -> usize {
        self.n
    }

    /// Shape classification computed at construction.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Whether the operator is stored sparsely.
    pub fn is_sparse(&self) -> bool {
        matches!(self.storage, OperatorStorage::Sparse(_))
    }

    /// The ∞-norm (maximum absolute row sum) of the operator.
    pub fn inf_norm(&self) -> f64 {
        self.inf_norm
    }

    /// Access the underlying matrix payload.
    pub fn storage(&self) -> &OperatorStorage {
        &self.storage
    }

    /// Matrix-vector product y = A x.
    ///
    /// Lengths must already be validated by the caller.
    pub fn apply(&self, x: &[f64], y: &mut [f64]) {
        debug_assert_eq!(x.len(), self.n);
        debug_assert_eq!(y.len(), self.m);

        match &self.storage {
            OperatorStorage::Dense(a) => {
                for i in 0..self.m {
                    let mut acc = 0.0;
                    for j in 0..self.n {
                        acc += a[(i, j)] * x[j];
                    }
                    y[i] = acc;
                }
            }
            OperatorStorage::Sparse(a) => {
                sparse::spmv(a, x, y, 1.0, 0.0);
            }
        }
    }

    /// Transpose-vector product y = Aᵀ x.
    pub fn apply_transpose(&self, x: &[f64], y: &mut [f64]) {
        debug_assert_eq!(x.len(), self.m);
        debug_assert_eq!(y.len(), self.n);

        match &self.storage {
            OperatorStorage::Dense(a) => {
                for j in 0..self.n {
                    let mut acc = 0.0;
                    for i in 0..self.m {
                        acc += a[(i, j)] * x[i];
                    }
                    y[j] = acc;
                }
            }
            OperatorStorage::Sparse(a) => {
                sparse::spmv_transpose(a, x, y, 1.0, 0.0);
            }
        }
    }
}

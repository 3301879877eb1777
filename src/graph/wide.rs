//! Dense projector for wide operators (m ≤ n).
//!
//! Applying the matrix-inversion lemma to the normal equations turns the
//! n×n system into an m×m one:
//!
//! ```text
//! (I + AAᵀ) y = A (c + Aᵀ d),    x = c + Aᵀ (d − y)
//! ```
//!
//! so only the smaller dimension is ever factored; the dominant cost is
//! governed by min(m, n)³ instead of max(m, n)³. I + AAᵀ is symmetric
//! positive definite and Cholesky-factored once.

use nalgebra::{Cholesky, DMatrix, DVector, Dyn};

use super::cache::FactorizationCache;
use crate::error::ProxError;
use crate::operator::LinearOperator;

/// Wide-shape projection strategy backed by a cached Cholesky of I + AAᵀ.
#[derive(Debug)]
pub struct WideProjector {
    /// System I + AAᵀ (m×m), kept for the one-time factorization.
    gram: DMatrix<f64>,
    cache: FactorizationCache<Cholesky<f64, Dyn>>,
}

impl WideProjector {
    /// Build the m×m system from a dense operator; factorization is
    /// deferred to [`ensure_factorized`](Self::ensure_factorized).
    pub fn new(a: &DMatrix<f64>) -> Self {
        let m = a.nrows();
        let mut gram = a * a.transpose();
        for i in 0..m {
            gram[(i, i)] += 1.0;
        }

        Self {
            gram,
            cache: FactorizationCache::new(),
        }
    }

    /// Compute the Cholesky factorization if it has not been computed yet.
    pub fn ensure_factorized(&mut self) -> Result<(), ProxError> {
        let gram = &self.gram;
        self.cache
            .ensure(|| {
                Cholesky::new(gram.clone()).ok_or_else(|| {
                    ProxError::SingularOperator(
                        "system I + A A^T is not positive definite".into(),
                    )
                })
            })
            .map(|_| ())
    }

    /// Project (c, d) onto the graph of the operator, writing into (x, y).
    pub fn project(
        &self,
        op: &LinearOperator,
        c: &[f64],
        d: &[f64],
        x: &mut [f64],
        y: &mut [f64],
    ) -> Result<(), ProxError> {
        let chol = self.cache.factor().ok_or(ProxError::FactorizationMissing)?;
        let (m, n) = (op.nrows(), op.ncols());

        // w = c + Aᵀ d
        let mut w = vec![0.0; n];
        op.apply_transpose(d, &mut w);
        for (wj, &cj) in w.iter_mut().zip(c.iter()) {
            *wj += cj;
        }

        // Solve (I + AAᵀ) y = A w
        let mut rhs = vec![0.0; m];
        op.apply(&w, &mut rhs);
        let sol = chol.solve(&DVector::from_column_slice(&rhs));
        y.copy_from_slice(sol.as_slice());

        // x = c + Aᵀ (d − y)
        let mut resid = vec![0.0; m];
        for i in 0..m {
            resid[i] = d[i] - y[i];
        }
        op.apply_transpose(&resid, x);
        for (xj, &cj) in x.iter_mut().zip(c.iter()) {
            *xj += cj;
        }

        Ok(())
    }

    /// Number of times the factorization routine ran.
    pub fn factorization_count(&self) -> u64 {
        self.cache.count()
    }
}

//! Dense projector for tall operators (m > n).
//!
//! The projection of (c, d) onto {A x = y} solves the normal equations
//!
//! ```text
//! (I + AᵀA) x = c + Aᵀ d,    y = A x
//! ```
//!
//! With m > n, the n×n Gram system is the cheaper one to factor. The added
//! identity makes it symmetric positive definite regardless of the rank of
//! A, so a Cholesky factorization is computed once and every call performs
//! only a right-hand-side assembly and two triangular backsolves.

use nalgebra::{Cholesky, DMatrix, DVector, Dyn};

use super::cache::FactorizationCache;
use crate::error::ProxError;
use crate::operator::LinearOperator;

/// Tall-shape projection strategy backed by a cached Cholesky of I + AᵀA.
#[derive(Debug)]
pub struct TallProjector {
    /// Gram system I + AᵀA (n×n), kept for the one-time factorization.
    gram: DMatrix<f64>,
    cache: FactorizationCache<Cholesky<f64, Dyn>>,
}

impl TallProjector {
    /// Build the Gram system from a dense operator. The factorization
    /// itself is deferred to [`ensure_factorized`](Self::ensure_factorized).
    pub fn new(a: &DMatrix<f64>) -> Self {
        let n = a.ncols();
        let mut gram = a.transpose() * a;
        for i in 0..n {
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
                        "Gram system I + A^T A is not positive definite".into(),
                    )
                })
            })
            .map(|_| ())
    }

    /// Project (c, d) onto the graph of the operator, writing into (x, y).
    ///
    /// Read-only with respect to the cache; lengths are validated by the
    /// caller.
    pub fn project(
        &self,
        op: &LinearOperator,
        c: &[f64],
        d: &[f64],
        x: &mut [f64],
        y: &mut [f64],
    ) -> Result<(), ProxError> {
        let chol = self.cache.factor().ok_or(ProxError::FactorizationMissing)?;

        // rhs = c + Aᵀ d
        let mut rhs = vec![0.0; op.ncols()];
        op.apply_transpose(d, &mut rhs);
        for (r, &ci) in rhs.iter_mut().zip(c.iter()) {
            *r += ci;
        }

        let sol = chol.solve(&DVector::from_column_slice(&rhs));
        x.copy_from_slice(sol.as_slice());

        op.apply(x, y);
        Ok(())
    }

    /// Number of times the factorization routine ran.
    pub fn factorization_count(&self) -> u64 {
        self.cache.count()
    }
}

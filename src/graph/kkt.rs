//! Sparse projector via the augmented graph system.
//!
//! Forming AᵀA (or AAᵀ) for a sparse operator can destroy sparsity through
//! fill-in, so the sparse path factors the symmetric quasi-definite
//! augmented system instead:
//!
//! ```text
//! K = [ I   Aᵀ ]        K [x]   [c]
//!     [ A  −I  ]          [t] = [d]
//! ```
//!
//! which keeps the original sparsity pattern at factorization time. K is
//! LDLᵀ-factored once; each projection is a single backsolve. The first
//! solution block is x directly; y is recovered as A x so the graph
//! constraint holds to matvec rounding (the second block t equals A x − d
//! and is discarded).

use super::cache::FactorizationCache;
use crate::error::ProxError;
use crate::linalg::ldl::{self, LdlFactor};
use crate::linalg::sparse::SparseCsc;
use crate::operator::LinearOperator;
use sprs::TriMat;

/// Sparse projection strategy backed by a cached LDLᵀ of the augmented
/// system, used for sparse operators of any shape.
pub struct SparseProjector {
    n: usize,
    m: usize,
    /// Augmented system in CSC, full symmetric storage.
    kkt: SparseCsc,
    cache: FactorizationCache<LdlFactor>,
}

impl SparseProjector {
    /// Assemble the augmented system for a sparse operator. Factorization
    /// is deferred to [`ensure_factorized`](Self::ensure_factorized).
    pub fn new(a: &SparseCsc) -> Self {
        let (m, n) = (a.rows(), a.cols());

        Self {
            n,
            m,
            kkt: build_augmented(a),
            cache: FactorizationCache::new(),
        }
    }

    /// Compute the LDLᵀ factorization if it has not been computed yet.
    pub fn ensure_factorized(&mut self) -> Result<(), ProxError> {
        let kkt = &self.kkt;
        self.cache.ensure(|| ldl::factor_symmetric(kkt)).map(|_| ())
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
        let factor = self.cache.factor().ok_or(ProxError::FactorizationMissing)?;

        let mut rhs = vec![0.0; self.n + self.m];
        rhs[..self.n].copy_from_slice(c);
        rhs[self.n..].copy_from_slice(d);

        let sol = factor.solve(&rhs);
        x.copy_from_slice(&sol[..self.n]);

        op.apply(x, y);
        Ok(())
    }

    /// Number of times the factorization routine ran.
    pub fn factorization_count(&self) -> u64 {
        self.cache.count()
    }
}

/// Assemble K = [[I, Aᵀ], [A, −I]] in CSC with both triangles stored.
fn build_augmented(a: &SparseCsc) -> SparseCsc {
    let (m, n) = (a.rows(), a.cols());
    let dim = n + m;
    let mut tri = TriMat::new((dim, dim));

    for i in 0..n {
        tri.add_triplet(i, i, 1.0);
    }
    for (val, (row, col)) in a.iter() {
        // A[row, col] lands at K[n + row, col]; its mirror at K[col, n + row].
        tri.add_triplet(n + row, col, *val);
        tri.add_triplet(col, n + row, *val);
    }
    for i in 0..m {
        tri.add_triplet(n + i, n + i, -1.0);
    }

    tri.to_csc()
}

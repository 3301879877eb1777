//! Shape-specialized graph projection strategies.
//!
//! Exactly one strategy is instantiated per operator at construction time
//! and kept for the operator's lifetime:
//!
//! - [`TallProjector`] — dense, m > n: Cholesky of I + AᵀA
//! - [`WideProjector`] — dense, m ≤ n: Cholesky of I + AAᵀ
//! - [`SparseProjector`] — sparse, any shape: LDLᵀ of the augmented system
//!
//! All three implement the same contract: a one-time cached factorization
//! (`ensure_factorized`) followed by read-only `project` calls.

pub mod cache;
pub mod kkt;
pub mod tall;
pub mod wide;

pub use cache::FactorizationCache;
pub use kkt::SparseProjector;
pub use tall::TallProjector;
pub use wide::WideProjector;

use crate::error::ProxError;
use crate::operator::{LinearOperator, OperatorStorage, Shape};

/// Closed set of projection strategies, selected once at construction.
pub enum GraphProjector {
    /// Dense operator with m > n.
    Tall(TallProjector),
    /// Dense operator with m ≤ n.
    Wide(WideProjector),
    /// Sparse operator, regardless of shape.
    Sparse(SparseProjector),
}

impl GraphProjector {
    /// Pick and build the strategy matching the operator's classification.
    pub fn for_operator(op: &LinearOperator) -> Self {
        match (op.storage(), op.shape()) {
            (OperatorStorage::Sparse(a), _) => Self::Sparse(SparseProjector::new(a)),
            (OperatorStorage::Dense(a), Shape::Tall) => Self::Tall(TallProjector::new(a)),
            (OperatorStorage::Dense(a), Shape::Wide) => Self::Wide(WideProjector::new(a)),
        }
    }

    /// Populate the factorization cache; idempotent.
    pub fn ensure_factorized(&mut self) -> Result<(), ProxError> {
        match self {
            Self::Tall(p) => p.ensure_factorized(),
            Self::Wide(p) => p.ensure_factorized(),
            Self::Sparse(p) => p.ensure_factorized(),
        }
    }

    /// Project (c, d) onto the graph of `op`, writing into (x, y).
    pub fn project(
        &self,
        op: &LinearOperator,
        c: &[f64],
        d: &[f64],
        x: &mut [f64],
        y: &mut [f64],
    ) -> Result<(), ProxError> {
        match self {
            Self::Tall(p) => p.project(op, c, d, x, y),
            Self::Wide(p) => p.project(op, c, d, x, y),
            Self::Sparse(p) => p.project(op, c, d, x, y),
        }
    }

    /// Number of times the underlying factorization routine ran.
    pub fn factorization_count(&self) -> u64 {
        match self {
            Self::Tall(p) => p.factorization_count(),
            Self::Wide(p) => p.factorization_count(),
            Self::Sparse(p) => p.factorization_count(),
        }
    }
}

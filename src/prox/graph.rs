//! Indicator of the graph of a linear operator.
//!
//! `GraphIndicator` is the façade consumed by the outer optimization loop.
//! Construction classifies the operator, instantiates exactly one
//! shape-specialized projector, and eagerly populates its factorization
//! cache; afterwards every call is read-only with respect to the cache, so
//! a constructed indicator can be shared across threads freely.
//!
//! Two calling conventions are supported: the pair form `project(c, d)`
//! returning `(x, y)`, and a concatenated single-vector form (first n
//! entries are the x/c part, next m the y/d part) through the
//! [`ProxOperator`] trait plus the split/merge helpers.

use super::traits::ProxOperator;
use crate::error::ProxError;
use crate::graph::GraphProjector;
use crate::operator::LinearOperator;

/// Indicator function of {(x, y) : A x = y} with cached-factorization
/// projection.
pub struct GraphIndicator {
    op: LinearOperator,
    projector: GraphProjector,
}

impl GraphIndicator {
    /// Residual tolerance scale for [`evaluate`](Self::evaluate): the
    /// membership test accepts ‖Ax − y‖∞ up to
    /// `1e3 · ε_f64 · max(1, ‖A‖∞) · max(1, ‖x‖∞)`.
    ///
    /// A fixed small multiple of machine epsilon scaled by operator and
    /// argument magnitude; the set has measure zero, so an exact floating
    /// point comparison would reject points produced by the projection
    /// itself.
    pub const RESIDUAL_TOL_SCALE: f64 = 1e3 * f64::EPSILON;

    /// Build the indicator for a fixed operator.
    ///
    /// Classifies the operator, builds the matching projector, and
    /// performs the one-time factorization up front (single-threaded), so
    /// `project` never mutates shared state afterwards. Reports
    /// `SingularOperator` here if the derived system cannot be factored.
    pub fn new(op: LinearOperator) -> Result<Self, ProxError> {
        let mut projector = GraphProjector::for_operator(&op);
        projector.ensure_factorized()?;
        Ok(Self { op, projector })
    }

    /// The operator this indicator was built for.
    pub fn operator(&self) -> &LinearOperator {
        &self.op
    }

    /// Output dimension m.
    pub fn nrows(&self) -> usize {
        self.op.nrows()
    }

    /// Input dimension n.
    pub fn ncols(&self) -> usize {
        self.op.ncols()
    }

    /// How many times the underlying factorization routine has run.
    /// Stays at 1 across any number of projection calls.
    pub fn factorization_count(&self) -> u64 {
        self.projector.factorization_count()
    }

    /// Evaluate the indicator at (x, y): 0 if A x = y within tolerance,
    /// +∞ otherwise (including mismatched lengths, which cannot lie in
    /// the graph).
    pub fn evaluate(&self, x: &[f64], y: &[f64]) -> f64 {
        if x.len() != self.op.ncols() || y.len() != self.op.nrows() {
            return f64::INFINITY;
        }

        let mut ax = vec![0.0; self.op.nrows()];
        self.op.apply(x, &mut ax);

        let resid = ax
            .iter()
            .zip(y.iter())
            .map(|(&ai, &yi)| (ai - yi).abs())
            .fold(0.0f64, f64::max);

        let x_inf = x.iter().map(|v| v.abs()).fold(0.0f64, f64::max);
        let tol = Self::RESIDUAL_TOL_SCALE * self.op.inf_norm().max(1.0) * x_inf.max(1.0);

        if resid <= tol {
            0.0
        } else {
            f64::INFINITY
        }
    }

    /// Project (c, d) onto the graph, returning (x, y).
    ///
    /// `_gamma` is the conventional proximal scaling argument; projection
    /// onto a set is invariant under it, so it is accepted and ignored.
    pub fn project(
        &self,
        c: &[f64],
        d: &[f64],
        _gamma: f64,
    ) -> Result<(Vec<f64>, Vec<f64>), ProxError> {
        let (m, n) = (self.op.nrows(), self.op.ncols());
        if c.len() != n {
            return Err(ProxError::DimensionMismatch {
                expected: n,
                actual: c.len(),
            });
        }
        if d.len() != m {
            return Err(ProxError::DimensionMismatch {
                expected: m,
                actual: d.len(),
            });
        }

        let mut x = vec![0.0; n];
        let mut y = vec![0.0; m];
        self.projector.project(&self.op, c, d, &mut x, &mut y)?;
        Ok((x, y))
    }

    /// Split a concatenated (x, y) buffer into its x and y parts without
    /// copying.
    pub fn split_concatenated<'a>(&self, v: &'a [f64]) -> Result<(&'a [f64], &'a [f64]), ProxError> {
        let (m, n) = (self.op.nrows(), self.op.ncols());
        if v.len() != m + n {
            return Err(ProxError::DimensionMismatch {
                expected: m + n,
                actual: v.len(),
            });
        }
        Ok(v.split_at(n))
    }

    /// Stack (x, y) into a single concatenated vector.
    pub fn merge_concatenated(&self, x: &[f64], y: &[f64]) -> Result<Vec<f64>, ProxError> {
        let (m, n) = (self.op.nrows(), self.op.ncols());
        if x.len() != n {
            return Err(ProxError::DimensionMismatch {
                expected: n,
                actual: x.len(),
            });
        }
        if y.len() != m {
            return Err(ProxError::DimensionMismatch {
                expected: m,
                actual: y.len(),
            });
        }

        let mut v = Vec::with_capacity(n + m);
        v.extend_from_slice(x);
        v.extend_from_slice(y);
        Ok(v)
    }
}

impl ProxOperator for GraphIndicator {
    fn dim(&self) -> usize {
        self.op.nrows() + self.op.ncols()
    }

    fn evaluate(&self, v: &[f64]) -> f64 {
        match self.split_concatenated(v) {
            Ok((x, y)) => GraphIndicator::evaluate(self, x, y),
            Err(_) => f64::INFINITY,
        }
    }

    fn prox(&self, v: &[f64], _gamma: f64, out: &mut [f64]) -> Result<(), ProxError> {
        let n = self.op.ncols();
        let (c, d) = self.split_concatenated(v)?;
        if out.len() != v.len() {
            return Err(ProxError::DimensionMismatch {
                expected: v.len(),
                actual: out.len(),
            });
        }

        let (x, y) = out.split_at_mut(n);
        self.projector.project(&self.op, c, d, x, y)
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn is_set(&self) -> bool {
        true
    }

    fn is_cone(&self) -> bool {
        // The graph is a linear subspace, hence a cone.
        true
    }
}

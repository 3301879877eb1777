//! Nonpositive orthant indicator.
//!
//! The indicator of K = {x : x_i ≤ 0 for all i}. Its proximal mapping is
//! the coordinate-wise clamp min(x_i, 0) — an O(size) operation with no
//! factorization — which makes this the simplest component honoring the
//! shared proximal-operator contract.

use super::traits::ProxOperator;
use crate::error::ProxError;

/// Indicator of the nonpositive orthant.
#[derive(Debug, Clone)]
pub struct NonPosIndicator {
    dim: usize,
}

impl NonPosIndicator {
    /// Membership tolerance: x_i ≤ tol * max(1, ‖x‖∞)
    const FEAS_TOL: f64 = 1e-12;

    /// Create the indicator for vectors of the given dimension.
    pub fn new(dim: usize) -> Self {
        assert!(dim > 0, "nonpositive orthant must have positive dimension");
        Self { dim }
    }

    /// Projection onto the orthant, allocating the result.
    pub fn project(&self, x: &[f64]) -> Result<Vec<f64>, ProxError> {
        let mut out = vec![0.0; self.dim];
        self.prox(x, 1.0, &mut out)?;
        Ok(out)
    }

    fn check_len(&self, len: usize) -> Result<(), ProxError> {
        if len != self.dim {
            return Err(ProxError::DimensionMismatch {
                expected: self.dim,
                actual: len,
            });
        }
        Ok(())
    }
}

impl ProxOperator for NonPosIndicator {
    fn dim(&self) -> usize {
        self.dim
    }

    fn evaluate(&self, v: &[f64]) -> f64 {
        if v.len() != self.dim {
            return f64::INFINITY;
        }

        let v_max = v.iter().map(|x| x.abs()).fold(0.0f64, f64::max);
        let tol = Self::FEAS_TOL * v_max.max(1.0);
        if v.iter().all(|&x| x <= tol) {
            0.0
        } else {
            f64::INFINITY
        }
    }

    fn prox(&self, v: &[f64], _gamma: f64, out: &mut [f64]) -> Result<(), ProxError> {
        self.check_len(v.len())?;
        self.check_len(out.len())?;

        for (o, &x) in out.iter_mut().zip(v.iter()) {
            *o = x.min(0.0);
        }
        Ok(())
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn is_set(&self) -> bool {
        true
    }

    fn is_cone(&self) -> bool {
        true
    }
}

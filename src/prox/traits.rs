//! Shared proximal-operator contract.
//!
//! Every indicator component in this crate exposes the same two-operation
//! interface: evaluate the function at a point, and compute the proximal
//! mapping (for an indicator, the projection). The methods operate on
//! contiguous slices and are designed to be allocation-light so they can
//! sit inside the inner loop of a splitting method.

use crate::error::ProxError;

/// Proximal-operator interface honored by all indicator components.
///
/// # Scaling parameter
///
/// `prox` accepts the step-size/scaling argument `gamma` conventionally
/// passed by proximal-operator call sites. For a set indicator the
/// proximal mapping is the projection regardless of `gamma`, so indicator
/// implementations accept the argument for interface uniformity and ignore
/// it; it must never be misapplied.
pub trait ProxOperator: Send + Sync {
    /// Dimension of the operator's domain.
    fn dim(&self) -> usize;

    /// Evaluate the function at `v`.
    ///
    /// For indicators this is 0.0 on the set and `f64::INFINITY` outside.
    fn evaluate(&self, v: &[f64]) -> f64;

    /// Compute the proximal mapping of `v` into `out`.
    fn prox(&self, v: &[f64], gamma: f64, out: &mut [f64]) -> Result<(), ProxError>;

    /// Whether the function is convex.
    fn is_convex(&self) -> bool;

    /// Whether the function is a set indicator (zero/infinity valued).
    fn is_set(&self) -> bool;

    /// Whether the underlying set is a cone (closed under nonnegative
    /// scaling).
    fn is_cone(&self) -> bool;
}

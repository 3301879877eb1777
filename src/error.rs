//! Error taxonomy shared by all operators in the crate.
//!
//! Every failure stems from a structural property of the operator or from
//! caller input, never from a transient condition, so nothing is retried
//! internally and no partial results are returned.

use thiserror::Error;

/// Errors reported by operator construction and projection calls.
#[derive(Error, Debug)]
pub enum ProxError {
    /// The operator has a zero row or column dimension.
    #[error("invalid operator: {rows}x{cols} matrix has a zero dimension")]
    InvalidOperator {
        /// Row count of the rejected operator
        rows: usize,
        /// Column count of the rejected operator
        cols: usize,
    },

    /// The derived matrix could not be factored.
    ///
    /// For the dense paths this means the Gram system was not positive
    /// definite; for the sparse path it means the augmented system was
    /// structurally singular or produced a zero/non-finite pivot. The
    /// condition is surfaced as-is: masking it with regularization would
    /// change the mathematical answer.
    #[error("singular operator: {0}")]
    SingularOperator(String),

    /// A query vector's length does not match the operator dimensions.
    #[error("dimension mismatch: expected length {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected vector length
        expected: usize,
        /// Actual vector length
        actual: usize,
    },

    /// A projection was requested before the factorization cache was
    /// populated. Cannot occur through `GraphIndicator`, which factors
    /// eagerly at construction.
    #[error("factorization has not been computed yet")]
    FactorizationMissing,
}

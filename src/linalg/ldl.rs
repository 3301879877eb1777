//! Sparse symmetric-indefinite LDLᵀ factorization.
//!
//! Wraps `sprs-ldl` for the quasi-definite augmented systems built by the
//! sparse graph projector. The factorization computes L and D such that
//! K = L D Lᵀ, where L is unit lower triangular and D is diagonal with
//! entries of either sign (unlike Cholesky).

use sprs::{FillInReduction, SymmetryCheck};
use sprs_ldl::{Ldl, LdlNumeric};

use super::sparse::SparseCsc;
use crate::error::ProxError;

/// Numeric LDLᵀ factorization of a sparse symmetric matrix.
pub type LdlFactor = LdlNumeric<f64, usize>;

/// Factor a sparse symmetric matrix K = L D Lᵀ.
///
/// The input must contain the full symmetric matrix (both triangles); the
/// symmetry check is skipped because every call site assembles K symmetric
/// by construction. Reverse Cuthill-McKee ordering limits fill-in.
///
/// Quasi-definite matrices (such as the augmented graph system) always
/// admit this factorization in exact arithmetic, so a failed or degenerate
/// pivot indicates a structurally singular operator and is reported as
/// [`ProxError::SingularOperator`]. No regularization is applied: bumping
/// pivots would silently change the projection.
pub fn factor_symmetric(mat: &SparseCsc) -> Result<LdlFactor, ProxError> {
    let ldl = Ldl::new()
        .fill_in_reduction(FillInReduction::ReverseCuthillMcKee)
        .check_symmetry(SymmetryCheck::DontCheckSymmetry)
        .numeric(mat.view())
        .map_err(|e| ProxError::SingularOperator(e.to_string()))?;

    for (i, &di) in ldl.d().iter().enumerate() {
        if di == 0.0 || !di.is_finite() {
            return Err(ProxError::SingularOperator(format!(
                "pivot D[{}] = {} in LDL^T factorization",
                i, di
            )));
        }
    }

    Ok(ldl)
}

//! Linear algebra support: sparse matrix helpers and the sparse LDLᵀ
//! factorization used by the augmented-system projector.

pub mod ldl;
pub mod sparse;

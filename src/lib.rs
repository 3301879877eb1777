//! Prox-core: proximal and projection operators for splitting methods
//!
//! This library provides the indicator-function building blocks used inside
//! iterative convex-optimization algorithms (Douglas-Rachford, ADMM and
//! friends). The centerpiece is the Euclidean projection onto the **graph of
//! a linear operator**: for a fixed m×n map `A` and a query point `(c, d)`,
//!
//! ```text
//! project(c, d) = argmin { ‖x − c‖² + ‖y − d‖²  :  A x = y }
//! ```
//!
//! Because `A` is fixed for an entire optimization run, the required matrix
//! factorization is computed exactly once and every subsequent call performs
//! only a backsolve. Three strategies are selected at construction:
//!
//! - **Tall dense** (m > n): Cholesky of the n×n Gram system `I + AᵀA`
//! - **Wide dense** (m ≤ n): Cholesky of the m×m system `I + AAᵀ`
//!   (matrix-inversion-lemma reformulation, so only min(m, n) is factored)
//! - **Sparse** (any shape): one LDLᵀ factorization of the augmented
//!   quasi-definite system `[[I, Aᵀ], [A, −I]]`, which preserves sparsity
//!   instead of densifying a Gram matrix
//!
//! # Example
//!
//! ```
//! use prox_core::{GraphIndicator, LinearOperator};
//! use nalgebra::DMatrix;
//!
//! let a = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
//! let ind = GraphIndicator::new(LinearOperator::dense(a)?)?;
//!
//! let (x, y) = ind.project(&[1.0, 1.0], &[0.0, 0.0, 0.0], 1.0)?;
//! assert!((x[0] - 0.25).abs() < 1e-12);
//! assert_eq!(ind.evaluate(&x, &y), 0.0);
//! # Ok::<(), prox_core::ProxError>(())
//! ```

#![warn(clippy::all)]

pub mod error;
pub mod graph;
pub mod linalg;
pub mod operator;
pub mod prox;

pub use error::ProxError;
pub use operator::{LinearOperator, Shape};
pub use prox::{GraphIndicator, NonPosIndicator, ProxOperator};

//! Proximal-operator components.
//!
//! The shared contract ([`ProxOperator`]), the graph-of-an-operator
//! indicator façade ([`GraphIndicator`]), and the elementwise
//! nonpositive-orthant indicator ([`NonPosIndicator`]).

pub mod graph;
pub mod nonpos;
pub mod traits;

pub use graph::GraphIndicator;
pub use nonpos::NonPosIndicator;
pub use traits::ProxOperator;

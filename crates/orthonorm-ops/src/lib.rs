#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for orthogonalization operations.
///
/// Defines [`OrthoError`] for precondition failures. Numerical degeneracies are never
/// reported as errors.
pub mod error;

/// Gram-Schmidt orthogonalization of matrix columns.
///
/// Provides [`gram_schmidt::orthogonalize`] and its configurable, destination-passing
/// and type-promoting variants.
pub mod gram_schmidt;

/// Slice kernels shared by the orthogonalization and metric code.
mod kernels;

/// Checks on orthogonalized matrices: Gram matrix, orthogonality defect, rank.
pub mod metrics;

pub use error::OrthoError;
pub use gram_schmidt::{
    orthogonalize, orthogonalize_as, orthogonalize_into, orthogonalize_with,
    OrthogonalizeConfig, DEFAULT_EPSILON,
};

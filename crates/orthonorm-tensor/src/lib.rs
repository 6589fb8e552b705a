#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `orthonorm-tensor` provides the data model used by the orthogonalization routines:
//! an owned, row-major [`Matrix`] and cheap strided [`ColumnView`]s into it.
//!
//! Construction is the only place where input is validated. Every constructor
//! rejects data that does not describe a rectangular two-dimensional matrix, so the
//! numeric code downstream never has to.
//!
//! # Quick Start
//!
//! ```rust
//! use orthonorm_tensor::Matrix;
//!
//! // columns (1, 0) and (1, 1)
//! let u = Matrix::from_rows(vec![vec![1.0, 1.0], vec![0.0, 1.0]]).unwrap();
//! assert_eq!(u.shape, [2, 2]);
//!
//! for (j, col) in u.columns().enumerate() {
//!     assert_eq!(col.len(), 2);
//!     assert_eq!(col.get(0), Some(&1.0), "column {j}");
//! }
//!
//! // integer input promoted to floating point
//! let ints = Matrix::from_shape_vec([2, 1], vec![3i32, 4]).unwrap();
//! let floats = ints.cast::<f64>();
//! assert_eq!(floats.as_slice(), &[3.0, 4.0]);
//! ```

/// Matrix module containing the main matrix type and error types.
pub mod matrix;

/// Serde module for JSON/other format serialization and deserialization.
///
/// Enabled with the `serde` feature.
#[cfg(feature = "serde")]
pub mod serde;

/// View module containing non-owning column views.
pub mod view;

pub use crate::matrix::{Matrix, MatrixError};
pub use crate::view::{ColumnView, Columns};

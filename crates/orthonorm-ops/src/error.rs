use orthonorm_tensor::MatrixError;
use thiserror::Error;

/// An error type for orthogonalization operations.
#[derive(Error, Debug, PartialEq)]
pub enum OrthoError {
    /// The destination matrix does not have the shape of the source.
    #[error("Shape mismatch: {0:?} != {1:?}")]
    ShapeMismatch([usize; 2], [usize; 2]),

    /// The epsilon threshold is negative, NaN or infinite.
    #[error("Invalid epsilon {0}: the threshold must be finite and non-negative")]
    InvalidEpsilon(f64),

    /// A column index is greater than or equal to the number of columns.
    #[error("Column {index} out of bounds for a matrix with {cols} columns")]
    ColumnOutOfBounds {
        /// The requested column
        index: usize,
        /// Number of columns in the matrix
        cols: usize,
    },

    /// Matrix error
    #[error("Error with the matrix: {0}")]
    MatrixError(#[from] MatrixError),
}

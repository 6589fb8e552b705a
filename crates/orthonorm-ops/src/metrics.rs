use num_traits::Float;
use orthonorm_tensor::Matrix;

use crate::error::OrthoError;
use crate::kernels::{dot_kernel, norm_kernel};

/// Compute the inner product of columns `i` and `j` of `m`.
///
/// # Errors
///
/// Returns [`OrthoError::ColumnOutOfBounds`] if either index is out of range.
///
/// # Example
///
/// ```
/// use orthonorm_tensor::Matrix;
/// use orthonorm_ops::metrics::dot_columns;
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(dot_columns(&m, 0, 1).unwrap(), 14.0);
/// ```
pub fn dot_columns<T: Float>(m: &Matrix<T>, i: usize, j: usize) -> Result<T, OrthoError> {
    let cols = m.cols();
    for index in [i, j] {
        if index >= cols {
            return Err(OrthoError::ColumnOutOfBounds { index, cols });
        }
    }
    let a = m.column(i)?.to_vec();
    let b = m.column(j)?.to_vec();
    Ok(dot_kernel(&a, &b))
}

/// Euclidean norm of every column, left to right.
pub fn column_norms<T: Float>(m: &Matrix<T>) -> Vec<T> {
    m.columns().map(|c| norm_kernel(&c.to_vec())).collect()
}

/// Compute the Gram matrix `Mᵀ M`, of shape `[cols, cols]`.
pub fn gram_matrix<T: Float>(m: &Matrix<T>) -> Matrix<T> {
    let cols = m.cols();
    let columns: Vec<Vec<T>> = m.columns().map(|c| c.to_vec()).collect();
    Matrix::from_shape_fn([cols, cols], |[i, j]| dot_kernel(&columns[i], &columns[j]))
}

/// Largest absolute inner product between two distinct columns.
///
/// Zero for matrices with fewer than two columns.
pub fn orthogonality_defect<T: Float>(m: &Matrix<T>) -> T {
    let columns: Vec<Vec<T>> = m.columns().map(|c| c.to_vec()).collect();
    let mut defect = T::zero();
    for (i, a) in columns.iter().enumerate() {
        for b in columns.iter().skip(i + 1) {
            defect = defect.max(dot_kernel(a, b).abs());
        }
    }
    defect
}

/// Check that the columns of `m` are pairwise orthogonal and each has norm 1 or 0.
///
/// # Arguments
///
/// * `m` - Typically the output of [`crate::gram_schmidt::orthogonalize`].
/// * `tol` - Tolerance for both the pairwise inner products and the norms.
///
/// # Example
///
/// ```
/// use orthonorm_tensor::Matrix;
/// use orthonorm_ops::{gram_schmidt::orthogonalize, metrics::is_orthonormal};
///
/// let u = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert!(!is_orthonormal(&u, 1e-9));
/// assert!(is_orthonormal(&orthogonalize(&u), 1e-9));
/// ```
pub fn is_orthonormal<T: Float>(m: &Matrix<T>, tol: T) -> bool {
    let unit_or_zero = column_norms(m)
        .into_iter()
        .all(|n| (n - T::one()).abs() < tol || n < tol);
    unit_or_zero && orthogonality_defect(m) < tol
}

/// Number of columns whose norm exceeds `tol`.
///
/// On an orthogonalized matrix this is the numerical rank of the original input.
pub fn numerical_rank<T: Float>(m: &Matrix<T>, tol: T) -> usize {
    column_norms(m).into_iter().filter(|&n| n > tol).count()
}

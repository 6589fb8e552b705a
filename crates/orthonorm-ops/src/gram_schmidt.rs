use num_traits::{AsPrimitive, Float};
use orthonorm_tensor::Matrix;

use crate::error::OrthoError;
use crate::kernels::{div_scalar_kernel, dot_kernel, norm_kernel, sub_scaled_kernel};

/// Norm at or below which a vector is treated as zero.
pub const DEFAULT_EPSILON: f64 = 1e-15;

/// Parameters for [`orthogonalize_with`] and [`orthogonalize_into`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthogonalizeConfig<T> {
    epsilon: T,
}

impl<T: Float> OrthogonalizeConfig<T> {
    /// Create a config with a custom threshold.
    ///
    /// # Errors
    ///
    /// Returns [`OrthoError::InvalidEpsilon`] if `epsilon` is negative, NaN or infinite.
    pub fn new(epsilon: T) -> Result<Self, OrthoError> {
        if !epsilon.is_finite() || epsilon < T::zero() {
            return Err(OrthoError::InvalidEpsilon(
                epsilon.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(Self { epsilon })
    }

    /// Columns whose norm is at or below this value are never divided by: they are
    /// skipped as projection sources and left unnormalized in the output.
    pub fn epsilon(&self) -> T {
        self.epsilon
    }
}

impl<T: Float> Default for OrthogonalizeConfig<T> {
    fn default() -> Self {
        Self {
            epsilon: T::from(DEFAULT_EPSILON).unwrap_or_else(T::min_positive_value),
        }
    }
}

/// Orthogonalize the columns of `src` with the Gram-Schmidt process.
///
/// Columns are processed left to right. Each column has its projection onto every
/// previously orthogonalized column removed and is then scaled to unit length. A column
/// that depends linearly on earlier ones reduces to a (near) zero vector and is returned
/// unnormalized.
///
/// `src` is never modified; the result is a new matrix of the same shape. Matrices with
/// zero rows or zero columns are returned as empty matrices of the same shape.
///
/// # Arguments
///
/// * `src` - The matrix whose columns are orthogonalized.
///
/// # Returns
///
/// A matrix whose nonzero columns are orthonormal.
///
/// # Example
///
/// ```
/// use orthonorm_tensor::Matrix;
/// use orthonorm_ops::gram_schmidt::orthogonalize;
///
/// let u = Matrix::from_rows(vec![vec![1.0f64, 1.0], vec![0.0, 1.0]]).unwrap();
/// let v = orthogonalize(&u);
/// assert!((v.get([0, 0]).unwrap() - 1.0).abs() < 1e-9);
/// assert!(v.get([0, 1]).unwrap().abs() < 1e-9);
/// assert!((v.get([1, 1]).unwrap() - 1.0).abs() < 1e-9);
/// ```
pub fn orthogonalize<T: Float>(src: &Matrix<T>) -> Matrix<T> {
    orthogonalize_with(src, &OrthogonalizeConfig::default())
}

/// Same as [`orthogonalize`] with a caller-provided threshold.
pub fn orthogonalize_with<T: Float>(src: &Matrix<T>, config: &OrthogonalizeConfig<T>) -> Matrix<T> {
    let mut dst = Matrix::zeros(src.shape);
    orthogonalize_unchecked(src, &mut dst, config.epsilon());
    dst
}

/// Orthogonalize the columns of `src` into a preallocated `dst`.
///
/// Every element of `dst` is overwritten.
///
/// # Errors
///
/// Returns [`OrthoError::ShapeMismatch`] if `dst` does not have the shape of `src`.
pub fn orthogonalize_into<T: Float>(
    src: &Matrix<T>,
    dst: &mut Matrix<T>,
    config: &OrthogonalizeConfig<T>,
) -> Result<(), OrthoError> {
    if src.shape != dst.shape {
        return Err(OrthoError::ShapeMismatch(src.shape, dst.shape));
    }
    orthogonalize_unchecked(src, dst, config.epsilon());
    Ok(())
}

/// Promote `src` to the floating point type `F` and orthogonalize it.
///
/// # Example
///
/// ```
/// use orthonorm_tensor::Matrix;
/// use orthonorm_ops::gram_schmidt::orthogonalize_as;
///
/// let u = Matrix::from_rows(vec![vec![3i64, 0], vec![4, 0]]).unwrap();
/// let v = orthogonalize_as::<f64, _>(&u);
/// assert!((v.get([0, 0]).unwrap() - 0.6).abs() < 1e-12);
/// assert!((v.get([1, 0]).unwrap() - 0.8).abs() < 1e-12);
/// assert_eq!(v.column(1).unwrap().to_vec(), vec![0.0, 0.0]);
/// ```
pub fn orthogonalize_as<F, T>(src: &Matrix<T>) -> Matrix<F>
where
    F: Float + 'static,
    T: AsPrimitive<F>,
{
    orthogonalize(&src.map(|&x| x.as_()))
}

/// Shapes must already agree.
fn orthogonalize_unchecked<T: Float>(src: &Matrix<T>, dst: &mut Matrix<T>, epsilon: T) {
    let [rows, cols] = src.shape;
    if rows == 0 || cols == 0 {
        return;
    }

    let u = src.to_column_major();
    let mut v = vec![T::zero(); u.len()];
    gram_schmidt_column_major(&u, &mut v, rows, cols, epsilon);

    let out = dst.as_slice_mut();
    for i in 0..rows {
        for j in 0..cols {
            out[i * cols + j] = v[j * rows + i];
        }
    }
}

/// Gram-Schmidt on column-major buffers; `u` is read-only, `v` receives the result.
///
/// `rows` must be nonzero.
fn gram_schmidt_column_major<T: Float>(u: &[T], v: &mut [T], rows: usize, cols: usize, epsilon: T) {
    for i in 0..cols {
        let u_i = &u[i * rows..(i + 1) * rows];
        let (done, rest) = v.split_at_mut(i * rows);
        let v_i = &mut rest[..rows];
        v_i.copy_from_slice(u_i);

        for (j, v_j) in done.chunks_exact(rows).enumerate() {
            let norm_j = norm_kernel(v_j);
            if norm_j <= epsilon {
                log::debug!(
                    "column {}: skipping degenerate projection source {} (norm {:e})",
                    i,
                    j,
                    norm_j.to_f64().unwrap_or(f64::NAN)
                );
                continue;
            }
            // projected against the original column, not the running residual
            let proj = dot_kernel(v_j, u_i) / (norm_j * norm_j);
            sub_scaled_kernel(v_i, proj, v_j);
        }

        let norm_i = norm_kernel(v_i);
        if norm_i > epsilon {
            div_scalar_kernel(v_i, norm_i);
        } else {
            log::debug!(
                "column {}: linearly dependent on previous columns, left unnormalized (norm {:e})",
                i,
                norm_i.to_f64().unwrap_or(f64::NAN)
            );
        }
        log::trace!("column {} done", i);
    }
}

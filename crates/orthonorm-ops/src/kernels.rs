use num_traits::Float;

/// Computes the dot product of two equally long slices.
///
/// Callers pass two columns of the same matrix, so the lengths always agree.
#[inline]
pub(crate) fn dot_kernel<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&a_val, &b_val)| acc + a_val * b_val)
}

/// Euclidean norm of a slice.
///
/// The entries are scaled by the largest magnitude before squaring, so the result is
/// finite whenever the norm itself is representable.
#[inline]
pub(crate) fn norm_kernel<T: Float>(a: &[T]) -> T {
    let scale = a.iter().fold(T::zero(), |acc, &x| acc.max(x.abs()));
    if scale == T::zero() || scale.is_infinite() {
        return scale;
    }
    let sum = a.iter().fold(T::zero(), |acc, &x| {
        let y = x / scale;
        acc + y * y
    });
    scale * sum.sqrt()
}

/// `dst -= alpha * src`
#[inline]
pub(crate) fn sub_scaled_kernel<T: Float>(dst: &mut [T], alpha: T, src: &[T]) {
    debug_assert_eq!(dst.len(), src.len());
    dst.iter_mut()
        .zip(src.iter())
        .for_each(|(d, &s)| *d = *d - alpha * s);
}

/// `dst /= divisor`, element-wise.
#[inline]
pub(crate) fn div_scalar_kernel<T: Float>(dst: &mut [T], divisor: T) {
    dst.iter_mut().for_each(|d| *d = *d / divisor);
}

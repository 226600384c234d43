//! Lossless-enough casts from integer counts into the working float type.

// External dependencies
use num_traits::Float;

/// Convert an element count to `T`.
///
/// Counts are always representable (possibly rounded) in `f32` and `f64`, so
/// the NaN fallback is unreachable for the float types this crate supports.
#[inline]
pub(crate) fn count<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}

/// Convert an integer exponent to `T`.
#[inline]
pub(crate) fn exponent<T: Float>(n: i32) -> T {
    T::from(n).unwrap_or_else(T::nan)
}

/// The constant `2` in `T`.
#[inline]
pub(crate) fn two<T: Float>() -> T {
    T::one() + T::one()
}

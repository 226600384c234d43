//! Max-magnitude scaling for overflow-safe reductions.
//!
//! ## Purpose
//!
//! Sums of very large (or very small) magnitudes can overflow (or underflow)
//! before the final division that brings them back into range. The helpers
//! here divide every term by the largest magnitude first, reduce, then scale
//! back, the same stabilisation the L2/Lp norms use.
//!
//! ## Invariants
//!
//! * `stable_mean(&[x; n]) == x` for finite `x`.
//! * An all-zero input reduces to exactly 0 without dividing.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::cast::count;

/// Largest absolute value in `values` (0 for an empty slice).
#[inline]
pub fn max_magnitude<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &x| acc.max(x.abs()))
}

/// Σxᵢ computed as `m · Σ(xᵢ/m)`.
pub fn stable_sum<T: Float>(values: &[T]) -> T {
    let m = max_magnitude(values);
    if m == T::zero() || !m.is_finite() {
        return values.iter().fold(T::zero(), |acc, &x| acc + x);
    }
    values.iter().fold(T::zero(), |acc, &x| acc + x / m) * m
}

/// Arithmetic mean computed as `m · (Σ(xᵢ/m) / n)`.
///
/// Returns 0 for an empty slice; callers validate the length.
pub fn stable_mean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let n: T = count(values.len());
    let m = max_magnitude(values);
    if m == T::zero() {
        return T::zero();
    }
    if !m.is_finite() {
        return values.iter().fold(T::zero(), |acc, &x| acc + x) / n;
    }
    let scaled_sum = values.iter().fold(T::zero(), |acc, &x| acc + x / m);
    (scaled_sum / n) * m
}

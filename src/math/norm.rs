//! Norm strategies for combining independent error contributions.
//!
//! ## Purpose
//!
//! Every propagation formula in the crate ends by collapsing a list of
//! per-input error contributions into one magnitude. This module provides the
//! rules for doing so (L1, L2, Lp) and their numerically stable evaluation.
//!
//! ## Design notes
//!
//! * **Max-scaling**: L2 and Lp divide every term by the largest magnitude `m`
//!   before raising to a power, then multiply the result back by `m`, so
//!   `x²` never overflows or underflows on its own.
//! * **Small cases**: L2 for up to three terms uses `hypot` directly.
//!
//! ## Invariants
//!
//! * The result is non-negative and depends only on the magnitudes.
//! * The result is symmetric under permutation of the input.
//! * `norm(k·xs) = |k|·norm(xs)`.
//! * The empty input has norm 0.
//!
//! ## Non-goals
//!
//! * This module does not support weighted or correlated combinations.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::scaling::max_magnitude;

// ============================================================================
// Norm Strategy Enum
// ============================================================================

/// Rule for collapsing several independent error contributions into one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NormStrategy<T = f64> {
    /// Sum of magnitudes: Σ|xᵢ|
    L1,

    /// Euclidean: √(Σxᵢ²)
    #[default]
    L2,

    /// Generalised: (Σ|xᵢ|^p)^(1/p). `p <= 0` yields 0.
    Lp(T),
}

impl<T: Float> NormStrategy<T> {
    /// Combine `values` under this strategy.
    #[inline]
    pub fn apply(&self, values: &[T]) -> T {
        match *self {
            NormStrategy::L1 => norm1(values),
            NormStrategy::L2 => norm2(values),
            NormStrategy::Lp(p) => normp(values, p),
        }
    }
}

// ============================================================================
// Norm Functions
// ============================================================================

/// Combine `values` under `strategy`.
#[inline]
pub fn norm<T: Float>(values: &[T], strategy: NormStrategy<T>) -> T {
    strategy.apply(values)
}

/// L1 norm: Σ|xᵢ|.
#[inline]
pub fn norm1<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &x| acc + x.abs())
}

/// L2 norm: √(Σxᵢ²), evaluated without intermediate overflow.
pub fn norm2<T: Float>(values: &[T]) -> T {
    match *values {
        [] => T::zero(),
        [x] => x.abs(),
        [x, y] => x.hypot(y),
        [x, y, z] => x.hypot(y).hypot(z),
        _ => {
            let m = max_magnitude(values);
            if m == T::zero() {
                return T::zero();
            }
            if !m.is_finite() {
                return m;
            }
            let sum_sq = values.iter().fold(T::zero(), |acc, &x| {
                let scaled = x / m;
                acc + scaled * scaled
            });
            sum_sq.sqrt() * m
        }
    }
}

/// Lp norm: (Σ|xᵢ|^p)^(1/p), evaluated without intermediate overflow.
///
/// Returns 0 for `p <= 0` and for an all-zero input.
pub fn normp<T: Float>(values: &[T], p: T) -> T {
    if p <= T::zero() || values.is_empty() {
        return T::zero();
    }

    let m = max_magnitude(values);
    if m == T::zero() {
        return T::zero();
    }
    if !m.is_finite() {
        return m;
    }

    let sum_pow = values
        .iter()
        .fold(T::zero(), |acc, &x| acc + (x.abs() / m).powf(p));
    sum_pow.powf(p.recip()) * m
}

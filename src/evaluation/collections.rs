//! List helpers over uncertain values.
//!
//! ## Purpose
//!
//! This module selects extremes from slices of [`UncertainValue`] and
//! dispatches generic n-ary sums and products to the `NormSummable` /
//! `NormProductable` primitives.
//!
//! ## Design notes
//!
//! * **Ties**: Selection compares central values only; on a tie the candidate
//!   with the larger absolute error wins, so the more conservative value is
//!   kept regardless of input order.
//!
//! ## Non-goals
//!
//! * NaN central values are not ordered; they never replace a candidate.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::additive::UncertainValue;
use crate::math::algebra::{NormProductable, NormSummable};
use crate::math::norm::NormStrategy;
use crate::primitives::errors::UncertainError;

// ============================================================================
// Selection
// ============================================================================

/// Element with the largest central value.
pub fn max_by_value<T: Float>(values: &[UncertainValue<T>]) -> Result<UncertainValue<T>, UncertainError> {
    select(values, |candidate, best| candidate > best)
}

/// Element with the smallest central value.
pub fn min_by_value<T: Float>(values: &[UncertainValue<T>]) -> Result<UncertainValue<T>, UncertainError> {
    select(values, |candidate, best| candidate < best)
}

/// Largest element by magnitude, returned as its absolute value.
pub fn abs_max<T: Float>(values: &[UncertainValue<T>]) -> Result<UncertainValue<T>, UncertainError> {
    let magnitudes: Vec<UncertainValue<T>> = values.iter().map(UncertainValue::absolute).collect();
    max_by_value(&magnitudes)
}

fn select<T: Float>(
    values: &[UncertainValue<T>],
    better: impl Fn(T, T) -> bool,
) -> Result<UncertainValue<T>, UncertainError> {
    let (first, rest) = values
        .split_first()
        .ok_or(UncertainError::EmptyCollection)?;

    Ok(rest.iter().fold(*first, |best, candidate| {
        let (c, b) = (candidate.value(), best.value());
        if better(c, b) || (c == b && candidate.absolute_error() > best.absolute_error()) {
            *candidate
        } else {
            best
        }
    }))
}

// ============================================================================
// Generic Reduction
// ============================================================================

/// N-ary sum of any [`NormSummable`] type.
#[inline]
pub fn sum<V: NormSummable>(values: &[V], strategy: NormStrategy<V::Scalar>) -> V {
    V::sum_with(values, strategy)
}

/// N-ary product of any [`NormProductable`] type.
#[inline]
pub fn product<V: NormProductable>(values: &[V], strategy: NormStrategy<V::Scalar>) -> V {
    V::product_with(values, strategy)
}

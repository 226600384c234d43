//! Statistical estimators consistent with pairwise error propagation.
//!
//! ## Purpose
//!
//! This module provides the arithmetic mean with its sample standard
//! deviation as error, the same for already-uncertain inputs, and the
//! geometric mean as a log-domain value.
//!
//! ## Design notes
//!
//! * **Stability**: Means divide by the largest magnitude `m` before summing.
//!   Deviations are formed in the same scaled space (`xᵢ/m − x̄/m`), so a raw
//!   `xᵢ − x̄` that would overflow is never computed; `m` is multiplied back
//!   only after the norm.
//! * **Two paths**: The scalar mean/deviation has a direct path and a SIMD
//!   path ([`Backend`]). Both evaluate the same scaled formula.
//! * **Consistency**: The mean of uncertain values is one L2 `sum` divided by
//!   the count, which is what chaining `adding` pairwise produces.
//!
//! ## Key concepts
//!
//! * **Sample standard deviation**: `s = ‖x − x̄‖₂ / √(n − 1)`.
//! * **Geometric mean**: `sign · exp(mean(ln|xᵢ|))`, whose log-magnitude is
//!   exactly the arithmetic mean of the logs (value and error).
//!
//! ## Invariants
//!
//! * Estimators requiring a spread reject fewer than two elements.
//! * Non-finite scalar input is rejected with `NonFinite`, and so is a spread
//!   that is itself too large to represent.
//!
//! ## Non-goals
//!
//! * Weighted estimators and online (streaming) accumulation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::additive::UncertainValue;
use crate::algorithms::multiplicative::MultiplicativeUncertainValue;
use crate::math::norm::{NormStrategy, norm2};
use crate::math::reduce::FloatReduce;
use crate::math::scaling::{max_magnitude, stable_mean};
use crate::primitives::backend::Backend;
use crate::primitives::cast::count;
use crate::primitives::errors::UncertainError;
use crate::primitives::validator::Validator;

// ============================================================================
// Scalar Inputs
// ============================================================================

/// Mean of `values` with the sample standard deviation as its error.
///
/// Requires at least two finite elements.
pub fn arithmetic_mean<T: FloatReduce>(
    values: &[T],
    backend: Backend,
) -> Result<UncertainValue<T>, UncertainError> {
    Validator::validate_min_len(values.len(), 2)?;
    Validator::validate_all_finite(values, "arithmetic mean")?;

    let (mean, deviation) = match backend {
        Backend::Scalar => mean_and_deviation_direct(values),
        Backend::Simd => mean_and_deviation_simd(values),
    };
    Validator::validate_result(mean, deviation, "arithmetic mean")?;
    Ok(UncertainValue::new(mean, deviation))
}

/// Sample standard deviation of `values`.
///
/// Requires at least two finite elements.
pub fn sample_standard_deviation<T: FloatReduce>(values: &[T]) -> Result<T, UncertainError> {
    arithmetic_mean(values, Backend::Scalar).map(|m| m.absolute_error())
}

/// Geometric mean of `values` as a log-domain value.
///
/// Requires at least two finite, non-zero elements of one sign.
pub fn geometric_mean<T: FloatReduce>(
    values: &[T],
) -> Result<MultiplicativeUncertainValue<T>, UncertainError> {
    Validator::validate_min_len(values.len(), 2)?;
    Validator::validate_all_finite(values, "geometric mean")?;
    let signum = Validator::validate_uniform_sign(values)?;

    let logs: Vec<T> = values.iter().map(|x| x.abs().ln()).collect();
    let log_mean = arithmetic_mean(&logs, Backend::Scalar)?;
    Ok(MultiplicativeUncertainValue::from_log_abs(signum, log_mean))
}

fn mean_and_deviation_direct<T: Float>(values: &[T]) -> (T, T) {
    let n: T = count(values.len());
    let mean = stable_mean(values);
    let m = max_magnitude(values);
    if m == T::zero() {
        return (mean, T::zero());
    }

    let center = mean / m;
    let deviations: Vec<T> = values.iter().map(|&x| x / m - center).collect();
    (mean, norm2(&deviations) / (n - T::one()).sqrt() * m)
}

fn mean_and_deviation_simd<T: FloatReduce>(values: &[T]) -> (T, T) {
    let n: T = count(values.len());

    let m = T::max_magnitude_simd(values);
    if m == T::zero() {
        return (T::zero(), T::zero());
    }
    let mean = (T::scaled_sum_simd(values, m) / n) * m;

    // Scaled deviations are bounded by 2; `md` rescales them once more.
    let center = mean / m;
    let md = T::max_deviation_simd(values, m, center);
    if md == T::zero() {
        return (mean, T::zero());
    }
    let spread = T::scaled_sum_sq_dev_simd(values, m, center, md).sqrt() * md;
    (mean, spread / (n - T::one()).sqrt() * m)
}

// ============================================================================
// Uncertain Inputs
// ============================================================================

/// Mean of uncertain values: one L2 sum divided by the count.
pub fn arithmetic_mean_uncertain<T: Float>(
    values: &[UncertainValue<T>],
) -> Result<UncertainValue<T>, UncertainError> {
    Validator::validate_non_empty(values.len())?;
    UncertainValue::sum(values, NormStrategy::L2).dividing_constant(count(values.len()))
}

/// Sample standard deviation of uncertain values.
///
/// The value is the scalar estimator on the central values. The error is the
/// error of the deviation functional: each deviation `xᵢ − x̄` is scaled by
/// `1/√(n − 1)`, multiplied by that element's error, and the contributions
/// combine under L2. Deviations are taken relative to the largest central
/// magnitude, like the scalar estimator.
pub fn sample_standard_deviation_uncertain<T: FloatReduce>(
    values: &[UncertainValue<T>],
) -> Result<UncertainValue<T>, UncertainError> {
    Validator::validate_min_len(values.len(), 2)?;

    let centrals: Vec<T> = values.iter().map(UncertainValue::value).collect();
    let estimate = arithmetic_mean(&centrals, Backend::Scalar)?;
    let m = max_magnitude(&centrals);
    if m == T::zero() {
        return Ok(UncertainValue::new(estimate.absolute_error(), T::zero()));
    }
    let center = estimate.value() / m;
    let scale = (count::<T>(values.len()) - T::one()).sqrt().recip();

    let contributions: Vec<T> = values
        .iter()
        .map(|v| (v.value() / m - center) * scale * v.absolute_error())
        .collect();
    let error = norm2(&contributions) * m;
    Validator::validate_finite(error, "sample standard deviation")?;
    Ok(UncertainValue::new(estimate.absolute_error(), error))
}

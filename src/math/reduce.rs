//! Scalar and SIMD reductions for the estimators.
//!
//! ## Purpose
//!
//! This module provides the vectorised building blocks of the fast
//! mean/standard-deviation path: max-magnitude search, scaled sums, and scaled
//! sums of squared deviations. Each is implemented for `f64` on `f64x2` lanes
//! and for `f32` on `f32x4` lanes, with a scalar tail for the remainder.
//!
//! ## Design notes
//!
//! * **Same formula**: The reductions evaluate exactly the scaled expressions
//!   the direct path uses; only the summation order differs, so results agree
//!   to a few ulps times the input length.
//! * **Scale first**: Deviations are formed as `xᵢ/scale − center` with
//!   `center` already scaled, so no raw `xᵢ − x̄` is ever computed.
//!
//! ## Non-goals
//!
//! * This module does not select a backend; callers do.

// External dependencies
use num_traits::Float;
use wide::{f32x4, f64x2};

// ============================================================================
// Trait
// ============================================================================

/// Float types with vectorised reductions.
pub trait FloatReduce: Float + 'static {
    /// max |xᵢ|.
    fn max_magnitude_simd(values: &[Self]) -> Self;

    /// max |xᵢ/scale − center|.
    fn max_deviation_simd(values: &[Self], scale: Self, center: Self) -> Self;

    /// Σ(xᵢ / scale).
    fn scaled_sum_simd(values: &[Self], scale: Self) -> Self;

    /// Σ((xᵢ/scale − center) / norm)².
    fn scaled_sum_sq_dev_simd(values: &[Self], scale: Self, center: Self, norm: Self) -> Self;
}

// ============================================================================
// Implementations
// ============================================================================

macro_rules! impl_float_reduce {
    ($t:ty, $lane:ty, $width:expr) => {
        impl FloatReduce for $t {
            fn max_magnitude_simd(values: &[$t]) -> $t {
                let mut chunks = values.chunks_exact($width);
                let mut acc = <$lane>::splat(0.0);
                for chunk in &mut chunks {
                    let v = <$lane>::new(core::array::from_fn(|k| chunk[k]));
                    acc = acc.max(v.abs());
                }
                let tail = chunks
                    .remainder()
                    .iter()
                    .fold(0.0, |m: $t, &x| m.max(x.abs()));
                acc.to_array().into_iter().fold(tail, <$t>::max)
            }

            fn max_deviation_simd(values: &[$t], scale: $t, center: $t) -> $t {
                let s = <$lane>::splat(scale);
                let c = <$lane>::splat(center);
                let mut chunks = values.chunks_exact($width);
                let mut acc = <$lane>::splat(0.0);
                for chunk in &mut chunks {
                    let v = <$lane>::new(core::array::from_fn(|k| chunk[k]));
                    acc = acc.max((v / s - c).abs());
                }
                let tail = chunks
                    .remainder()
                    .iter()
                    .fold(0.0, |m: $t, &x| m.max((x / scale - center).abs()));
                acc.to_array().into_iter().fold(tail, <$t>::max)
            }

            fn scaled_sum_simd(values: &[$t], scale: $t) -> $t {
                let s = <$lane>::splat(scale);
                let mut chunks = values.chunks_exact($width);
                let mut acc = <$lane>::splat(0.0);
                for chunk in &mut chunks {
                    let v = <$lane>::new(core::array::from_fn(|k| chunk[k]));
                    acc += v / s;
                }
                let mut total = acc.reduce_add();
                for &x in chunks.remainder() {
                    total += x / scale;
                }
                total
            }

            fn scaled_sum_sq_dev_simd(values: &[$t], scale: $t, center: $t, norm: $t) -> $t {
                let s = <$lane>::splat(scale);
                let c = <$lane>::splat(center);
                let r = <$lane>::splat(norm);
                let mut chunks = values.chunks_exact($width);
                let mut acc = <$lane>::splat(0.0);
                for chunk in &mut chunks {
                    let v = <$lane>::new(core::array::from_fn(|k| chunk[k]));
                    let d = (v / s - c) / r;
                    acc += d * d;
                }
                let mut total = acc.reduce_add();
                for &x in chunks.remainder() {
                    let d = (x / scale - center) / norm;
                    total += d * d;
                }
                total
            }
        }
    };
}

impl_float_reduce!(f64, f64x2, 2);
impl_float_reduce!(f32, f32x4, 4);

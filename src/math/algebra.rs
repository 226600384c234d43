//! N-ary algebra traits shared by both value representations.
//!
//! ## Purpose
//!
//! Generic reduction code (sums, products, means) is written once against
//! these two traits. The additive representation implements both; the
//! multiplicative representation cannot represent zero and so only
//! implements [`NormProductable`]. Plain floats implement both with the norm
//! parameter ignored, since they carry no error.
//!
//! ## Key concepts
//!
//! * **Identity**: `zero()` / `one()` are what the empty reduction returns.
//! * **Canonical primitive**: Binary operations on implementors must reduce to
//!   the n-ary primitive applied to two elements.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::norm::NormStrategy;

// ============================================================================
// Traits
// ============================================================================

/// Types with an n-ary sum parameterised by a norm strategy.
pub trait NormSummable: Sized {
    /// Scalar type the norm strategy is expressed in.
    type Scalar: Float;

    /// Additive identity.
    fn zero() -> Self;

    /// Sum of `values`, combining errors under `strategy`.
    fn sum_with(values: &[Self], strategy: NormStrategy<Self::Scalar>) -> Self;
}

/// Types with an n-ary product parameterised by a norm strategy.
pub trait NormProductable: Sized {
    /// Scalar type the norm strategy is expressed in.
    type Scalar: Float;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Product of `values`, combining errors under `strategy`.
    fn product_with(values: &[Self], strategy: NormStrategy<Self::Scalar>) -> Self;
}

// ============================================================================
// Plain floats
// ============================================================================

macro_rules! impl_exact_algebra {
    ($($t:ty),*) => {$(
        impl NormSummable for $t {
            type Scalar = $t;

            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn sum_with(values: &[Self], _strategy: NormStrategy<$t>) -> Self {
                values.iter().sum()
            }
        }

        impl NormProductable for $t {
            type Scalar = $t;

            #[inline]
            fn one() -> Self {
                1.0
            }

            #[inline]
            fn product_with(values: &[Self], _strategy: NormStrategy<$t>) -> Self {
                values.iter().product()
            }
        }
    )*};
}

impl_exact_algebra!(f32, f64);

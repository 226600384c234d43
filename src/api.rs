//! High-level API for uncertain arithmetic and statistics.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the public type
//! re-exports and extension traits that put the estimators and list helpers
//! directly on slices.
//!
//! ## Design notes
//!
//! * **Ergonomic**: `[f64]` and `[UncertainValue<f64>]` gain
//!   `.arithmetic_mean()` and friends without wrapper types.
//! * **Explicit**: The backend and norm strategy are always per call.
//! * **Type-Safe**: Slices of plain floats and slices of uncertain values get
//!   separate traits, so the two never compete for a method name.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::evaluation::collections;
use crate::evaluation::statistics;
use crate::math::reduce::FloatReduce;

// Publicly re-exported types
pub use crate::algorithms::additive::UncertainValue;
pub use crate::algorithms::multiplicative::MultiplicativeUncertainValue;
pub use crate::evaluation::bounds::{Bounded, BoundedValue};
pub use crate::math::algebra::{NormProductable, NormSummable};
pub use crate::math::norm::{NormStrategy, norm, norm1, norm2, normp};
pub use crate::primitives::backend::Backend;
pub use crate::primitives::errors::UncertainError;
pub use crate::primitives::signum::{Sign, Signum};

// ============================================================================
// Plain Float Slices
// ============================================================================

/// Estimators over slices of plain floats.
pub trait FloatStatistics {
    /// Float type of the elements.
    type Scalar;

    /// Mean with the sample standard deviation as error (direct path).
    fn arithmetic_mean(&self) -> Result<UncertainValue<Self::Scalar>, UncertainError>;

    /// Mean with the sample standard deviation as error on `backend`.
    fn arithmetic_mean_with(
        &self,
        backend: Backend,
    ) -> Result<UncertainValue<Self::Scalar>, UncertainError>;

    /// Sample standard deviation.
    fn sample_standard_deviation(&self) -> Result<Self::Scalar, UncertainError>;

    /// Geometric mean as a log-domain value.
    fn geometric_mean(&self) -> Result<MultiplicativeUncertainValue<Self::Scalar>, UncertainError>;
}

macro_rules! impl_float_statistics {
    ($($t:ty),*) => {$(
        impl FloatStatistics for [$t] {
            type Scalar = $t;

            #[inline]
            fn arithmetic_mean(&self) -> Result<UncertainValue<$t>, UncertainError> {
                statistics::arithmetic_mean(self, Backend::Scalar)
            }

            #[inline]
            fn arithmetic_mean_with(
                &self,
                backend: Backend,
            ) -> Result<UncertainValue<$t>, UncertainError> {
                statistics::arithmetic_mean(self, backend)
            }

            #[inline]
            fn sample_standard_deviation(&self) -> Result<$t, UncertainError> {
                statistics::sample_standard_deviation(self)
            }

            #[inline]
            fn geometric_mean(&self) -> Result<MultiplicativeUncertainValue<$t>, UncertainError> {
                statistics::geometric_mean(self)
            }
        }
    )*};
}

impl_float_statistics!(f32, f64);

// ============================================================================
// Uncertain Value Slices
// ============================================================================

/// Estimators and list helpers over slices of uncertain values.
pub trait UncertainStatistics<T> {
    /// Mean: one L2 sum divided by the count.
    fn arithmetic_mean(&self) -> Result<UncertainValue<T>, UncertainError>;

    /// Sample standard deviation with propagated error.
    fn sample_standard_deviation(&self) -> Result<UncertainValue<T>, UncertainError>;

    /// N-ary sum under `strategy`.
    fn uncertain_sum(&self, strategy: NormStrategy<T>) -> UncertainValue<T>;

    /// N-ary product under `strategy`.
    fn uncertain_product(&self, strategy: NormStrategy<T>) -> UncertainValue<T>;

    /// Element with the largest value; ties keep the larger error.
    fn max_by_value(&self) -> Result<UncertainValue<T>, UncertainError>;

    /// Element with the smallest value; ties keep the larger error.
    fn min_by_value(&self) -> Result<UncertainValue<T>, UncertainError>;

    /// Largest magnitude, as an absolute value.
    fn abs_max(&self) -> Result<UncertainValue<T>, UncertainError>;

    /// Value/bound pairs for every element.
    fn bounded_values(&self) -> Vec<BoundedValue<T>>;
}

impl<T: FloatReduce> UncertainStatistics<T> for [UncertainValue<T>] {
    #[inline]
    fn arithmetic_mean(&self) -> Result<UncertainValue<T>, UncertainError> {
        statistics::arithmetic_mean_uncertain(self)
    }

    #[inline]
    fn sample_standard_deviation(&self) -> Result<UncertainValue<T>, UncertainError> {
        statistics::sample_standard_deviation_uncertain(self)
    }

    #[inline]
    fn uncertain_sum(&self, strategy: NormStrategy<T>) -> UncertainValue<T> {
        collections::sum(self, strategy)
    }

    #[inline]
    fn uncertain_product(&self, strategy: NormStrategy<T>) -> UncertainValue<T> {
        collections::product(self, strategy)
    }

    #[inline]
    fn max_by_value(&self) -> Result<UncertainValue<T>, UncertainError> {
        collections::max_by_value(self)
    }

    #[inline]
    fn min_by_value(&self) -> Result<UncertainValue<T>, UncertainError> {
        collections::min_by_value(self)
    }

    #[inline]
    fn abs_max(&self) -> Result<UncertainValue<T>, UncertainError> {
        collections::abs_max(self)
    }

    fn bounded_values(&self) -> Vec<BoundedValue<T>> {
        self.iter().map(|v| v.bounds()).collect()
    }
}

/// Value/bound pairs for a slice of log-domain values.
pub fn bounded_values<T: Float>(values: &[MultiplicativeUncertainValue<T>]) -> Vec<BoundedValue<T>> {
    values.iter().map(|v| v.bounds()).collect()
}

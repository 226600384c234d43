//! Additive uncertain values.
//!
//! ## Purpose
//!
//! This module provides [`UncertainValue`], a central value paired with a
//! non-negative absolute error, and its arithmetic. Errors of independent
//! inputs are combined with a caller-selected [`NormStrategy`].
//!
//! ## Design notes
//!
//! * **N-ary first**: `sum` and `product` are the canonical primitives. The
//!   binary operations are exactly these primitives applied to two elements.
//! * **Constants**: Operations with a plain scalar have a single error source
//!   and need no norm parameter.
//! * **Zero**: Zero is representable, so reciprocal and division are fallible.
//!
//! ## Key concepts
//!
//! * **Sum**: value = Σvᵢ, error = norm(eᵢ).
//! * **Product**: value = Πvᵢ, relative error = norm(eᵢ/|vᵢ|).
//!
//! ## Invariants
//!
//! * `absolute_error >= 0`; the sign of a supplied error is discarded.
//! * Every operation returns a new value; nothing is mutated in place.
//!
//! ## Non-goals
//!
//! * This module does not track correlations between operands.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use core::iter::{Product, Sum};
use core::ops::{Add, Div, Mul, Neg, Sub};
use num_traits::Float;

// Internal dependencies
use crate::math::algebra::{NormProductable, NormSummable};
use crate::math::norm::NormStrategy;
use crate::primitives::errors::UncertainError;

// ============================================================================
// UncertainValue
// ============================================================================

/// A central value with a non-negative absolute error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UncertainValue<T = f64> {
    value: T,
    absolute_error: T,
}

impl<T: Float> UncertainValue<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a value from its central value and absolute error.
    ///
    /// The sign of `absolute_error` is discarded.
    #[inline]
    pub fn new(value: T, absolute_error: T) -> Self {
        Self {
            value,
            absolute_error: absolute_error.abs(),
        }
    }

    /// Create a value whose absolute error is `|value · relative_error|`.
    #[inline]
    pub fn with_relative_error(value: T, relative_error: T) -> Self {
        Self::new(value, value * relative_error)
    }

    /// Create a value carrying both an absolute and a relative error
    /// contribution; the two are added.
    #[inline]
    pub fn with_combined_errors(value: T, absolute_error: T, relative_error: T) -> Self {
        Self::new(value, absolute_error.abs() + (value * relative_error).abs())
    }

    /// An exact value (zero error).
    #[inline]
    pub fn exact(value: T) -> Self {
        Self::new(value, T::zero())
    }

    /// Additive identity `0 ± 0`.
    #[inline]
    pub fn zero() -> Self {
        Self::exact(T::zero())
    }

    /// Multiplicative identity `1 ± 0`.
    #[inline]
    pub fn one() -> Self {
        Self::exact(T::one())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Central value.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Absolute error, always `>= 0`.
    #[inline]
    pub fn absolute_error(&self) -> T {
        self.absolute_error
    }

    /// Relative error `absolute_error / |value|`.
    ///
    /// 0 when the error is 0 (including `0 ± 0`); `+∞` for a zero value with a
    /// non-zero error.
    #[inline]
    pub fn relative_error(&self) -> T {
        if self.absolute_error == T::zero() {
            T::zero()
        } else if self.value == T::zero() {
            T::infinity()
        } else {
            self.absolute_error / self.value.abs()
        }
    }

    /// True when the central value is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value == T::zero()
    }

    // ========================================================================
    // N-ary Primitives
    // ========================================================================

    /// Sum of `values`; errors combine under `strategy`.
    ///
    /// The empty sum is `0 ± 0`.
    pub fn sum(values: &[Self], strategy: NormStrategy<T>) -> Self {
        let value = values.iter().fold(T::zero(), |acc, v| acc + v.value);
        let errors: Vec<T> = values.iter().map(|v| v.absolute_error).collect();
        Self::new(value, strategy.apply(&errors))
    }

    /// Product of `values`; relative errors combine under `strategy`.
    ///
    /// The empty product is `1 ± 0`. When a factor is exactly zero the
    /// relative errors are unbounded, so the error is built from the partial
    /// derivatives `|Π_{j≠i} vⱼ| · eᵢ` instead; for non-zero factors both
    /// forms are identical.
    pub fn product(values: &[Self], strategy: NormStrategy<T>) -> Self {
        let value = values.iter().fold(T::one(), |acc, v| acc * v.value);

        if values.iter().all(|v| !v.is_zero()) {
            let relative: Vec<T> = values.iter().map(Self::relative_error).collect();
            return Self::with_relative_error(value, strategy.apply(&relative));
        }

        let contributions: Vec<T> = (0..values.len())
            .map(|i| {
                let others = values
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .fold(T::one(), |acc, (_, v)| acc * v.value);
                others.abs() * values[i].absolute_error
            })
            .collect();
        Self::new(value, strategy.apply(&contributions))
    }

    // ========================================================================
    // Binary Operations
    // ========================================================================

    /// `self + other`.
    #[inline]
    pub fn adding(&self, other: &Self, strategy: NormStrategy<T>) -> Self {
        Self::sum(&[*self, *other], strategy)
    }

    /// `self - other`.
    #[inline]
    pub fn subtracting(&self, other: &Self, strategy: NormStrategy<T>) -> Self {
        Self::sum(&[*self, other.negative()], strategy)
    }

    /// `self · other`.
    #[inline]
    pub fn multiplying(&self, other: &Self, strategy: NormStrategy<T>) -> Self {
        Self::product(&[*self, *other], strategy)
    }

    /// `self / other`; fails when `other` is exactly zero.
    #[inline]
    pub fn dividing(&self, other: &Self, strategy: NormStrategy<T>) -> Result<Self, UncertainError> {
        Ok(self.multiplying(&other.reciprocal()?, strategy))
    }

    /// `1 / self`, with the relative error preserved.
    pub fn reciprocal(&self) -> Result<Self, UncertainError> {
        if self.is_zero() {
            return Err(UncertainError::DivisionByZero);
        }
        let value = self.value.recip();
        if !value.is_finite() {
            return Err(UncertainError::NonFinite("reciprocal"));
        }
        Ok(Self::with_relative_error(value, self.relative_error()))
    }

    // ========================================================================
    // Constant Operations
    // ========================================================================

    /// `self + c`; the error is unchanged.
    #[inline]
    pub fn adding_constant(&self, c: T) -> Self {
        Self::new(self.value + c, self.absolute_error)
    }

    /// `self - c`; the error is unchanged.
    #[inline]
    pub fn subtracting_constant(&self, c: T) -> Self {
        Self::new(self.value - c, self.absolute_error)
    }

    /// `self · c`; the error scales by `|c|`.
    #[inline]
    pub fn multiplying_constant(&self, c: T) -> Self {
        Self::new(self.value * c, self.absolute_error * c.abs())
    }

    /// `self / c`; the error scales by `1/|c|`.
    pub fn dividing_constant(&self, c: T) -> Result<Self, UncertainError> {
        if c == T::zero() {
            return Err(UncertainError::DivisionByZero);
        }
        Ok(Self::new(self.value / c, self.absolute_error / c.abs()))
    }

    // ========================================================================
    // Sign
    // ========================================================================

    /// `-self`, same error.
    #[inline]
    pub fn negative(&self) -> Self {
        Self::new(-self.value, self.absolute_error)
    }

    /// `|self|`, same error.
    #[inline]
    pub fn absolute(&self) -> Self {
        Self::new(self.value.abs(), self.absolute_error)
    }
}

// ============================================================================
// Algebra Traits
// ============================================================================

impl<T: Float> NormSummable for UncertainValue<T> {
    type Scalar = T;

    #[inline]
    fn zero() -> Self {
        UncertainValue::zero()
    }

    #[inline]
    fn sum_with(values: &[Self], strategy: NormStrategy<T>) -> Self {
        UncertainValue::sum(values, strategy)
    }
}

impl<T: Float> NormProductable for UncertainValue<T> {
    type Scalar = T;

    #[inline]
    fn one() -> Self {
        UncertainValue::one()
    }

    #[inline]
    fn product_with(values: &[Self], strategy: NormStrategy<T>) -> Self {
        UncertainValue::product(values, strategy)
    }
}

// ============================================================================
// Operators
// ============================================================================

impl<T: Float> Neg for UncertainValue<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.negative()
    }
}

impl<T: Float> Add<T> for UncertainValue<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: T) -> Self {
        self.adding_constant(rhs)
    }
}

impl<T: Float> Sub<T> for UncertainValue<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: T) -> Self {
        self.subtracting_constant(rhs)
    }
}

impl<T: Float> Mul<T> for UncertainValue<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.multiplying_constant(rhs)
    }
}

/// Unchecked constant division; use [`UncertainValue::dividing_constant`] to
/// reject a zero divisor.
impl<T: Float> Div<T> for UncertainValue<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.value / rhs, self.absolute_error / rhs.abs())
    }
}

/// Sums under the default (L2) norm.
impl<T: Float> Sum for UncertainValue<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let values: Vec<Self> = iter.collect();
        UncertainValue::sum(&values, NormStrategy::default())
    }
}

impl<'a, T: Float> Sum<&'a UncertainValue<T>> for UncertainValue<T> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Multiplies under the default (L2) norm.
impl<T: Float> Product for UncertainValue<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        let values: Vec<Self> = iter.collect();
        UncertainValue::product(&values, NormStrategy::default())
    }
}

impl<T: Float + fmt::Display> fmt::Display for UncertainValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} ± {:.*}", p, self.value, p, self.absolute_error),
            None => write!(f, "{} ± {}", self.value, self.absolute_error),
        }
    }
}

//! Powers and transcendental functions of additive uncertain values.
//!
//! ## Purpose
//!
//! This module propagates error through single-input functions using the
//! first-derivative (delta) rule `e' = |f'(v)| · e`.
//!
//! ## Key concepts
//!
//! * **Power**: `rel(vᵖ) = |p| · rel(v)`.
//! * **Logarithm**: `e(ln v) = rel(v)`.
//! * **Exponential**: `rel(eᵛ) = e(v)`.
//! * **Trigonometric**: `e(sin v) = |cos v| · e`, `e(cos v) = |sin v| · e`.
//!
//! ## Invariants
//!
//! * Fallible functions never return a non-finite value or error.
//!
//! ## Non-goals
//!
//! * Second-order (curvature) corrections are not applied.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::additive::UncertainValue;
use crate::primitives::cast::{exponent, two};
use crate::primitives::errors::UncertainError;

impl<T: Float> UncertainValue<T> {
    // ========================================================================
    // Powers
    // ========================================================================

    /// Raise to a real power.
    ///
    /// # Domain
    ///
    /// * `0 ± 0` raised to `p > 0` is `0 ± 0`; any other zero base fails.
    /// * A negative base fails with `NegativeInput`.
    /// * Overflowing results fail with `NonFinite`.
    pub fn powf(&self, p: T) -> Result<Self, UncertainError> {
        if self.is_zero() {
            if self.absolute_error() != T::zero() {
                return Err(UncertainError::InvalidValue("power of a zero base with non-zero error"));
            }
            if p > T::zero() {
                return Ok(Self::zero());
            }
            if p < T::zero() {
                return Err(UncertainError::DivisionByZero);
            }
            return Err(UncertainError::InvalidValue("zero raised to a non-positive power"));
        }
        if self.value() < T::zero() {
            return Err(UncertainError::NegativeInput);
        }

        let value = self.value().powf(p);
        let relative = p.abs() * self.relative_error();
        let result = Self::with_relative_error(value, relative);
        if !result.value().is_finite() || !result.absolute_error().is_finite() {
            return Err(UncertainError::NonFinite("power"));
        }
        Ok(result)
    }

    /// Raise to an integer power, allowing negative bases.
    ///
    /// The magnitude goes through [`powf`](Self::powf); the sign is then
    /// restored by parity: positive for even `n`, the base's sign for odd `n`.
    pub fn powi(&self, n: i32) -> Result<Self, UncertainError> {
        let magnitude = self.absolute().powf(exponent(n))?;
        if n % 2 != 0 && self.value() < T::zero() {
            Ok(magnitude.negative())
        } else {
            Ok(magnitude)
        }
    }

    /// Square root (`powf(0.5)`).
    #[inline]
    pub fn sqrt(&self) -> Result<Self, UncertainError> {
        self.powf(two::<T>().recip())
    }

    /// Square (`powi(2)`).
    #[inline]
    pub fn squared(&self) -> Result<Self, UncertainError> {
        self.powi(2)
    }

    // ========================================================================
    // Logarithm and Exponential
    // ========================================================================

    /// Natural logarithm; fails for a non-positive value or a non-finite result.
    pub fn ln(&self) -> Result<Self, UncertainError> {
        if self.value() <= T::zero() {
            return Err(UncertainError::NonPositiveInput);
        }
        let result = Self::new(self.value().ln(), self.relative_error());
        if !result.value().is_finite() || !result.absolute_error().is_finite() {
            return Err(UncertainError::NonFinite("ln"));
        }
        Ok(result)
    }

    /// Exponential; fails when the result overflows.
    pub fn exp(&self) -> Result<Self, UncertainError> {
        let value = self.value().exp();
        let result = Self::with_relative_error(value, self.absolute_error());
        if !result.value().is_finite() || !result.absolute_error().is_finite() {
            return Err(UncertainError::NonFinite("exp"));
        }
        Ok(result)
    }

    // ========================================================================
    // Trigonometric
    // ========================================================================

    /// Sine.
    #[inline]
    pub fn sin(&self) -> Self {
        let (sin, cos) = self.value().sin_cos();
        Self::new(sin, cos.abs() * self.absolute_error())
    }

    /// Cosine.
    #[inline]
    pub fn cos(&self) -> Self {
        let (sin, cos) = self.value().sin_cos();
        Self::new(cos, sin.abs() * self.absolute_error())
    }
}

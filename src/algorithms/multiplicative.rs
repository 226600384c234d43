//! Multiplicative (log-domain) uncertain values.
//!
//! ## Purpose
//!
//! This module provides [`MultiplicativeUncertainValue`], which stores a sign
//! and `ln|x|` as an additive [`UncertainValue`] whose error is the log of a
//! multiplicative error factor. Products become sums in log space, so the
//! product primitive reuses the additive sum.
//!
//! ## Design notes
//!
//! * **No zero**: The representation cannot hold zero, so reciprocal and
//!   division are total.
//! * **Scaling**: Multiplying by a constant shifts `ln|x|` and leaves the
//!   log-space error untouched.
//!
//! ## Key concepts
//!
//! * **value** = sign · exp(log_abs.value)
//! * **multiplicative error** m = exp(log_abs.error), m >= 1
//! * **relative error** = m - 1
//! * **bounds** = [min(v·m, v/m), max(v·m, v/m)]
//!
//! ## Invariants
//!
//! * The represented value is never zero.
//! * The multiplicative error factor is never below 1.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use core::iter::Product;
use core::ops::Neg;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::additive::UncertainValue;
use crate::math::algebra::NormProductable;
use crate::math::norm::NormStrategy;
use crate::primitives::cast::{exponent, two};
use crate::primitives::errors::UncertainError;
use crate::primitives::signum::Signum;
use crate::primitives::validator::Validator;

// ============================================================================
// MultiplicativeUncertainValue
// ============================================================================

/// A non-zero value with a multiplicative error factor, stored in log space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiplicativeUncertainValue<T = f64> {
    signum: Signum,
    log_abs: UncertainValue<T>,
}

impl<T: Float> MultiplicativeUncertainValue<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a value from its central value and multiplicative error factor.
    ///
    /// Fails for a zero or non-finite value and for a factor that is below 1
    /// or non-finite.
    pub fn new(value: T, multiplicative_error: T) -> Result<Self, UncertainError> {
        Validator::validate_non_zero(value)?;
        Validator::validate_finite(value, "multiplicative value")?;
        Validator::validate_multiplicative_error(multiplicative_error)?;

        let signum = Signum::of(value).ok_or(UncertainError::ZeroInput)?;
        Ok(Self::from_log_abs(
            signum,
            UncertainValue::new(value.abs().ln(), multiplicative_error.ln()),
        ))
    }

    /// Create a value whose multiplicative error factor is `1 + relative_error`.
    pub fn with_relative_error(value: T, relative_error: T) -> Result<Self, UncertainError> {
        Validator::validate_non_zero(value)?;
        Validator::validate_finite(value, "multiplicative value")?;
        Validator::validate_multiplicative_error(T::one() + relative_error)?;

        let signum = Signum::of(value).ok_or(UncertainError::ZeroInput)?;
        Ok(Self::from_log_abs(
            signum,
            UncertainValue::new(value.abs().ln(), relative_error.ln_1p()),
        ))
    }

    /// Assemble a value from its sign and log-magnitude.
    #[inline]
    pub fn from_log_abs(signum: Signum, log_abs: UncertainValue<T>) -> Self {
        Self { signum, log_abs }
    }

    /// Multiplicative identity: `+1` with factor 1.
    #[inline]
    pub fn one() -> Self {
        Self::from_log_abs(Signum::Positive, UncertainValue::zero())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Sign of the central value.
    #[inline]
    pub fn signum(&self) -> Signum {
        self.signum
    }

    /// `ln|value|` with the log of the multiplicative error as its error.
    #[inline]
    pub fn log_abs(&self) -> UncertainValue<T> {
        self.log_abs
    }

    /// Central value.
    #[inline]
    pub fn value(&self) -> T {
        self.signum.apply(self.log_abs.value().exp())
    }

    /// Multiplicative error factor (`>= 1`).
    #[inline]
    pub fn multiplicative_error(&self) -> T {
        self.log_abs.absolute_error().exp()
    }

    /// Relative error: multiplicative error minus one.
    #[inline]
    pub fn relative_error(&self) -> T {
        self.log_abs.absolute_error().exp_m1()
    }

    // ========================================================================
    // Products
    // ========================================================================

    /// Product of `values`; log-magnitudes add and their errors combine
    /// under `strategy`. The empty product is [`one`](Self::one).
    pub fn product(values: &[Self], strategy: NormStrategy<T>) -> Self {
        let logs: Vec<UncertainValue<T>> = values.iter().map(|v| v.log_abs).collect();
        Self::from_log_abs(
            values.iter().map(|v| v.signum).product(),
            UncertainValue::sum(&logs, strategy),
        )
    }

    /// `self · other`.
    #[inline]
    pub fn multiplying(&self, other: &Self, strategy: NormStrategy<T>) -> Self {
        Self::product(&[*self, *other], strategy)
    }

    /// `self / other`; never fails.
    #[inline]
    pub fn dividing(&self, other: &Self, strategy: NormStrategy<T>) -> Self {
        self.multiplying(&other.reciprocal(), strategy)
    }

    /// `1 / self`; same sign and same multiplicative error.
    #[inline]
    pub fn reciprocal(&self) -> Self {
        Self::from_log_abs(self.signum, self.log_abs.negative())
    }

    // ========================================================================
    // Scaling
    // ========================================================================

    /// `self · alpha`; fails when `alpha` is zero or non-finite.
    pub fn scaled_up(&self, alpha: T) -> Result<Self, UncertainError> {
        Validator::validate_scale(alpha)?;
        let signum = Signum::of(alpha).ok_or(UncertainError::InvalidScale)?;
        Ok(Self::from_log_abs(
            self.signum * signum,
            self.log_abs.adding_constant(alpha.abs().ln()),
        ))
    }

    /// `self / alpha`; fails when `alpha` is zero or non-finite.
    pub fn scaled_down(&self, alpha: T) -> Result<Self, UncertainError> {
        Validator::validate_scale(alpha)?;
        let signum = Signum::of(alpha).ok_or(UncertainError::InvalidScale)?;
        Ok(Self::from_log_abs(
            self.signum * signum,
            self.log_abs.subtracting_constant(alpha.abs().ln()),
        ))
    }

    // ========================================================================
    // Powers
    // ========================================================================

    /// Raise to an integer power.
    ///
    /// The magnitude is raised as a real power; the sign is positive for even
    /// `n` and unchanged for odd `n`.
    pub fn powi(&self, n: i32) -> Result<Self, UncertainError> {
        let signum = if n % 2 == 0 {
            Signum::Positive
        } else {
            self.signum
        };
        let log_abs = self.log_abs.multiplying_constant(exponent(n));
        Validator::validate_result(log_abs.value(), log_abs.absolute_error(), "power")?;
        Ok(Self::from_log_abs(signum, log_abs))
    }

    /// Raise to a real power; fails for a negative value.
    pub fn powf(&self, p: T) -> Result<Self, UncertainError> {
        if self.signum.is_negative() {
            return Err(UncertainError::NegativeInput);
        }
        let log_abs = self.log_abs.multiplying_constant(p);
        Validator::validate_result(log_abs.value(), log_abs.absolute_error(), "power")?;
        Ok(Self::from_log_abs(Signum::Positive, log_abs))
    }

    /// Square root; fails for a negative value.
    #[inline]
    pub fn sqrt(&self) -> Result<Self, UncertainError> {
        self.powf(two::<T>().recip())
    }

    // ========================================================================
    // Sign
    // ========================================================================

    /// `-self`.
    #[inline]
    pub fn negative(&self) -> Self {
        Self::from_log_abs(-self.signum, self.log_abs)
    }

    /// `|self|`.
    #[inline]
    pub fn absolute(&self) -> Self {
        Self::from_log_abs(Signum::Positive, self.log_abs)
    }
}

// ============================================================================
// Algebra Traits
// ============================================================================

impl<T: Float> NormProductable for MultiplicativeUncertainValue<T> {
    type Scalar = T;

    #[inline]
    fn one() -> Self {
        MultiplicativeUncertainValue::one()
    }

    #[inline]
    fn product_with(values: &[Self], strategy: NormStrategy<T>) -> Self {
        MultiplicativeUncertainValue::product(values, strategy)
    }
}

// ============================================================================
// Operators
// ============================================================================

impl<T: Float> Neg for MultiplicativeUncertainValue<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.negative()
    }
}

/// Multiplies under the default (L2) norm.
impl<T: Float> Product for MultiplicativeUncertainValue<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        let values: Vec<Self> = iter.collect();
        MultiplicativeUncertainValue::product(&values, NormStrategy::default())
    }
}

impl<T: Float + fmt::Display> fmt::Display for MultiplicativeUncertainValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (value, factor) = (self.value(), self.multiplicative_error());
        match f.precision() {
            Some(p) => write!(f, "{:.*} ×/÷ {:.*}", p, value, p, factor),
            None => write!(f, "{} ×/÷ {}", value, factor),
        }
    }
}

//! Conversions between the additive and multiplicative representations.
//!
//! ## Purpose
//!
//! An additive value `v ± e` maps to the log-domain pair
//! `(sign(v), ln|v| ± ln(1 + e/|v|))`, and back via
//! `v ± |v|·(exp(ln_err) - 1)`. Using `ln_1p`/`exp_m1` keeps small relative
//! errors exact through the round trip.
//!
//! ## Invariants
//!
//! * additive → multiplicative fails for zero or non-finite input.
//! * multiplicative → additive always succeeds.
//! * The round trip reproduces value and absolute error to floating-point
//!   precision.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::additive::UncertainValue;
use crate::algorithms::multiplicative::MultiplicativeUncertainValue;
use crate::primitives::errors::UncertainError;
use crate::primitives::signum::Signum;
use crate::primitives::validator::Validator;

impl<T: Float> UncertainValue<T> {
    /// Convert to the log-domain representation.
    pub fn to_multiplicative(&self) -> Result<MultiplicativeUncertainValue<T>, UncertainError> {
        Validator::validate_non_zero(self.value())?;
        Validator::validate_finite(self.value(), "conversion")?;

        let relative = self.relative_error();
        Validator::validate_finite(relative, "conversion")?;
        Validator::validate_finite(T::one() + relative, "conversion")?;
        Validator::validate_multiplicative_error(T::one() + relative)?;

        let signum = Signum::of(self.value()).ok_or(UncertainError::ZeroInput)?;
        Ok(MultiplicativeUncertainValue::from_log_abs(
            signum,
            UncertainValue::new(self.value().abs().ln(), relative.ln_1p()),
        ))
    }
}

impl<T: Float> MultiplicativeUncertainValue<T> {
    /// Convert to the additive representation.
    #[inline]
    pub fn to_uncertain_value(&self) -> UncertainValue<T> {
        UncertainValue::with_relative_error(self.value(), self.relative_error())
    }
}

impl<T: Float> TryFrom<UncertainValue<T>> for MultiplicativeUncertainValue<T> {
    type Error = UncertainError;

    #[inline]
    fn try_from(value: UncertainValue<T>) -> Result<Self, Self::Error> {
        value.to_multiplicative()
    }
}

impl<T: Float> From<MultiplicativeUncertainValue<T>> for UncertainValue<T> {
    #[inline]
    fn from(value: MultiplicativeUncertainValue<T>) -> Self {
        value.to_uncertain_value()
    }
}

//! Input validation for uncertain arithmetic and estimators.
//!
//! ## Purpose
//!
//! This module provides the domain checks shared by the value engines and the
//! estimators: finiteness, non-zero values, collection lengths, scale factors,
//! multiplicative error factors, and uniform signs.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not correct or filter invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::UncertainError;
use crate::primitives::signum::Signum;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for numeric domains.
///
/// All methods fail fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Scalar Validation
    // ========================================================================

    /// Validate a single value for finiteness.
    #[inline]
    pub fn validate_finite<T: Float>(val: T, context: &'static str) -> Result<(), UncertainError> {
        if !val.is_finite() {
            return Err(UncertainError::NonFinite(context));
        }
        Ok(())
    }

    /// Validate every element for finiteness.
    pub fn validate_all_finite<T: Float>(
        values: &[T],
        context: &'static str,
    ) -> Result<(), UncertainError> {
        if values.iter().all(|v| v.is_finite()) {
            Ok(())
        } else {
            Err(UncertainError::NonFinite(context))
        }
    }

    /// Validate a computed value/error pair for finiteness.
    #[inline]
    pub fn validate_result<T: Float>(
        value: T,
        error: T,
        context: &'static str,
    ) -> Result<(), UncertainError> {
        Self::validate_finite(value, context)?;
        Self::validate_finite(error, context)
    }

    /// Validate that a value is not exactly zero.
    #[inline]
    pub fn validate_non_zero<T: Float>(val: T) -> Result<(), UncertainError> {
        if val == T::zero() {
            return Err(UncertainError::ZeroInput);
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a scale factor: finite and non-zero.
    #[inline]
    pub fn validate_scale<T: Float>(alpha: T) -> Result<(), UncertainError> {
        if !alpha.is_finite() || alpha == T::zero() {
            return Err(UncertainError::InvalidScale);
        }
        Ok(())
    }

    /// Validate a multiplicative error factor: finite and `>= 1`.
    #[inline]
    pub fn validate_multiplicative_error<T: Float>(factor: T) -> Result<(), UncertainError> {
        // NaN fails the comparison as well.
        if !factor.is_finite() || !(factor >= T::one()) {
            return Err(UncertainError::InvalidMultiplicativeError);
        }
        Ok(())
    }

    // ========================================================================
    // Collection Validation
    // ========================================================================

    /// Validate that a collection holds at least one element.
    #[inline]
    pub fn validate_non_empty(len: usize) -> Result<(), UncertainError> {
        if len == 0 {
            return Err(UncertainError::EmptyCollection);
        }
        Ok(())
    }

    /// Validate that a collection holds at least `required` elements.
    #[inline]
    pub fn validate_min_len(len: usize, required: usize) -> Result<(), UncertainError> {
        if len < required {
            return Err(UncertainError::InsufficientElements {
                required,
                actual: len,
            });
        }
        Ok(())
    }

    /// Validate that every element is non-zero and all share one sign.
    ///
    /// Returns the common sign. A zero anywhere takes precedence over mixed
    /// signs. An empty slice is reported as `EmptyCollection`.
    pub fn validate_uniform_sign<T: Float>(values: &[T]) -> Result<Signum, UncertainError> {
        Self::validate_non_empty(values.len())?;
        if values.iter().any(|&v| v == T::zero()) {
            return Err(UncertainError::ZeroInput);
        }

        let first = Signum::of(values[0]).ok_or(UncertainError::NonFinite("sign"))?;
        for &v in &values[1..] {
            match Signum::of(v) {
                Some(s) if s == first => {}
                Some(_) => return Err(UncertainError::MixedSigns),
                None => return Err(UncertainError::NonFinite("sign")),
            }
        }
        Ok(first)
    }
}

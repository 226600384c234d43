//! Multi-input derived functions.
//!
//! ## Purpose
//!
//! This module provides functions of several uncertain inputs whose value and
//! error have closed forms. Each error is the norm of the per-input
//! contributions `|∂f/∂xᵢ| · eᵢ`.
//!
//! ## Invariants
//!
//! * Degenerate inputs (zero denominators, `|x/y| >= 1`, empty coefficient
//!   lists, spans of fewer than two elements) fail with a distinct error
//!   instead of producing NaN or infinity.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::additive::UncertainValue;
use crate::math::norm::NormStrategy;
use crate::primitives::cast::count;
use crate::primitives::errors::UncertainError;
use crate::primitives::validator::Validator;

impl<T: Float> UncertainValue<T> {
    /// Logistic function `1 / (1 + e^{-(x - center)/width})`.
    ///
    /// With `z = (x - c)/w` and `s' = s(1 - s)`:
    /// ```text
    /// ∂s/∂x =  s'/w
    /// ∂s/∂c = -s'/w
    /// ∂s/∂w = -s'·z/w
    /// ```
    pub fn sigmoid(
        x: &Self,
        center: &Self,
        width: &Self,
        strategy: NormStrategy<T>,
    ) -> Result<Self, UncertainError> {
        if width.is_zero() {
            return Err(UncertainError::DivisionByZero);
        }
        let w = width.value();
        let z = (x.value() - center.value()) / w;

        // Evaluate on the side where the exponential cannot overflow.
        let s = if z >= T::zero() {
            (T::one() + (-z).exp()).recip()
        } else {
            let e = z.exp();
            e / (T::one() + e)
        };
        let slope = s * (T::one() - s);

        let contributions = [
            slope / w * x.absolute_error(),
            slope / w * center.absolute_error(),
            slope * z / w * width.absolute_error(),
        ];
        let result = Self::new(s, strategy.apply(&contributions));
        Validator::validate_result(result.value(), result.absolute_error(), "sigmoid")?;
        Ok(result)
    }

    /// Lorentz factor `γ = 1 / √(1 - (x/y)²)`.
    ///
    /// With `r = x/y`, `∂γ/∂r = r·γ³`, so
    /// ```text
    /// ∂γ/∂x = r·γ³ / y
    /// ∂γ/∂y = -r²·γ³ / y
    /// ```
    pub fn lorentz_factor(
        x: &Self,
        y: &Self,
        strategy: NormStrategy<T>,
    ) -> Result<Self, UncertainError> {
        if y.is_zero() {
            return Err(UncertainError::DivisionByZero);
        }
        let r = x.value() / y.value();
        if !(r.abs() < T::one()) {
            return Err(UncertainError::InvalidValue("Lorentz ratio |x/y| must be below 1"));
        }

        let gamma = ((T::one() - r) * (T::one() + r)).sqrt().recip();
        let gamma3 = gamma * gamma * gamma;
        let inv_y = y.value().abs().recip();

        let contributions = [
            r.abs() * gamma3 * inv_y * x.absolute_error(),
            r * r * gamma3 * inv_y * y.absolute_error(),
        ];
        let result = Self::new(gamma, strategy.apply(&contributions));
        Validator::validate_result(result.value(), result.absolute_error(), "lorentz factor")?;
        Ok(result)
    }

    /// Polynomial `Σ cₖ·xᵏ` with uncertain coefficients (lowest order first).
    ///
    /// `∂/∂cₖ = xᵏ` and `∂/∂x = Σ k·cₖ·xᵏ⁻¹`.
    pub fn polynomial(
        coefficients: &[Self],
        x: &Self,
        strategy: NormStrategy<T>,
    ) -> Result<Self, UncertainError> {
        Validator::validate_non_empty(coefficients.len())?;

        let xv = x.value();
        let mut value = T::zero();
        let mut slope = T::zero();
        for c in coefficients.iter().rev() {
            slope = slope * xv + value;
            value = value * xv + c.value();
        }

        let mut contributions: Vec<T> = Vec::with_capacity(coefficients.len() + 1);
        let mut power = T::one();
        for c in coefficients {
            contributions.push(power.abs() * c.absolute_error());
            power = power * xv;
        }
        contributions.push(slope.abs() * x.absolute_error());

        let result = Self::new(value, strategy.apply(&contributions));
        Validator::validate_result(result.value(), result.absolute_error(), "polynomial")?;
        Ok(result)
    }

    /// Divide every element by a shared denominator.
    pub fn normalized(
        values: &[Self],
        denominator: &Self,
        strategy: NormStrategy<T>,
    ) -> Result<Vec<Self>, UncertainError> {
        let inverse = denominator.reciprocal()?;
        Ok(values
            .iter()
            .map(|v| v.multiplying(&inverse, strategy))
            .collect())
    }

    /// Divide every element by the first one.
    ///
    /// The first element maps to exactly `1 ± 0`, since `x/x` carries no
    /// uncertainty.
    pub fn normalized_by_first(
        values: &[Self],
        strategy: NormStrategy<T>,
    ) -> Result<Vec<Self>, UncertainError> {
        let (first, rest) = values
            .split_first()
            .ok_or(UncertainError::EmptyCollection)?;
        let inverse = first.reciprocal()?;

        let mut out = Vec::with_capacity(values.len());
        out.push(Self::one());
        out.extend(rest.iter().map(|v| v.multiplying(&inverse, strategy)));
        Ok(out)
    }

    /// Average step `(last - first) / (n - 1)` across a sequence.
    pub fn average_step_width(
        values: &[Self],
        strategy: NormStrategy<T>,
    ) -> Result<Self, UncertainError> {
        Validator::validate_min_len(values.len(), 2)?;
        let first = values[0];
        let last = values[values.len() - 1];
        let steps: T = count(values.len() - 1);
        last.subtracting(&first, strategy).dividing_constant(steps)
    }
}

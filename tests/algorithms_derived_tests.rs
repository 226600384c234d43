#![cfg(feature = "dev")]
//! Tests for multi-input derived functions.
//!
//! ## Test Organization
//!
//! 1. **Sigmoid** - Partial derivatives and saturation
//! 2. **Lorentz Factor** - Closed form and the |x/y| < 1 domain
//! 3. **Polynomial** - Horner evaluation with coefficient and abscissa errors
//! 4. **Normalisation** - Shared denominators and first-element scaling
//! 5. **Step Width** - Average spacing of a sequence

use approx::assert_relative_eq;

use uncertain_rs::internals::algorithms::additive::UncertainValue;
use uncertain_rs::internals::math::norm::NormStrategy::{L1, L2};
use uncertain_rs::internals::primitives::errors::UncertainError;

fn uv(value: f64, error: f64) -> UncertainValue<f64> {
    UncertainValue::new(value, error)
}

// ============================================================================
// Sigmoid Tests
// ============================================================================

/// Test the value and error at the centre, where the slope is 1/4.
#[test]
fn test_sigmoid_at_center() {
    let s = UncertainValue::sigmoid(&uv(2.0, 0.1), &uv(2.0, 0.2), &uv(1.0, 0.5), L2).unwrap();
    assert_relative_eq!(s.value(), 0.5, epsilon = 1e-15);
    // The width term vanishes at z = 0.
    assert_relative_eq!(s.absolute_error(), 0.25 * 0.05f64.sqrt(), epsilon = 1e-12);
}

/// Test the width contribution away from the centre.
#[test]
fn test_sigmoid_width_contribution() {
    let s = UncertainValue::sigmoid(&uv(3.0, 0.0), &uv(1.0, 0.0), &uv(2.0, 0.1), L1).unwrap();
    let value = 1.0 / (1.0 + (-1.0f64).exp());
    let slope = value * (1.0 - value);
    assert_relative_eq!(s.value(), value, epsilon = 1e-15);
    assert_relative_eq!(s.absolute_error(), slope * 1.0 / 2.0 * 0.1, epsilon = 1e-15);
}

/// Test saturation far from the centre without overflow.
#[test]
fn test_sigmoid_saturation() {
    let high = UncertainValue::sigmoid(&uv(1000.0, 1.0), &uv(0.0, 0.0), &uv(1.0, 0.0), L2).unwrap();
    assert_eq!(high.value(), 1.0);
    assert!(high.absolute_error() < 1e-300);

    let low = UncertainValue::sigmoid(&uv(-1000.0, 1.0), &uv(0.0, 0.0), &uv(1.0, 0.0), L2).unwrap();
    assert_eq!(low.value(), 0.0);
    assert!(low.absolute_error().is_finite());
}

/// Test that a zero width is rejected.
#[test]
fn test_sigmoid_zero_width() {
    assert_eq!(
        UncertainValue::sigmoid(&uv(1.0, 0.1), &uv(0.0, 0.0), &uv(0.0, 0.1), L2),
        Err(UncertainError::DivisionByZero)
    );
}

// ============================================================================
// Lorentz Factor Tests
// ============================================================================

/// Test γ for v/c = 0.6 and its x-error contribution.
#[test]
fn test_lorentz_factor() {
    let g = UncertainValue::lorentz_factor(&uv(0.6, 0.01), &uv(1.0, 0.0), L2).unwrap();
    assert_relative_eq!(g.value(), 1.25, epsilon = 1e-12);
    assert_relative_eq!(g.absolute_error(), 0.6 * 1.953125 * 0.01, epsilon = 1e-12);

    let gy = UncertainValue::lorentz_factor(&uv(0.6, 0.0), &uv(1.0, 0.01), L2).unwrap();
    assert_relative_eq!(gy.absolute_error(), 0.36 * 1.953125 * 0.01, epsilon = 1e-12);
}

/// Test that γ is even in x.
#[test]
fn test_lorentz_factor_symmetric() {
    let pos = UncertainValue::lorentz_factor(&uv(0.3, 0.02), &uv(1.0, 0.01), L2).unwrap();
    let neg = UncertainValue::lorentz_factor(&uv(-0.3, 0.02), &uv(1.0, 0.01), L2).unwrap();
    assert_relative_eq!(pos.value(), neg.value(), epsilon = 1e-15);
    assert_relative_eq!(pos.absolute_error(), neg.absolute_error(), epsilon = 1e-15);
}

/// Test the domain of the Lorentz factor.
#[test]
fn test_lorentz_factor_domain() {
    assert_eq!(
        UncertainValue::lorentz_factor(&uv(1.0, 0.0), &uv(0.0, 0.0), L2),
        Err(UncertainError::DivisionByZero)
    );
    assert!(matches!(
        UncertainValue::lorentz_factor(&uv(1.0, 0.0), &uv(1.0, 0.0), L2),
        Err(UncertainError::InvalidValue(_))
    ));
    assert!(matches!(
        UncertainValue::lorentz_factor(&uv(-2.0, 0.0), &uv(1.0, 0.0), L2),
        Err(UncertainError::InvalidValue(_))
    ));
}

// ============================================================================
// Polynomial Tests
// ============================================================================

/// Test 1 + 2x + 3x² at x = 2.
#[test]
fn test_polynomial() {
    let coefficients = [uv(1.0, 0.1), uv(2.0, 0.0), uv(3.0, 0.0)];
    let p = UncertainValue::polynomial(&coefficients, &uv(2.0, 0.1), L2).unwrap();
    assert_relative_eq!(p.value(), 17.0, epsilon = 1e-12);
    // ∂p/∂x = 2 + 6x = 14
    assert_relative_eq!(p.absolute_error(), 1.97f64.sqrt(), epsilon = 1e-12);
}

/// Test coefficient errors weighted by powers of x.
#[test]
fn test_polynomial_coefficient_errors() {
    let coefficients = [uv(0.0, 0.1), uv(0.0, 0.1), uv(0.0, 0.1)];
    let p = UncertainValue::polynomial(&coefficients, &uv(-3.0, 0.0), L1).unwrap();
    assert_eq!(p.value(), 0.0);
    assert_relative_eq!(p.absolute_error(), 0.1 * (1.0 + 3.0 + 9.0), epsilon = 1e-12);
}

/// Test that a constant polynomial ignores the abscissa error.
#[test]
fn test_polynomial_constant_and_empty() {
    let p = UncertainValue::polynomial(&[uv(4.0, 0.2)], &uv(10.0, 5.0), L2).unwrap();
    assert_eq!(p, uv(4.0, 0.2));

    assert_eq!(
        UncertainValue::polynomial(&[], &uv(1.0, 0.0), L2),
        Err(UncertainError::EmptyCollection)
    );
}

// ============================================================================
// Normalisation Tests
// ============================================================================

/// Test division by an exact shared denominator.
#[test]
fn test_normalized() {
    let out = UncertainValue::normalized(&[uv(2.0, 0.1), uv(4.0, 0.2)], &uv(2.0, 0.0), L2).unwrap();
    assert_eq!(out.len(), 2);
    assert_relative_eq!(out[0].value(), 1.0, epsilon = 1e-15);
    assert_relative_eq!(out[0].absolute_error(), 0.05, epsilon = 1e-15);
    assert_relative_eq!(out[1].value(), 2.0, epsilon = 1e-15);
    assert_relative_eq!(out[1].absolute_error(), 0.1, epsilon = 1e-15);

    assert_eq!(
        UncertainValue::normalized(&[uv(1.0, 0.0)], &uv(0.0, 0.0), L2),
        Err(UncertainError::DivisionByZero)
    );
}

/// Test that the first element maps to exactly one.
#[test]
fn test_normalized_by_first() {
    let out = UncertainValue::normalized_by_first(&[uv(2.0, 0.1), uv(4.0, 0.4)], L2).unwrap();
    assert_eq!(out[0], UncertainValue::one());
    assert_relative_eq!(out[1].value(), 2.0, epsilon = 1e-15);
    assert_relative_eq!(out[1].relative_error(), 0.0125f64.sqrt(), epsilon = 1e-12);

    assert_eq!(
        UncertainValue::<f64>::normalized_by_first(&[], L2),
        Err(UncertainError::EmptyCollection)
    );
    assert_eq!(
        UncertainValue::normalized_by_first(&[uv(0.0, 0.1), uv(1.0, 0.0)], L2),
        Err(UncertainError::DivisionByZero)
    );
}

// ============================================================================
// Step Width Tests
// ============================================================================

/// Test the average step across a sequence.
#[test]
fn test_average_step_width() {
    let values = [uv(0.0, 0.1), uv(5.0, 9.0), uv(10.0, 0.2)];
    let w = UncertainValue::average_step_width(&values, L2).unwrap();
    assert_relative_eq!(w.value(), 5.0, epsilon = 1e-15);
    // Interior errors do not enter.
    assert_relative_eq!(w.absolute_error(), 0.05f64.sqrt() / 2.0, epsilon = 1e-12);

    assert_eq!(
        UncertainValue::average_step_width(&[uv(1.0, 0.0)], L2),
        Err(UncertainError::InsufficientElements {
            required: 2,
            actual: 1
        })
    );
}

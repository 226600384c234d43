#![cfg(feature = "dev")]
//! Tests for the log-domain (multiplicative) representation.
//!
//! ## Test Organization
//!
//! 1. **Construction** - Validation of value and factor
//! 2. **Products** - Sign parity and log-error combination
//! 3. **Reciprocal and Scaling** - Total operations on a non-zero value
//! 4. **Powers** - Integer parity and the real-power domain
//! 5. **Traits** - Bounds, iterator folds, display

use approx::assert_relative_eq;

use uncertain_rs::internals::algorithms::multiplicative::MultiplicativeUncertainValue;
use uncertain_rs::internals::evaluation::bounds::Bounded;
use uncertain_rs::internals::math::algebra::NormProductable;
use uncertain_rs::internals::math::norm::NormStrategy::{L1, L2};
use uncertain_rs::internals::primitives::errors::UncertainError;
use uncertain_rs::internals::primitives::signum::Signum;

type Muv = MultiplicativeUncertainValue<f64>;

fn muv(value: f64, factor: f64) -> Muv {
    MultiplicativeUncertainValue::new(value, factor).unwrap()
}

// ============================================================================
// Construction Tests
// ============================================================================

/// Test the derived accessors.
#[test]
fn test_new_accessors() {
    let x = muv(-2.0, 1.1);
    assert_eq!(x.signum(), Signum::Negative);
    assert_relative_eq!(x.value(), -2.0, epsilon = 1e-14);
    assert_relative_eq!(x.multiplicative_error(), 1.1, epsilon = 1e-14);
    assert_relative_eq!(x.relative_error(), 0.1, epsilon = 1e-14);
    assert_relative_eq!(x.log_abs().value(), 2.0f64.ln(), epsilon = 1e-15);
    assert_relative_eq!(x.log_abs().absolute_error(), 1.1f64.ln(), epsilon = 1e-15);
}

/// Test that an exact value has factor one.
#[test]
fn test_new_exact() {
    let x = muv(5.0, 1.0);
    assert_eq!(x.multiplicative_error(), 1.0);
    assert_eq!(x.relative_error(), 0.0);

    let one = Muv::one();
    assert_eq!(one.value(), 1.0);
    assert_eq!(one.multiplicative_error(), 1.0);
}

/// Test construction failures.
#[test]
fn test_new_rejects_invalid_input() {
    assert_eq!(Muv::new(0.0, 1.1), Err(UncertainError::ZeroInput));
    assert_eq!(
        Muv::new(f64::INFINITY, 1.1),
        Err(UncertainError::NonFinite("multiplicative value"))
    );
    assert_eq!(
        Muv::new(f64::NAN, 1.1),
        Err(UncertainError::NonFinite("multiplicative value"))
    );
    assert_eq!(
        Muv::new(2.0, 0.9),
        Err(UncertainError::InvalidMultiplicativeError)
    );
    assert_eq!(
        Muv::new(2.0, f64::INFINITY),
        Err(UncertainError::InvalidMultiplicativeError)
    );
}

/// Test construction from a relative error.
#[test]
fn test_with_relative_error() {
    let x = Muv::with_relative_error(5.0, 0.2).unwrap();
    assert_relative_eq!(x.value(), 5.0, epsilon = 1e-14);
    assert_relative_eq!(x.multiplicative_error(), 1.2, epsilon = 1e-14);

    assert_eq!(
        Muv::with_relative_error(5.0, -0.5),
        Err(UncertainError::InvalidMultiplicativeError)
    );
    assert_eq!(
        Muv::with_relative_error(0.0, 0.1),
        Err(UncertainError::ZeroInput)
    );
}

// ============================================================================
// Product Tests
// ============================================================================

/// Test that signs multiply and log errors combine under the norm.
#[test]
fn test_multiplying() {
    let p = muv(-2.0, 1.1).multiplying(&muv(3.0, 1.2), L2);
    assert_eq!(p.signum(), Signum::Negative);
    assert_relative_eq!(p.value(), -6.0, epsilon = 1e-13);
    assert_relative_eq!(
        p.log_abs().absolute_error(),
        1.1f64.ln().hypot(1.2f64.ln()),
        epsilon = 1e-15
    );

    let q = muv(-2.0, 1.1).multiplying(&muv(-3.0, 1.2), L1);
    assert_eq!(q.signum(), Signum::Positive);
    assert_relative_eq!(q.multiplicative_error(), 1.1 * 1.2, epsilon = 1e-14);
}

/// Test the product identities.
#[test]
fn test_product_identities() {
    let empty: [Muv; 0] = [];
    assert_eq!(Muv::product(&empty, L2), Muv::one());
    assert_eq!(<Muv as NormProductable>::one(), Muv::one());

    let x = muv(-7.0, 1.3);
    assert_eq!(Muv::product(&[x], L2), x);
}

/// Test that dividing a value by itself leaves only uncertainty.
#[test]
fn test_dividing() {
    let x = muv(4.0, 1.1);
    let q = x.dividing(&x, L2);
    assert_relative_eq!(q.value(), 1.0, epsilon = 1e-15);
    assert_relative_eq!(
        q.log_abs().absolute_error(),
        1.1f64.ln() * 2.0f64.sqrt(),
        epsilon = 1e-15
    );
}

// ============================================================================
// Reciprocal and Scaling Tests
// ============================================================================

/// Test that the reciprocal keeps sign and factor and is an involution.
#[test]
fn test_reciprocal() {
    let x = muv(-4.0, 1.1);
    let r = x.reciprocal();
    assert_eq!(r.signum(), Signum::Negative);
    assert_relative_eq!(r.value(), -0.25, epsilon = 1e-15);
    assert_relative_eq!(r.multiplicative_error(), 1.1, epsilon = 1e-14);
    assert_eq!(r.reciprocal(), x);
}

/// Test scaling by constants.
#[test]
fn test_scaling() {
    let x = muv(2.0, 1.5);

    let up = x.scaled_up(-3.0).unwrap();
    assert_eq!(up.signum(), Signum::Negative);
    assert_relative_eq!(up.value(), -6.0, epsilon = 1e-14);
    assert_relative_eq!(up.multiplicative_error(), 1.5, epsilon = 1e-14);

    let down = x.scaled_down(4.0).unwrap();
    assert_relative_eq!(down.value(), 0.5, epsilon = 1e-15);
    assert_relative_eq!(down.multiplicative_error(), 1.5, epsilon = 1e-14);

    let back = up.scaled_down(-3.0).unwrap();
    assert_relative_eq!(back.value(), 2.0, epsilon = 1e-14);
    assert_eq!(back.signum(), Signum::Positive);

    assert_eq!(x.scaled_up(0.0), Err(UncertainError::InvalidScale));
    assert_eq!(x.scaled_down(f64::NAN), Err(UncertainError::InvalidScale));
    assert_eq!(x.scaled_up(f64::INFINITY), Err(UncertainError::InvalidScale));
}

// ============================================================================
// Power Tests
// ============================================================================

/// Test integer powers of a negative value.
#[test]
fn test_powi_parity() {
    let x = muv(-2.0, 1.1);

    let square = x.powi(2).unwrap();
    assert_eq!(square.signum(), Signum::Positive);
    assert_relative_eq!(square.value(), 4.0, epsilon = 1e-14);
    assert_relative_eq!(square.multiplicative_error(), 1.21, epsilon = 1e-14);

    let cube = x.powi(3).unwrap();
    assert_eq!(cube.signum(), Signum::Negative);
    assert_relative_eq!(cube.value(), -8.0, epsilon = 1e-13);

    let inverse = x.powi(-1).unwrap();
    assert_eq!(inverse.signum(), Signum::Negative);
    assert_relative_eq!(inverse.value(), -0.5, epsilon = 1e-15);
    assert_relative_eq!(inverse.multiplicative_error(), 1.1, epsilon = 1e-14);

    let zeroth = x.powi(0).unwrap();
    assert_eq!(zeroth.signum(), Signum::Positive);
    assert_eq!(zeroth.value(), 1.0);
    assert_eq!(zeroth.multiplicative_error(), 1.0);
}

/// Test the real-power domain.
#[test]
fn test_powf() {
    let r = muv(4.0, 1.21).sqrt().unwrap();
    assert_relative_eq!(r.value(), 2.0, epsilon = 1e-14);
    assert_relative_eq!(r.multiplicative_error(), 1.1, epsilon = 1e-14);

    assert_eq!(muv(-4.0, 1.1).powf(0.5), Err(UncertainError::NegativeInput));
    assert_eq!(muv(-4.0, 1.1).sqrt(), Err(UncertainError::NegativeInput));
    assert_eq!(
        muv(10.0, 1.1).powf(f64::MAX),
        Err(UncertainError::NonFinite("power"))
    );
}

/// Test negation and absolute value.
#[test]
fn test_negative_and_absolute() {
    let x = muv(-3.0, 1.2);
    assert_eq!(x.negative().signum(), Signum::Positive);
    assert_eq!(x.negative().negative(), x);
    assert_eq!(-x, x.negative());
    assert_eq!(x.absolute().signum(), Signum::Positive);
    assert_eq!(x.absolute().absolute(), x.absolute());
    assert_eq!(x.absolute().log_abs(), x.log_abs());
}

// ============================================================================
// Trait Tests
// ============================================================================

/// Test that bounds are ordered for both signs.
#[test]
fn test_bounds_ordering() {
    let pos = muv(2.0, 1.5).bounds();
    assert_relative_eq!(pos.lower_bound, 2.0 / 1.5, epsilon = 1e-14);
    assert_relative_eq!(pos.upper_bound, 3.0, epsilon = 1e-14);

    let neg = muv(-2.0, 1.5).bounds();
    assert_relative_eq!(neg.lower_bound, -3.0, epsilon = 1e-14);
    assert_relative_eq!(neg.upper_bound, -2.0 / 1.5, epsilon = 1e-14);
    assert!(neg.lower_bound <= neg.value && neg.value <= neg.upper_bound);
}

/// Test the iterator product under the default strategy.
#[test]
fn test_iterator_product() {
    let values = [muv(2.0, 1.1), muv(-0.5, 1.2), muv(-3.0, 1.05)];
    let p: Muv = values.into_iter().product();
    assert_eq!(p, Muv::product(&values, L2));
    assert_relative_eq!(p.value(), 3.0, epsilon = 1e-14);
}

/// Test the textual rendering.
#[test]
fn test_display() {
    assert_eq!(format!("{:.2}", muv(2.0, 1.5)), "2.00 ×/÷ 1.50");
    assert_eq!(format!("{:.1}", muv(-0.5, 1.2)), "-0.5 ×/÷ 1.2");
}

#![cfg(feature = "dev")]
//! Tests for the sign carriers.
//!
//! ## Test Organization
//!
//! 1. **Signum** - Classification, parity, and application
//! 2. **Sign** - Three-valued classification with absorbing zero

use uncertain_rs::internals::primitives::signum::{Sign, Signum};

// ============================================================================
// Signum Tests
// ============================================================================

/// Test classification of positive, negative, zero, and NaN inputs.
#[test]
fn test_signum_of() {
    assert_eq!(Signum::of(3.5f64), Some(Signum::Positive));
    assert_eq!(Signum::of(-0.1f64), Some(Signum::Negative));
    assert_eq!(Signum::of(0.0f64), None);
    assert_eq!(Signum::of(-0.0f64), None);
    assert_eq!(Signum::of(f64::NAN), None);
    assert_eq!(Signum::of(f64::NEG_INFINITY), Some(Signum::Negative));
}

/// Test that the product of signs follows parity of the negatives.
#[test]
fn test_signum_product_parity() {
    use Signum::{Negative, Positive};

    let empty: [Signum; 0] = [];
    assert_eq!(empty.iter().product::<Signum>(), Positive);

    assert_eq!([Negative].iter().product::<Signum>(), Negative);
    assert_eq!([Negative, Negative].iter().product::<Signum>(), Positive);
    assert_eq!(
        [Negative, Positive, Negative, Negative]
            .into_iter()
            .product::<Signum>(),
        Negative
    );
    assert_eq!(Negative * Positive, Negative);
    assert_eq!(Negative * Negative, Positive);
}

/// Test negation, float conversion, and application to a magnitude.
#[test]
fn test_signum_neg_and_apply() {
    assert_eq!(-Signum::Positive, Signum::Negative);
    assert_eq!(-(-Signum::Negative), Signum::Negative);
    assert!(Signum::Negative.is_negative());
    assert!(!Signum::default().is_negative());

    assert_eq!(Signum::Negative.to_float::<f64>(), -1.0);
    assert_eq!(Signum::Positive.to_float::<f32>(), 1.0);
    assert_eq!(Signum::Negative.apply(2.5f64), -2.5);
    assert_eq!(Signum::Positive.apply(2.5f64), 2.5);
}

// ============================================================================
// Sign Tests
// ============================================================================

/// Test three-valued classification.
#[test]
fn test_sign_of() {
    assert_eq!(Sign::of(2.0f64), Sign::Positive);
    assert_eq!(Sign::of(-2.0f64), Sign::Negative);
    assert_eq!(Sign::of(0.0f64), Sign::Zero);
    assert_eq!(Sign::of(f64::NAN), Sign::Zero);

    assert_eq!(Sign::Zero.to_float::<f64>(), 0.0);
    assert_eq!(Sign::Negative.to_float::<f64>(), -1.0);
    assert_eq!(Sign::from(Signum::Negative), Sign::Negative);
}

/// Test that zero absorbs in products and is fixed under negation.
#[test]
fn test_sign_zero_absorbs() {
    assert_eq!(Sign::Zero * Sign::Negative, Sign::Zero);
    assert_eq!(Sign::Positive * Sign::Zero, Sign::Zero);
    assert_eq!(Sign::Negative * Sign::Negative, Sign::Positive);
    assert_eq!(-Sign::Zero, Sign::Zero);
    assert_eq!(-Sign::Positive, Sign::Negative);

    let signs = [Sign::Negative, Sign::Zero, Sign::Negative];
    assert_eq!(signs.into_iter().product::<Sign>(), Sign::Zero);

    let signs = [Sign::Negative, Sign::Positive, Sign::Negative];
    assert_eq!(signs.into_iter().product::<Sign>(), Sign::Positive);
}

//! Sign carriers for magnitude-only representations.
//!
//! ## Purpose
//!
//! Log-domain values store `ln|x|` and therefore need the sign of `x` on the
//! side. This module provides the two-valued [`Signum`] used by the
//! multiplicative representation (zero excluded) and the three-valued
//! [`Sign`] for contexts where zero is possible.
//!
//! ## Key concepts
//!
//! * **Parity**: The product of a list of `Signum`s is negative iff the list
//!   holds an odd number of negatives. The empty product is positive.
//! * **Absorbing zero**: For `Sign`, anything times `Zero` is `Zero`.

// External dependencies
use core::iter::Product;
use core::ops::{Mul, Neg};
use num_traits::Float;

// ============================================================================
// Signum (two-valued)
// ============================================================================

/// Sign of a value that is known to be non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Signum {
    /// Strictly negative.
    Negative,

    /// Strictly positive.
    #[default]
    Positive,
}

impl Signum {
    /// Classify a value; `None` for zero and NaN.
    #[inline]
    pub fn of<T: Float>(value: T) -> Option<Self> {
        if value > T::zero() {
            Some(Signum::Positive)
        } else if value < T::zero() {
            Some(Signum::Negative)
        } else {
            None
        }
    }

    /// `+1` or `-1` in `T`.
    #[inline]
    pub fn to_float<T: Float>(self) -> T {
        match self {
            Signum::Negative => -T::one(),
            Signum::Positive => T::one(),
        }
    }

    /// True for `Negative`.
    #[inline]
    pub fn is_negative(self) -> bool {
        self == Signum::Negative
    }

    /// Apply the sign to a magnitude.
    #[inline]
    pub fn apply<T: Float>(self, magnitude: T) -> T {
        match self {
            Signum::Negative => -magnitude,
            Signum::Positive => magnitude,
        }
    }
}

impl Mul for Signum {
    type Output = Signum;

    #[inline]
    fn mul(self, rhs: Signum) -> Signum {
        if self == rhs {
            Signum::Positive
        } else {
            Signum::Negative
        }
    }
}

impl Neg for Signum {
    type Output = Signum;

    #[inline]
    fn neg(self) -> Signum {
        match self {
            Signum::Negative => Signum::Positive,
            Signum::Positive => Signum::Negative,
        }
    }
}

impl Product for Signum {
    fn product<I: Iterator<Item = Signum>>(iter: I) -> Signum {
        iter.fold(Signum::Positive, Mul::mul)
    }
}

impl<'a> Product<&'a Signum> for Signum {
    fn product<I: Iterator<Item = &'a Signum>>(iter: I) -> Signum {
        iter.copied().product()
    }
}

// ============================================================================
// Sign (three-valued)
// ============================================================================

/// Sign of an arbitrary value, including zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Strictly negative.
    Negative,

    /// Exactly zero.
    Zero,

    /// Strictly positive.
    Positive,
}

impl Sign {
    /// Classify a value. NaN is treated as zero.
    #[inline]
    pub fn of<T: Float>(value: T) -> Self {
        Signum::of(value).map_or(Sign::Zero, Sign::from)
    }

    /// `-1`, `0`, or `+1` in `T`.
    #[inline]
    pub fn to_float<T: Float>(self) -> T {
        match self {
            Sign::Negative => -T::one(),
            Sign::Zero => T::zero(),
            Sign::Positive => T::one(),
        }
    }
}

impl From<Signum> for Sign {
    #[inline]
    fn from(signum: Signum) -> Self {
        match signum {
            Signum::Negative => Sign::Negative,
            Signum::Positive => Sign::Positive,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    #[inline]
    fn mul(self, rhs: Sign) -> Sign {
        match (self, rhs) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl Product for Sign {
    fn product<I: Iterator<Item = Sign>>(iter: I) -> Sign {
        iter.fold(Sign::Positive, Mul::mul)
    }
}

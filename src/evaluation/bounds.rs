//! Value/bound pairs for presentation layers.
//!
//! ## Purpose
//!
//! Downstream consumers (charts, tables) need a central value and an ordered
//! interval. This module derives one from either representation.
//!
//! ## Invariants
//!
//! * `lower_bound <= value <= upper_bound` for finite input.
//! * Multiplicative bounds are ordered with `min`/`max`, since for a negative
//!   value `v·m < v/m` is reversed.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::additive::UncertainValue;
use crate::algorithms::multiplicative::MultiplicativeUncertainValue;

/// A central value with its lower and upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedValue<T = f64> {
    /// Central value.
    pub value: T,

    /// Lower end of the uncertainty interval.
    pub lower_bound: T,

    /// Upper end of the uncertainty interval.
    pub upper_bound: T,
}

/// Types that expose a value with an uncertainty interval.
pub trait Bounded<T> {
    /// Value and interval.
    fn bounds(&self) -> BoundedValue<T>;
}

impl<T: Float> Bounded<T> for UncertainValue<T> {
    #[inline]
    fn bounds(&self) -> BoundedValue<T> {
        BoundedValue {
            value: self.value(),
            lower_bound: self.value() - self.absolute_error(),
            upper_bound: self.value() + self.absolute_error(),
        }
    }
}

impl<T: Float> Bounded<T> for MultiplicativeUncertainValue<T> {
    #[inline]
    fn bounds(&self) -> BoundedValue<T> {
        let (v, m) = (self.value(), self.multiplicative_error());
        let (up, down) = (v * m, v / m);
        BoundedValue {
            value: v,
            lower_bound: up.min(down),
            upper_bound: up.max(down),
        }
    }
}

//! Error types for uncertainty propagation.
//!
//! ## Purpose
//!
//! This module defines the single error enum returned by every fallible
//! operation in the crate. Each variant names one numeric domain violation so
//! that callers can decide whether to propagate, substitute a fallback, or
//! abort.
//!
//! ## Design notes
//!
//! * **Pure data**: Errors carry no context beyond what is needed to render
//!   the message; there is no global error state and no logging side effect.
//! * **no_std**: `thiserror` is used without its `std` feature so the type
//!   implements `core::error::Error` in every build.
//!
//! ## Invariants
//!
//! * No operation silently returns NaN or infinity where a variant applies.
//!
//! ## Non-goals
//!
//! * This module does not provide error recovery or retry helpers.

// External dependencies
use thiserror::Error;

// ============================================================================
// Error Enum
// ============================================================================

/// Failure conditions raised by uncertain arithmetic and estimators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UncertainError {
    /// Reciprocal or division of an exactly-zero additive value.
    #[error("Division by zero: divisor is exactly zero")]
    DivisionByZero,

    /// A zero central value where the representation or estimator excludes zero.
    #[error("Zero input: value must be non-zero")]
    ZeroInput,

    /// A result or required intermediate is NaN or infinite.
    #[error("Non-finite result in {0}")]
    NonFinite(&'static str),

    /// Real power of a negative base.
    #[error("Negative input: real power of a negative base is undefined")]
    NegativeInput,

    /// Logarithm of a value that is zero or negative.
    #[error("Non-positive input: logarithm requires a value > 0")]
    NonPositiveInput,

    /// Scale factor is zero or non-finite.
    #[error("Invalid scale factor: must be finite and non-zero")]
    InvalidScale,

    /// Multiplicative error factor below one or non-finite.
    #[error("Invalid multiplicative error: factor must be finite and >= 1")]
    InvalidMultiplicativeError,

    /// A structural domain constraint is violated.
    #[error("Invalid value: {0}")]
    InvalidValue(&'static str),

    /// The operation needs at least one element.
    #[error("Empty collection: at least one element is required")]
    EmptyCollection,

    /// The operation needs more elements than were supplied.
    #[error("Insufficient elements: got {actual}, need at least {required}")]
    InsufficientElements {
        /// Minimum number of elements.
        required: usize,
        /// Number of elements supplied.
        actual: usize,
    },

    /// Geometric mean input contains both positive and negative values.
    #[error("Mixed signs: all values must share the same sign")]
    MixedSigns,
}

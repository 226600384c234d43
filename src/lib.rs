//! # uncertain-rs — Measurement Uncertainty Propagation for Rust
//!
//! A library for carrying measurement uncertainty through arithmetic. Every
//! operation computes both the resulting value and its uncertainty, combining
//! independent error contributions with a caller-selected norm.
//!
//! ## What is error propagation?
//!
//! A measured quantity is a central value plus an error term. When quantities
//! are combined, each input's error contributes to the output's error through
//! the first derivative of the operation (linearisation). Independent
//! contributions are then collapsed into one number:
//!
//! - **L1**: `Σ|eᵢ|` (worst case, errors always align)
//! - **L2**: `√(Σeᵢ²)` (independent Gaussian-like errors, the default)
//! - **Lp**: `(Σ|eᵢ|^p)^(1/p)`
//!
//! **Two representations:**
//!
//! | Type                            | Stores                     | Zero? | Fallible division |
//! |---------------------------------|----------------------------|-------|-------------------|
//! | `UncertainValue`                | value ± absolute error     | Yes   | Yes               |
//! | `MultiplicativeUncertainValue`  | sign, ln\|value\| ± ln(m)  | No    | No                |
//!
//! ## Quick Start
//!
//! ```rust
//! use uncertain_rs::prelude::*;
//!
//! let a = UncertainValue::new(10.0_f64, 0.3);
//! let b = UncertainValue::new(5.0, 0.4);
//!
//! // 3-4-5 triangle: errors combine in quadrature
//! let sum = a.adding(&b, L2);
//! assert_eq!(sum.value(), 15.0);
//! assert!((sum.absolute_error() - 0.5).abs() < 1e-12);
//!
//! // Relative errors combine for products
//! let x = UncertainValue::with_relative_error(10.0_f64, 0.05);
//! let y = UncertainValue::with_relative_error(5.0, 0.04);
//! let product = x.multiplying(&y, L2);
//! assert_eq!(product.value(), 50.0);
//! assert!((product.relative_error() - 0.0640312).abs() < 1e-6);
//!
//! println!("{:.3}", product);
//! ```
//!
//! ```text
//! 50.000 ± 3.202
//! ```
//!
//! ### Result and Error Handling
//!
//! Operations that can leave their numeric domain return
//! `Result<_, UncertainError>`; nothing silently produces NaN.
//!
//! ```rust
//! use uncertain_rs::prelude::*;
//!
//! let zero = UncertainValue::new(0.0_f64, 0.1);
//! let one = UncertainValue::new(1.0, 0.0);
//!
//! match one.dividing(&zero, L2) {
//!     Ok(q) => println!("quotient: {}", q),
//!     Err(e) => assert_eq!(e, UncertainError::DivisionByZero),
//! }
//! ```
//!
//! The multiplicative representation cannot hold zero, so its reciprocal
//! never fails:
//!
//! ```rust
//! use uncertain_rs::prelude::*;
//!
//! let m = MultiplicativeUncertainValue::new(-4.0_f64, 1.1)?;
//! let r = m.reciprocal();
//! assert!((r.value() + 0.25).abs() < 1e-12);
//! assert!((r.multiplicative_error() - 1.1).abs() < 1e-12);
//! # Result::<(), UncertainError>::Ok(())
//! ```
//!
//! ## Statistics
//!
//! The estimators produce uncertain values that agree with pairwise
//! propagation.
//!
//! ```rust
//! use uncertain_rs::prelude::*;
//!
//! let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
//!
//! // Mean with the sample standard deviation as error
//! let mean = data.arithmetic_mean()?;
//! assert_eq!(mean.value(), 3.0);
//! assert!((mean.absolute_error() - 2.5_f64.sqrt()).abs() < 1e-12);
//!
//! // The vectorised path agrees with the direct one
//! let fast = data.arithmetic_mean_with(Backend::Simd)?;
//! assert!((fast.value() - mean.value()).abs() < 1e-10);
//!
//! // Geometric mean lives in the log domain
//! let g = [1.0_f64, 2.0, 4.0].geometric_mean()?;
//! assert!((g.value() - 2.0).abs() < 1e-12);
//! # Result::<(), UncertainError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter      | Default  | Options                | Description                           |
//! |----------------|----------|------------------------|---------------------------------------|
//! | **strategy**   | `L2`     | `L1`, `L2`, `Lp(p)`    | How independent errors are combined   |
//! | **backend**    | `Scalar` | `Scalar`, `Simd`       | Estimator evaluation path             |
//!
//! Operator overloads and `Sum`/`Product` (which cannot take a parameter)
//! use the default strategy.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! uncertain_rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## Non-goals
//!
//! - Full probability distributions or Monte-Carlo sampling
//! - Correlated errors / covariance matrices
//! - Symbolic differentiation
//!
//! ## References
//!
//! - JCGM 100:2008, "Evaluation of measurement data — Guide to the expression of uncertainty in measurement"
//! - Taylor, J. R. (1997). "An Introduction to Error Analysis"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error type, sign carriers, validation.
//
// Contains `UncertainError`, `Signum`/`Sign`, the `Backend` hint and the
// fail-fast `Validator`.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains norm strategies, max-magnitude scaling, the n-ary algebra traits
// and the SIMD reductions.
mod math;

// Layer 3: Algorithms - the two value engines.
//
// Contains `UncertainValue`, its powers/transcendental/derived functions,
// `MultiplicativeUncertainValue`, and the conversions between them.
mod algorithms;

// Layer 4: Evaluation - reductions over collections.
//
// Contains min/max selection, statistical estimators and bounded values.
mod evaluation;

// High-level API.
//
// Provides the slice extension traits and the public re-exports.
mod api;

// ============================================================================
// Public Surface
// ============================================================================

pub use api::{
    Backend, Bounded, BoundedValue, FloatStatistics, MultiplicativeUncertainValue,
    NormProductable, NormStrategy, NormSummable, Sign, Signum, UncertainError,
    UncertainStatistics, UncertainValue, bounded_values, norm, norm1, norm2, normp,
};

// ============================================================================
// Prelude
// ============================================================================

/// Standard uncertain-rs prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use uncertain_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Backend, Bounded, BoundedValue, FloatStatistics, MultiplicativeUncertainValue,
        NormStrategy,
        NormStrategy::{L1, L2, Lp},
        Sign, Signum, UncertainError, UncertainStatistics, UncertainValue,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal value engines.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal reductions and estimators.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}

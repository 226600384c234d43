//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the two value engines and everything that
//! propagates error through them:
//! - `UncertainValue`: central value with an absolute error (can be zero)
//! - Powers and transcendental functions via first-derivative rules
//! - Multi-input derived functions with closed-form partial derivatives
//! - `MultiplicativeUncertainValue`: sign plus log-magnitude (never zero)
//! - Conversions between the two
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Additive representation and its arithmetic.
pub mod additive;

/// Powers, logarithm, exponential, and trigonometric functions.
pub mod functions;

/// Multi-input derived functions.
pub mod derived;

/// Log-domain (multiplicative) representation.
pub mod multiplicative;

/// Conversions between the representations.
pub mod conversion;

//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures every other layer builds on:
//! - The error taxonomy (`UncertainError`)
//! - Sign carriers for log-domain values (`Signum`, `Sign`)
//! - The execution backend hint for the statistical estimators
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for uncertainty propagation.
pub mod errors;

/// Two- and three-valued sign types.
pub mod signum;

/// Execution backend selection for the estimators.
pub mod backend;

/// Numeric casts shared by the generic code.
pub(crate) mod cast;

/// Fail-fast domain checks.
pub mod validator;

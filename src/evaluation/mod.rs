//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer reduces collections of values:
//! - Min/max selection with deterministic tie-breaking, and generic n-ary
//!   sum/product dispatch
//! - Statistical estimators (arithmetic mean, sample standard deviation,
//!   geometric mean) with direct and vectorised paths
//! - Value/bounds pairs for downstream presentation
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// List helpers over uncertain values.
pub mod collections;

/// Statistical estimators.
pub mod statistics;

/// Value/lower/upper bound pairs.
pub mod bounds;

//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by both value engines:
//! - Norm strategies for collapsing independent error contributions
//! - Max-magnitude scaling for overflow-safe sums and means
//! - The n-ary algebra traits both representations implement
//! - Vectorised reductions backing the fast estimator path
//!
//! These are reusable mathematical building blocks with no representation-specific logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Norm strategies (L1, L2, Lp).
pub mod norm;

/// Max-magnitude scaled sums and means.
pub mod scaling;

/// `NormSummable` / `NormProductable` traits.
pub mod algebra;

/// Scalar and SIMD reductions for the estimators.
pub mod reduce;

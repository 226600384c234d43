//! Execution backend selection for the statistical estimators.
//!
//! ## Purpose
//!
//! This module defines the `Backend` enum used to pick between the direct
//! scalar formulation of the mean/standard-deviation estimator and the
//! vectorised one built on `wide` lanes.
//!
//! ## Design notes
//!
//! * **Interchangeable**: Both backends implement the same max-magnitude
//!   scaled formula and agree to near machine precision for finite input.
//! * **Explicit**: The backend is passed per call; there is no global default.

/// Execution backend hint for the estimators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Direct element-by-element evaluation.
    #[default]
    Scalar,

    /// SIMD lane evaluation (`f64x2` / `f32x4`) with a scalar tail.
    Simd,
}

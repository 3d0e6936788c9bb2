//! bootstrap — variance estimation for the squared sample mean.
//!
//! Purpose
//! -------
//! Collect the bootstrap-variance machinery for the statistic
//! T = (x̄)²: central sample moments, the two analytic (delta-method)
//! approximations to Var(T*), and the Monte Carlo simulation they are
//! validated against, together with shared input validation and error
//! handling, including Python bridges for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Expose central moment computation via [`sample_mean`] and
//!   [`central_moment`] with the divide-by-n convention throughout.
//! - Provide the plug-in and refined analytic estimators through the
//!   [`SquaredMeanVariance`] value object and the free functions
//!   [`plug_in_variance`] / [`refined_variance`].
//! - Provide a seedable Monte Carlo reference via
//!   [`monte_carlo_variance`], generic over any [`rand::Rng`].
//! - Centralize input guards in [`validate_sample`] and
//!   `validate_replicates`, applied once per public entry point.
//! - Provide a dedicated error type [`BootError`] and result alias
//!   [`BootResult`], plus a conversion layer to Python exceptions when
//!   the `python-bindings` feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Samples are plain `&[f64]` slices, expected non-empty and fully
//!   finite; every public entry point validates before computing.
//! - All routines in this subtree report failures via [`BootResult`] and
//!   never panic on user-facing invalid inputs.
//! - Analytic and simulated estimators share one moment convention, so
//!   their values are directly comparable.
//! - At the Python boundary, all [`BootError`] values are mapped into a
//!   single exception class (`PyValueError`) with the Rust `Display`
//!   message preserved verbatim.
//!
//! Conventions
//! -----------
//! - This subtree is focused on *bootstrap variance*; optimizer and
//!   regression error types live in their own `errors` modules under the
//!   relevant subtrees.
//! - Error messages are phrased in terms of domain constraints such as
//!   "sample must be non-empty" or "replicates must be at least 1".
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use bootfit::bootstrap::{SquaredMeanVariance, BootResult};
//!
//!   fn both(sample: &[f64]) -> BootResult<(f64, f64)> {
//!       let est = SquaredMeanVariance::estimate(sample)?;
//!       Ok((est.plug_in(), est.refined()))
//!   }
//!   ```
//!
//!   and only refers to `bootstrap::moments` or `bootstrap::validation`
//!   directly when reusing the lower-level pieces.
//! - Python bindings expose thin wrappers around the same Rust entry
//!   points; they rely on `From<BootError> for PyErr` to raise
//!   `ValueError` instances instead of returning [`BootResult`]
//!   explicitly.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`errors`] verify `Display` messages and payload
//!   embedding for [`BootError`] variants.
//! - Unit tests in [`validation`] exercise all branches of the guards.
//! - Unit tests in [`moments`], [`variance`], and [`monte_carlo`] cover
//!   hand-computed values, idempotence, seeded reproducibility, and
//!   degenerate inputs; cross-estimator agreement at large replicate
//!   counts lives in the integration tests.

pub mod errors;
pub mod moments;
pub mod monte_carlo;
pub mod validation;
pub mod variance;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{BootError, BootResult};
pub use self::moments::{central_moment, sample_mean};
pub use self::monte_carlo::monte_carlo_variance;
pub use self::validation::validate_sample;
pub use self::variance::{plug_in_variance, refined_variance, SquaredMeanVariance};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use bootfit::bootstrap::prelude::*;
//
// to import the main bootstrap surface in a single line.

pub mod prelude {
    pub use super::errors::{BootError, BootResult};
    pub use super::monte_carlo::monte_carlo_variance;
    pub use super::variance::{plug_in_variance, refined_variance, SquaredMeanVariance};
}

//! bootstrap::validation — shared input guards for the estimators.
//!
//! Purpose
//! -------
//! Centralize basic input validation for the bootstrap-variance routines
//! in this crate. This avoids duplicating checks on sample length, data
//! finiteness, and the Monte Carlo replicate count across modules.
//!
//! Key behaviors
//! -------------
//! - Enforce simple preconditions on samples before any moment sums are
//!   formed.
//! - Map invalid inputs into structured [`BootError`] values for
//!   consistent error handling in Rust and Python bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - Samples must be non-empty (the sample mean is undefined otherwise).
//! - All sample values must be finite (`!NaN`, not ±∞).
//! - The Monte Carlo replicate count `B` must satisfy `B ≥ 1`.
//!
//! Conventions
//! -----------
//! - This module is purely about *validation*; it performs no I/O and
//!   does not allocate beyond what error construction requires.
//! - Callers treat a successful return (`Ok(())`) as a guarantee that
//!   downstream moment arithmetic cannot divide by zero or ingest NaN.
//!
//! Downstream usage
//! ----------------
//! - Call [`validate_sample`] at the top of every public estimator entry
//!   point before computing moments or resampling.
//! - Call [`validate_replicates`] in the Monte Carlo estimator.
//!
//! Testing notes
//! -------------
//! - Unit tests cover all error branches and a simple success path.

use crate::bootstrap::errors::{BootError, BootResult};

/// Validate basic constraints on an input sample.
///
/// Parameters
/// ----------
/// - `sample`: `&[f64]`
///   Ordered sequence of real-valued observations. Must be non-empty,
///   and every value must be finite (no `NaN` or ±∞).
///
/// Returns
/// -------
/// `BootResult<()>`
///   - `Ok(())` if the sample is non-empty and fully finite.
///   - `Err(BootError)` identifying the violated constraint.
///
/// Errors
/// ------
/// - `BootError::EmptySample`
///   Returned when `sample.len() == 0`.
/// - `BootError::NonFiniteSample(value)`
///   Returned when any element is not finite, with `value` set to the
///   first offending entry.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `BootError`.
pub fn validate_sample(sample: &[f64]) -> BootResult<()> {
    if sample.is_empty() {
        return Err(BootError::EmptySample);
    }

    for &value in sample {
        if !value.is_finite() {
            return Err(BootError::NonFiniteSample(value));
        }
    }

    Ok(())
}

/// Validate the Monte Carlo replicate count.
///
/// # Errors
/// Returns [`BootError::InvalidReplicates`] if `replicates == 0`.
pub fn validate_replicates(replicates: usize) -> BootResult<()> {
    if replicates == 0 {
        return Err(BootError::InvalidReplicates(replicates));
    }
    Ok(())
}

//! Validation helpers for gradient-descent optimization.
//!
//! This module centralizes common consistency checks used across the
//! optimizer interface:
//!
//! - **Option checks**: [`verify_step_size`], [`verify_tol_grad`], and
//!   [`verify_max_iter`] ensure descent settings are finite, strictly
//!   positive, and non-degenerate when provided.
//! - **Gradient validation**: [`validate_grad`] enforces correct dimension
//!   and finite entries.
//! - **Parameter estimates**: [`validate_params_hat`] ensures a candidate
//!   estimate contains only finite values.
//! - **Objective values**: [`validate_value`] checks objective outputs
//!   for finiteness.
//!
//! These helpers standardize error reporting by returning domain-specific
//! [`DescentError`] variants, making higher-level code more uniform and
//! easier to debug.
use crate::optimization::{
    errors::{DescentError, DescentResult},
    types::{Grad, Params},
};

/// Validate the fixed step size.
///
/// The value must be **finite** and **strictly positive**.
///
/// # Errors
/// Returns [`DescentError::InvalidStepSize`] if the value is non-finite or ≤ 0.0.
pub fn verify_step_size(step: f64) -> DescentResult<()> {
    if !step.is_finite() {
        return Err(DescentError::InvalidStepSize { step, reason: "Step size must be finite." });
    }
    if step <= 0.0 {
        return Err(DescentError::InvalidStepSize { step, reason: "Step size must be positive." });
    }
    Ok(())
}

/// Validate the optional gradient-norm tolerance.
///
/// - Accepts `None` (no stopping rule on gradient; the iteration cap is
///   the only terminator).
/// - If `Some`, the value must be **finite** and **strictly positive**.
///
/// # Errors
/// Returns [`DescentError::InvalidTolGrad`] if the value is non-finite or ≤ 0.0.
pub fn verify_tol_grad(tol: Option<f64>) -> DescentResult<()> {
    if let Some(tol) = tol {
        if !tol.is_finite() {
            return Err(DescentError::InvalidTolGrad { tol, reason: "Tolerance must be finite." });
        }
        if tol <= 0.0 {
            return Err(DescentError::InvalidTolGrad { tol, reason: "Tolerance must be positive." });
        }
    }
    Ok(())
}

/// Validate the iteration cap.
///
/// # Errors
/// Returns [`DescentError::InvalidMaxIter`] if `max_iter == 0`.
pub fn verify_max_iter(max_iter: usize) -> DescentResult<()> {
    if max_iter == 0 {
        return Err(DescentError::InvalidMaxIter {
            max_iter,
            reason: "Maximum iterations must be greater than zero.",
        });
    }
    Ok(())
}

/// Validate a gradient vector against dimension and finiteness.
///
/// Checks:
/// - `grad.len() == dim`
/// - every element is finite (`NaN` or `±∞` are rejected)
///
/// # Errors
/// - [`DescentError::GradientDimMismatch`] if length does not match `dim`.
/// - [`DescentError::InvalidGradient`] with the index/value/reason of the
///   first offending element.
pub fn validate_grad(grad: &Grad, dim: usize) -> DescentResult<()> {
    if grad.len() != dim {
        return Err(DescentError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    for (index, &value) in grad.iter().enumerate() {
        if !value.is_finite() {
            return Err(DescentError::InvalidGradient {
                index,
                value,
                reason: "Gradient elements must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate an estimated parameter vector.
///
/// Accepts only a vector with all **finite** entries.
///
/// # Errors
/// Returns [`DescentError::InvalidParamsHat`] if any element is non-finite.
pub fn validate_params_hat(params_hat: &Params) -> DescentResult<()> {
    for (index, &value) in params_hat.iter().enumerate() {
        if !value.is_finite() {
            return Err(DescentError::InvalidParamsHat {
                index,
                value,
                reason: "Parameter estimates must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate that a scalar objective value is finite.
///
/// Negative values are fine as long as they are finite.
///
/// # Errors
/// Returns [`DescentError::NonFiniteCost`] if the value is `NaN` or infinite.
pub fn validate_value(value: f64) -> DescentResult<()> {
    if !value.is_finite() {
        return Err(DescentError::NonFiniteCost { value });
    }
    Ok(())
}

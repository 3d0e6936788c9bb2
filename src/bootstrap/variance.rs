//! bootstrap::variance — analytic variance of the squared resample mean.
//!
//! Purpose
//! -------
//! Implement the two analytic (delta-method) approximations to the
//! variance of the bootstrap distribution of the squared sample mean
//! T* = (x̄*)², built from the first four central sample moments. These
//! are the closed-form counterparts of the Monte Carlo reference in
//! [`monte_carlo`](crate::bootstrap::monte_carlo).
//!
//! Key behaviors
//! -------------
//! - Compute the plug-in (first-order delta-method, "Wasserman")
//!   approximation
//!   v̂ = 4 x̄² M₂ / n + 4 x̄ M₃ / n² + M₄ / n³ via [`plug_in_variance`].
//! - Compute the refined approximation that adds the finite-sample
//!   correction (2n − 3) M₂² to the quartic component via
//!   [`refined_variance`].
//! - Expose a compact [`SquaredMeanVariance`] value object that computes
//!   both figures from a single pass over the moments, with scalar
//!   accessors suitable for Rust and Python bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - Moments M₂, M₃, M₄ use the divide-by-n convention of
//!   [`moments`](crate::bootstrap::moments); the formulas are derived
//!   under exactly that normalization.
//! - Both estimators are deterministic in the sample: calling either one
//!   twice on the same slice is bit-identical.
//! - Input validation (non-empty, fully finite) is delegated to
//!   `bootstrap::validation::validate_sample`, which returns
//!   [`BootResult`] rather than panicking.
//!
//! Conventions
//! -----------
//! - The plain delta-method quartic term M₄ / n³ omits a second-order
//!   M₂² / n² contribution that matters for small n; the (2n − 3)
//!   coefficient restores it, and in fact makes the refined formula
//!   algebraically exact for Var(T*) under iid resampling. Both
//!   estimators therefore converge as n grows, with the refined one
//!   closer to the Monte Carlo reference for small n.
//!
//! Downstream usage
//! ----------------
//! - Call [`SquaredMeanVariance::estimate`] when both figures are wanted
//!   (the usual case when validating one against the other), or the free
//!   functions when only one is needed.
//! - Python bindings expose only the [`SquaredMeanVariance`] surface.
//!
//! Testing notes
//! -------------
//! - Unit tests verify the formulas against hand-computed moments on
//!   x = [0, 1, −1, 2], bit-identical repeatability, and agreement
//!   between the value object and the free functions.
//! - Integration tests compare both estimators against the seeded Monte
//!   Carlo reference and check the shrinking gap as n grows.
use crate::bootstrap::errors::BootResult;
use crate::bootstrap::moments::{mean_unchecked, moment_unchecked};
use crate::bootstrap::validation::validate_sample;

/// SquaredMeanVariance — paired analytic bootstrap-variance estimates.
///
/// Purpose
/// -------
/// Hold the plug-in and refined approximations to Var(T*), T* = (x̄*)²,
/// computed on one sample in a single pass over the central moments.
///
/// Fields
/// ------
/// - `plug_in`: `f64`
///   First-order delta-method value 4 x̄² M₂ / n + 4 x̄ M₃ / n² + M₄ / n³.
/// - `refined`: `f64`
///   Same leading terms with the quartic component replaced by
///   (M₄ + (2n − 3) M₂²) / n³.
///
/// Invariants
/// ----------
/// - Both fields are finite whenever construction succeeds; validation
///   rejects samples that could produce NaN.
/// - `refined − plug_in = (2n − 3) M₂² / n³`, which is non-negative for
///   n ≥ 2.
///
/// Performance
/// -----------
/// - Stores two scalars and derives `Copy`; construction is O(n) with no
///   allocation.
///
/// Notes
/// -----
/// - Designed as a simple value object; it does not own the sample.
#[derive(Debug, Copy, Clone)]
pub struct SquaredMeanVariance {
    plug_in: f64,
    refined: f64,
}

impl SquaredMeanVariance {
    /// Compute both analytic estimates for a sample.
    ///
    /// Parameters
    /// ----------
    /// - `sample`: `&[f64]`
    ///   Non-empty sequence of finite observations.
    ///
    /// Returns
    /// -------
    /// `BootResult<SquaredMeanVariance>`
    ///   Both approximations, computed from the same x̄, M₂, M₃, M₄.
    ///
    /// Errors
    /// ------
    /// - [`BootError`](crate::bootstrap::errors::BootError) variants from
    ///   sample validation (empty or non-finite input).
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use bootfit::bootstrap::variance::SquaredMeanVariance;
    ///
    /// let sample = vec![0.0, 1.0, -1.0, 2.0];
    /// let est = SquaredMeanVariance::estimate(&sample).unwrap();
    /// assert!(est.refined() >= est.plug_in());
    /// ```
    pub fn estimate(sample: &[f64]) -> BootResult<Self> {
        validate_sample(sample)?;
        let n = sample.len() as f64;
        let mean = mean_unchecked(sample);
        let m2 = moment_unchecked(sample, 2, mean);
        let m3 = moment_unchecked(sample, 3, mean);
        let m4 = moment_unchecked(sample, 4, mean);

        let leading = 4.0 * mean * mean * m2 / n + 4.0 * mean * m3 / (n * n);
        let n_cubed = n * n * n;

        Ok(SquaredMeanVariance {
            plug_in: leading + m4 / n_cubed,
            refined: leading + (m4 + (2.0 * n - 3.0) * m2 * m2) / n_cubed,
        })
    }

    /// First-order delta-method (plug-in) estimate of Var(T*).
    pub fn plug_in(&self) -> f64 {
        self.plug_in
    }

    /// Refined estimate with the (2n − 3) M₂² small-sample correction.
    pub fn refined(&self) -> f64 {
        self.refined
    }
}

/// Plug-in ("Wasserman") delta-method estimate of Var((x̄*)²).
///
/// Equivalent to [`SquaredMeanVariance::estimate`]`(sample)?.plug_in()`.
///
/// # Errors
/// Propagates sample-validation failures.
pub fn plug_in_variance(sample: &[f64]) -> BootResult<f64> {
    Ok(SquaredMeanVariance::estimate(sample)?.plug_in())
}

/// Refined estimate of Var((x̄*)²) with the (2n − 3) M₂² correction.
///
/// Equivalent to [`SquaredMeanVariance::estimate`]`(sample)?.refined()`.
///
/// # Errors
/// Propagates sample-validation failures.
pub fn refined_variance(sample: &[f64]) -> BootResult<f64> {
    Ok(SquaredMeanVariance::estimate(sample)?.refined())
}

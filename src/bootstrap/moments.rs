//! bootstrap::moments — sample mean and k-th central sample moments.
//!
//! Purpose
//! -------
//! Provide the leaf numerical utilities shared by every estimator in this
//! subtree: the arithmetic sample mean and the k-th central sample moment
//! Mₖ = (1 / n) ∑ᵢ (xᵢ − x̄)ᵏ with the divide-by-n convention.
//!
//! Key behaviors
//! -------------
//! - Expose validated public entry points ([`sample_mean`],
//!   [`central_moment`]) that reject empty or non-finite samples and a
//!   moment order of zero.
//! - Provide unchecked private helpers for callers inside this subtree
//!   that have already validated their inputs once.
//!
//! Invariants & assumptions
//! ------------------------
//! - All moments use the population (divide-by-n) normalization; k = 2 is
//!   the biased sample variance. The analytic variance estimators in
//!   [`variance`](crate::bootstrap::variance) are derived under exactly
//!   this convention and must not be mixed with divide-by-(n−1) moments.
//! - The unchecked helpers assume a non-empty, fully finite sample; the
//!   public entry points guarantee this via
//!   [`validate_sample`](crate::bootstrap::validation::validate_sample).
//!
//! Conventions
//! -----------
//! - Samples are plain `&[f64]` slices; each call is a pure function of
//!   its arguments with no hidden state.
//! - Errors surface as [`BootError`](crate::bootstrap::errors::BootError)
//!   via [`BootResult<T>`]; this module never panics on user input.
//!
//! Downstream usage
//! ----------------
//! - The analytic estimators in `variance` and the Monte Carlo reference
//!   in `monte_carlo` build on the helpers here.
//! - External callers needing a single moment use [`central_moment`]
//!   directly.
//!
//! Testing notes
//! -------------
//! - Unit tests verify the k = 2 moment against an independently computed
//!   population variance, odd moments of symmetric samples, and the error
//!   branches for empty input and k = 0.
use crate::bootstrap::errors::{BootError, BootResult};
use crate::bootstrap::validation::validate_sample;

/// Compute the arithmetic mean x̄ = (1 / n) ∑ᵢ xᵢ of a sample.
///
/// # Errors
/// - [`BootError::EmptySample`] if the sample is empty.
/// - [`BootError::NonFiniteSample`] if any value is NaN or ±∞.
pub fn sample_mean(sample: &[f64]) -> BootResult<f64> {
    validate_sample(sample)?;
    Ok(mean_unchecked(sample))
}

/// Compute the k-th central sample moment Mₖ = (1 / n) ∑ᵢ (xᵢ − x̄)ᵏ.
///
/// Parameters
/// ----------
/// - `sample`: `&[f64]`
///   Non-empty sequence of finite observations.
/// - `order`: `u32`
///   Moment order k; must satisfy k ≥ 1. k = 1 is identically zero up to
///   rounding, k = 2 is the population (divide-by-n) variance.
///
/// Returns
/// -------
/// `BootResult<f64>`
///   The moment value under the divide-by-n convention.
///
/// Errors
/// ------
/// - [`BootError::InvalidMomentOrder`] when `order == 0`.
/// - [`BootError::EmptySample`] / [`BootError::NonFiniteSample`] from
///   sample validation.
///
/// Examples
/// --------
/// ```rust
/// use bootfit::bootstrap::moments::central_moment;
///
/// let sample = vec![0.0, 1.0, -1.0, 2.0];
/// let m2 = central_moment(&sample, 2).unwrap();
/// assert!((m2 - 1.25).abs() < 1e-12);
/// ```
pub fn central_moment(sample: &[f64], order: u32) -> BootResult<f64> {
    if order == 0 {
        return Err(BootError::InvalidMomentOrder(order));
    }
    validate_sample(sample)?;
    let mean = mean_unchecked(sample);
    Ok(moment_unchecked(sample, order, mean))
}

//
// ---------- Private helpers (assume validated input) ----------
//

/// Arithmetic mean of a non-empty sample. Callers must have validated.
#[inline]
pub(crate) fn mean_unchecked(sample: &[f64]) -> f64 {
    let sum: f64 = sample.iter().sum();
    sum / sample.len() as f64
}

/// k-th central moment about a precomputed mean. Callers must have
/// validated the sample and `order ≥ 1`.
#[inline]
pub(crate) fn moment_unchecked(sample: &[f64], order: u32, mean: f64) -> f64 {
    let n = sample.len() as f64;
    sample.iter().map(|&x| (x - mean).powi(order as i32)).sum::<f64>() / n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::errors::BootError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Agreement of the k = 2 moment with an independent population
    //   variance computation.
    // - Vanishing odd moments of symmetric samples.
    // - Error branches: empty sample, zero moment order.
    //
    // They intentionally DO NOT cover:
    // - The analytic variance estimators built on these moments (covered
    //   in bootstrap::variance and the integration tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `central_moment(x, 2)` equals the population
    // (divide-by-n) variance computed independently.
    //
    // Given
    // -----
    // - A sample of length 5 with a non-trivial spread.
    //
    // Expect
    // ------
    // - The k = 2 moment matches sum((x - mean)^2) / n to 1e-12.
    fn central_moment_order_two_matches_population_variance() {
        // Arrange
        let sample = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let n = sample.len() as f64;
        let mean: f64 = sample.iter().sum::<f64>() / n;
        let expected: f64 = sample.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / n;

        // Act
        let m2 = central_moment(&sample, 2).expect("moment should compute for a finite sample");

        // Assert
        assert!(
            (m2 - expected).abs() < 1e-12,
            "expected population variance {expected}, got {m2}"
        );
    }

    #[test]
    // Purpose
    // -------
    // Check that the third central moment of a symmetric sample is zero
    // up to rounding.
    //
    // Given
    // -----
    // - A sample symmetric about its mean: [-2, -1, 1, 2].
    //
    // Expect
    // ------
    // - `central_moment(x, 3)` is within 1e-12 of 0.
    fn central_moment_order_three_vanishes_for_symmetric_sample() {
        // Arrange
        let sample = vec![-2.0_f64, -1.0, 1.0, 2.0];

        // Act
        let m3 = central_moment(&sample, 3).expect("moment should compute for a finite sample");

        // Assert
        assert!(m3.abs() < 1e-12, "odd moment of a symmetric sample should vanish, got {m3}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure that the first central moment is zero up to rounding for
    // any sample, since deviations about the mean cancel.
    //
    // Given
    // -----
    // - An asymmetric sample of length 4.
    //
    // Expect
    // ------
    // - `central_moment(x, 1)` is within 1e-12 of 0.
    fn central_moment_order_one_is_zero() {
        // Arrange
        let sample = vec![0.0_f64, 1.0, -1.0, 2.0];

        // Act
        let m1 = central_moment(&sample, 1).expect("moment should compute for a finite sample");

        // Assert
        assert!(m1.abs() < 1e-12, "first central moment should vanish, got {m1}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that an empty sample is rejected with
    // `BootError::EmptySample` rather than producing NaN.
    //
    // Given
    // -----
    // - An empty slice and k = 2.
    //
    // Expect
    // ------
    // - `central_moment` returns `Err(BootError::EmptySample)`.
    fn central_moment_empty_sample_returns_error() {
        // Arrange
        let sample: Vec<f64> = Vec::new();

        // Act
        let result = central_moment(&sample, 2);

        // Assert
        match result {
            Err(BootError::EmptySample) => (),
            other => panic!("expected EmptySample error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that a moment order of zero is rejected with
    // `BootError::InvalidMomentOrder(0)`.
    //
    // Given
    // -----
    // - A valid sample and k = 0.
    //
    // Expect
    // ------
    // - `central_moment` returns `Err(BootError::InvalidMomentOrder(0))`.
    fn central_moment_zero_order_returns_error() {
        // Arrange
        let sample = vec![1.0_f64, 2.0, 3.0];

        // Act
        let result = central_moment(&sample, 0);

        // Assert
        match result {
            Err(BootError::InvalidMomentOrder(0)) => (),
            other => panic!("expected InvalidMomentOrder(0) error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that `sample_mean` agrees with a direct sum / n.
    //
    // Given
    // -----
    // - A sample of length 4.
    //
    // Expect
    // ------
    // - `sample_mean` returns 0.5 for [0, 1, -1, 2].
    fn sample_mean_matches_direct_computation() {
        // Arrange
        let sample = vec![0.0_f64, 1.0, -1.0, 2.0];

        // Act
        let mean = sample_mean(&sample).expect("mean should compute for a finite sample");

        // Assert
        assert!((mean - 0.5).abs() < 1e-12, "expected mean 0.5, got {mean}");
    }
}

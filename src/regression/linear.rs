//! Linear-Gaussian model: parameters, likelihood, and analytic gradient.
//!
//! Purpose
//! -------
//! Implement the negative log-likelihood of the linear-Gaussian model
//! `y_i = w0 + w1 x_i + e_i`, `e_i ~ N(0, σ²)`, as an
//! [`Objective`](crate::optimization::traits::Objective) so it can be
//! fitted with the fixed-step descent loop, with either the analytic
//! gradient implemented here or the finite-difference fallback.
//!
//! Key behaviors
//! -------------
//! - [`LinGaussParams`] is the validated parameter triple
//!   `(intercept, slope, sigma)` with conversions to and from the flat
//!   optimizer vector.
//! - [`LinGaussLik`] evaluates the per-observation average negative
//!   log-likelihood (constants dropped)
//!   `f(w) = ln σ + mean(r²) / (2σ²)` with residuals
//!   `r_i = y_i − w0 − w1 x_i`, and its analytic gradient.
//!
//! Invariants & assumptions
//! ------------------------
//! - `sigma` must be finite and strictly positive wherever a likelihood
//!   value is requested; violations surface as
//!   [`RegError::SigmaNotPositive`], never as NaN.
//! - The flat parameter layout is `[intercept, slope, sigma]` with
//!   length [`PARAM_DIM`]; both conversions enforce it.
//! - The `½ ln(2π)` constant is dropped from the objective; it shifts
//!   the value but not the minimizer or the gradient.
//!
//! Conventions
//! -----------
//! - The objective averages over observations rather than summing, so
//!   values and gradients are comparable across sample sizes and the
//!   fixed descent step behaves consistently.
//!
//! Downstream usage
//! ----------------
//! - Fit with `minimize(&LinGaussLik, w0, &data, &opts)` where `data` is
//!   a validated [`RegData`]; read the estimate back with
//!   [`LinGaussParams::from_params`].
//!
//! Testing notes
//! -------------
//! - Unit tests pin the likelihood against a hand computation and
//!   against `statrs`'s normal density, check the analytic gradient
//!   against finite differences, and exercise the sigma boundary.
//! - End-to-end parameter recovery on simulated data lives in the
//!   integration tests.
use crate::optimization::{
    errors::DescentResult,
    traits::Objective,
    types::{Cost, Grad, Params},
};
use crate::regression::{
    data::RegData,
    errors::{RegError, RegResult},
};
use ndarray::Array1;

/// Length of the flat parameter vector `[intercept, slope, sigma]`.
pub const PARAM_DIM: usize = 3;

/// `LinGaussParams` — validated parameter triple for the linear-Gaussian
/// model.
///
/// Fields
/// ------
/// - `intercept`: `f64` — additive term `w0`.
/// - `slope`: `f64` — coefficient `w1` on the predictor.
/// - `sigma`: `f64` — noise standard deviation; finite and > 0.
///
/// Invariants
/// ----------
/// - All three fields are finite; `sigma > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinGaussParams {
    pub intercept: f64,
    pub slope: f64,
    pub sigma: f64,
}

impl LinGaussParams {
    /// Construct validated parameters.
    ///
    /// # Errors
    /// - `RegError::NonFiniteParam` if `intercept` or `slope` is NaN or ±∞.
    /// - `RegError::SigmaNotPositive` if `sigma` is non-finite or ≤ 0.
    pub fn new(intercept: f64, slope: f64, sigma: f64) -> RegResult<Self> {
        if !intercept.is_finite() {
            return Err(RegError::NonFiniteParam { index: 0, value: intercept });
        }
        if !slope.is_finite() {
            return Err(RegError::NonFiniteParam { index: 1, value: slope });
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(RegError::SigmaNotPositive(sigma));
        }
        Ok(Self { intercept, slope, sigma })
    }

    /// Unpack a flat optimizer vector `[intercept, slope, sigma]`.
    ///
    /// # Errors
    /// - `RegError::ParamsLengthMismatch` when the length is not
    ///   [`PARAM_DIM`].
    /// - Field-level errors from [`LinGaussParams::new`].
    pub fn from_params(params: &Params) -> RegResult<Self> {
        if params.len() != PARAM_DIM {
            return Err(RegError::ParamsLengthMismatch {
                expected: PARAM_DIM,
                actual: params.len(),
            });
        }
        Self::new(params[0], params[1], params[2])
    }

    /// Pack into the flat optimizer vector `[intercept, slope, sigma]`.
    pub fn to_params(&self) -> Params {
        Array1::from(vec![self.intercept, self.slope, self.sigma])
    }
}

/// `LinGaussLik` — average negative log-likelihood of the
/// linear-Gaussian model as a descent objective.
///
/// Stateless; all data flows through the `RegData` argument. The
/// analytic gradient is implemented, so the finite-difference fallback
/// is never needed for this model (it remains available for
/// cross-checks).
#[derive(Debug, Clone, Copy, Default)]
pub struct LinGaussLik;

impl LinGaussLik {
    // Shared residual pass for value and gradient. Returns the residual
    // mean, the mean of r·x, and the mean of r².
    fn residual_moments(params: &LinGaussParams, data: &RegData) -> (f64, f64, f64) {
        let n = data.len() as f64;
        let mut sum_r = 0.0_f64;
        let mut sum_rx = 0.0_f64;
        let mut sum_r_sq = 0.0_f64;
        for (&x, &y) in data.x().iter().zip(data.y().iter()) {
            let r = y - params.intercept - params.slope * x;
            sum_r += r;
            sum_rx += r * x;
            sum_r_sq += r * r;
        }
        (sum_r / n, sum_rx / n, sum_r_sq / n)
    }
}

impl Objective for LinGaussLik {
    type Data = RegData;

    /// Evaluate `f(w) = ln σ + mean(r²) / (2σ²)`.
    ///
    /// # Errors
    /// - `ParamsLengthMismatch` / `NonFiniteParam` / `SigmaNotPositive`
    ///   (bridged into `DescentError`) for an invalid parameter vector.
    fn value(&self, params: &Params, data: &RegData) -> DescentResult<Cost> {
        let p = LinGaussParams::from_params(params)?;
        let (_, _, mean_r_sq) = Self::residual_moments(&p, data);
        Ok(p.sigma.ln() + mean_r_sq / (2.0 * p.sigma * p.sigma))
    }

    /// Validate the starting point against the model's domain.
    fn check(&self, params: &Params, _data: &RegData) -> DescentResult<()> {
        LinGaussParams::from_params(params)?;
        Ok(())
    }

    /// Analytic gradient of the averaged negative log-likelihood:
    ///
    /// - `∂f/∂w0 = −mean(r) / σ²`
    /// - `∂f/∂w1 = −mean(r·x) / σ²`
    /// - `∂f/∂σ  = 1/σ − mean(r²) / σ³`
    fn grad(&self, params: &Params, data: &RegData) -> DescentResult<Grad> {
        let p = LinGaussParams::from_params(params)?;
        let (mean_r, mean_rx, mean_r_sq) = Self::residual_moments(&p, data);
        let sigma_sq = p.sigma * p.sigma;
        Ok(Array1::from(vec![
            -mean_r / sigma_sq,
            -mean_rx / sigma_sq,
            1.0 / p.sigma - mean_r_sq / (sigma_sq * p.sigma),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::DescentError;
    use crate::optimization::finite_diff;
    use ndarray::array;
    use statrs::distribution::{Continuous, Normal};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Hand-computed likelihood values and the statrs cross-check.
    // - Agreement of the analytic gradient with finite differences.
    // - Parameter validation at the sigma boundary and for bad shapes.
    // - Flat-vector round trips for LinGaussParams.
    //
    // They intentionally DO NOT cover:
    // - Full descent-based parameter recovery (integration tests).
    // -------------------------------------------------------------------------

    fn toy_data() -> RegData {
        RegData::new(vec![0.0, 1.0, 2.0, 3.0], vec![1.1, 2.9, 5.2, 6.8]).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Verify the likelihood value against a direct hand computation.
    //
    // Given
    // -----
    // - Toy data and params (1, 2, 0.5), so residuals are
    //   y_i - 1 - 2 x_i = [0.1, -0.1, 0.2, -0.2].
    //
    // Expect
    // ------
    // - f = ln(0.5) + mean(r²) / (2 · 0.25) to 1e-12, with
    //   mean(r²) = (0.01 + 0.01 + 0.04 + 0.04) / 4 = 0.025.
    fn value_matches_hand_computation() {
        // Arrange
        let data = toy_data();
        let params = array![1.0, 2.0, 0.5];
        let expected = 0.5_f64.ln() + 0.025 / 0.5;

        // Act
        let value = LinGaussLik.value(&params, &data).expect("value should succeed");

        // Assert
        assert!((value - expected).abs() < 1e-12, "expected {expected}, got {value}");
    }

    #[test]
    // Purpose
    // -------
    // Cross-check the dropped-constant convention against the full
    // normal density from statrs.
    //
    // Given
    // -----
    // - The same toy data and params; the full average NLL is
    //   f + ½ ln(2π).
    //
    // Expect
    // ------
    // - value + ½ ln(2π) equals −mean(ln pdf(y_i; w0 + w1 x_i, σ))
    //   to 1e-10.
    fn value_matches_statrs_normal_up_to_constant() {
        // Arrange
        let data = toy_data();
        let params = array![1.0, 2.0, 0.5];
        let half_ln_two_pi = 0.5 * (2.0 * std::f64::consts::PI).ln();

        let mut full_nll = 0.0_f64;
        for (&x, &y) in data.x().iter().zip(data.y().iter()) {
            let dist = Normal::new(1.0 + 2.0 * x, 0.5).unwrap();
            full_nll -= dist.ln_pdf(y);
        }
        full_nll /= data.len() as f64;

        // Act
        let value = LinGaussLik.value(&params, &data).expect("value should succeed");

        // Assert
        assert!(
            (value + half_ln_two_pi - full_nll).abs() < 1e-10,
            "dropped-constant value {value} inconsistent with full NLL {full_nll}"
        );
    }

    #[test]
    // Purpose
    // -------
    // Confirm the analytic gradient agrees with central finite
    // differences at a generic point.
    //
    // Given
    // -----
    // - Toy data and params (0.5, 1.5, 0.8).
    //
    // Expect
    // ------
    // - Componentwise agreement to 1e-5.
    fn analytic_gradient_matches_finite_differences() {
        // Arrange
        let data = toy_data();
        let params = array![0.5, 1.5, 0.8];

        // Act
        let analytic = LinGaussLik.grad(&params, &data).expect("analytic gradient");
        let numeric = finite_diff::fd_gradient(&LinGaussLik, &params, &data)
            .expect("finite-difference gradient");

        // Assert
        for (a, n) in analytic.iter().zip(numeric.iter()) {
            assert!((a - n).abs() < 1e-5, "analytic {a} vs numeric {n}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the stationarity structure at an exact fit: zero residuals
    // zero the location gradients while the sigma gradient stays 1/σ.
    //
    // Given
    // -----
    // - Data generated exactly as y = 1 + 2x with no noise.
    //
    // Expect
    // ------
    // - grad[0] = grad[1] = 0 and grad[2] = 1/σ to 1e-12.
    fn gradient_at_exact_fit_has_expected_structure() {
        // Arrange
        let data = RegData::new(vec![0.0, 1.0, 2.0], vec![1.0, 3.0, 5.0]).unwrap();
        let sigma = 0.7_f64;
        let params = array![1.0, 2.0, sigma];

        // Act
        let grad = LinGaussLik.grad(&params, &data).expect("gradient");

        // Assert
        assert!(grad[0].abs() < 1e-12);
        assert!(grad[1].abs() < 1e-12);
        assert!((grad[2] - 1.0 / sigma).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a non-positive sigma is rejected before any arithmetic.
    //
    // Given
    // -----
    // - Params with sigma = 0 and sigma = -0.3.
    //
    // Expect
    // ------
    // - `Err(DescentError::SigmaNotPositive { .. })` from `value`.
    fn non_positive_sigma_is_rejected() {
        // Arrange
        let data = toy_data();

        for sigma in [0.0_f64, -0.3] {
            let params = array![1.0, 2.0, sigma];

            // Act
            let result = LinGaussLik.value(&params, &data);

            // Assert
            match result {
                Err(DescentError::SigmaNotPositive { value }) => assert_eq!(value, sigma),
                other => panic!("expected SigmaNotPositive, got {other:?}"),
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure a wrong-length parameter vector is rejected by `check`.
    //
    // Given
    // -----
    // - A 2-element vector where 3 are expected.
    //
    // Expect
    // ------
    // - `Err(DescentError::ParamsLengthMismatch { expected: 3, actual: 2 })`.
    fn wrong_parameter_length_is_rejected() {
        // Arrange
        let data = toy_data();
        let params = array![1.0, 2.0];

        // Act
        let result = LinGaussLik.check(&params, &data);

        // Assert
        match result {
            Err(DescentError::ParamsLengthMismatch { expected: 3, actual: 2 }) => (),
            other => panic!("expected ParamsLengthMismatch, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the flat-vector round trip for LinGaussParams.
    //
    // Given
    // -----
    // - Params (−0.7, 2.0, 0.5).
    //
    // Expect
    // ------
    // - to_params followed by from_params reproduces the struct exactly.
    fn params_round_trip_through_flat_vector() {
        // Arrange
        let params = LinGaussParams::new(-0.7, 2.0, 0.5).unwrap();

        // Act
        let recovered = LinGaussParams::from_params(&params.to_params()).unwrap();

        // Assert
        assert_eq!(recovered, params);
    }
}

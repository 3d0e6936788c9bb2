//! optimization::finite_diff — finite-difference gradient helpers.
//!
//! Purpose
//! -------
//! Provide finite-difference gradient approximations around a parameter
//! vector, together with error capture and validation, so that the rest
//! of the optimizer can request derivatives without depending directly
//! on the `finitediff` API.
//!
//! Key behaviors
//! -------------
//! - Compute central-difference gradients, falling back to forward
//!   differences when validation fails, via [`fd_gradient`].
//! - Route any error raised by the user objective during finite
//!   differencing into a shared cell and surface it as the descent
//!   error instead of a `NaN`-filled gradient.
//!
//! Invariants & assumptions
//! ------------------------
//! - Parameter vectors and gradients are `ndarray` containers over `f64`
//!   (`Params`, `Grad`).
//! - Any error raised by the user-supplied objective during finite
//!   differencing is treated as a hard failure for the gradient
//!   computation.
//! - Gradients returned from this module are guaranteed to satisfy
//!   [`validate_grad`] on the chosen finite-difference path.
//!
//! Conventions
//! -----------
//! - Central differences are preferred; forward differences are used
//!   only as a fallback when the central approximation fails validation.
//! - Domain errors are surfaced as [`DescentError`] via
//!   `DescentResult<T>`.
//!
//! Downstream usage
//! ----------------
//! - The descent loop calls [`fd_gradient`] when an [`Objective`]
//!   implementation does not provide an analytic gradient.
//! - This module is internal to the optimizer layer and is not intended
//!   to be invoked directly from Python bindings.
//!
//! Testing notes
//! -------------
//! - Unit tests cover successful and failing paths for gradient
//!   computation, including objective-error capture and the
//!   central→forward fallback behavior.
//! - Integration tests for the full descent loop exercise these helpers
//!   implicitly when derivatives are requested via finite differences.
use crate::optimization::{
    errors::{DescentError, DescentResult},
    traits::Objective,
    types::{Grad, Params},
    validation::validate_grad,
};
use finitediff::FiniteDiff;
use std::cell::RefCell;

/// fd_gradient — finite-difference gradient with error capture and fallback.
///
/// Purpose
/// -------
/// Approximate `∇f(w)` for an [`Objective`] that does not implement an
/// analytic gradient. A central-difference scheme is attempted first;
/// any validation failure on the central approximation causes an
/// automatic fallback to a forward-difference scheme.
///
/// Parameters
/// ----------
/// - `f`: `&F`
///   The objective to differentiate; only `F::value` is invoked.
/// - `params`: `&Params`
///   Point in parameter space at which the gradient should be
///   approximated. Its length defines the expected gradient dimension.
/// - `data`: `&F::Data`
///   Model data passed through to `f.value`.
///
/// Returns
/// -------
/// `DescentResult<Grad>`
///   - `Ok(grad)` when finite differencing succeeds on either path, no
///     objective error was captured, and the gradient passes
///     [`validate_grad`].
///   - `Err(e)` when the objective signaled an error during evaluation
///     or both finite-difference paths fail validation.
///
/// Errors
/// ------
/// - Any [`DescentError`] raised by `f.value` at a probe point.
/// - `DescentError::GradientDimMismatch` when the finite-difference
///   gradient length does not match `params.len()`.
/// - `DescentError::InvalidGradient` when any gradient element is NaN or
///   infinite on both paths.
///
/// Panics
/// ------
/// - Never panics.
///
/// Notes
/// -----
/// - Objective failures at a probe point are captured in a shared cell
///   while the closure returns `NaN`; the captured error takes priority
///   over the derived `InvalidGradient` the `NaN` would otherwise cause.
/// - The central-difference validation error is intentionally discarded;
///   only the forward-difference validation result is surfaced.
pub fn fd_gradient<F: Objective>(
    f: &F, params: &Params, data: &F::Data,
) -> DescentResult<Grad> {
    let closure_err: RefCell<Option<DescentError>> = RefCell::new(None);
    let func = |w: &Params| match f.value(w, data) {
        Ok(value) => value,
        Err(err) => {
            // First error wins; later probe points reuse the NaN path.
            if closure_err.borrow().is_none() {
                closure_err.replace(Some(err));
            }
            f64::NAN
        }
    };

    let dim = params.len();
    let cent_grad = params.central_diff(&func);
    if let Some(err) = closure_err.take() {
        return Err(err);
    }
    match validate_grad(&cent_grad, dim) {
        Ok(_) => Ok(cent_grad),
        Err(_) => run_fd_forward(params, &func, &closure_err),
    }
}

// ---- Helper methods ----

/// run_fd_forward — forward-difference gradient with error capture.
///
/// Clears `closure_err`, runs `forward_diff`, then surfaces a captured
/// objective error ahead of the gradient validation result.
///
/// # Errors
/// - The captured [`DescentError`] when `func` signaled one.
/// - Validation errors from [`validate_grad`] otherwise.
fn run_fd_forward<G: Fn(&Params) -> f64>(
    params: &Params, func: &G, closure_err: &RefCell<Option<DescentError>>,
) -> DescentResult<Grad> {
    closure_err.replace(None);
    let fd_grad = params.forward_diff(func);
    let dim = params.len();
    if let Some(err) = closure_err.take() {
        return Err(err);
    }
    validate_grad(&fd_grad, dim)?;
    Ok(fd_grad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::types::Cost;
    use ndarray::Array1;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Central-difference gradient accuracy on a smooth objective.
    // - Propagation of objective errors raised at probe points.
    // - Validation failure when the objective is NaN everywhere.
    //
    // They intentionally DO NOT cover:
    // - End-to-end descent behavior (handled in higher-level integration
    //   tests).
    // -------------------------------------------------------------------------

    struct Quadratic;

    impl Objective for Quadratic {
        type Data = ();

        fn value(&self, params: &Params, _data: &()) -> DescentResult<Cost> {
            Ok(params.dot(params))
        }

        fn check(&self, _params: &Params, _data: &()) -> DescentResult<()> {
            Ok(())
        }
    }

    struct AlwaysErrs;

    impl Objective for AlwaysErrs {
        type Data = ();

        fn value(&self, _params: &Params, _data: &()) -> DescentResult<Cost> {
            Err(DescentError::NonFiniteCost { value: f64::NAN })
        }

        fn check(&self, _params: &Params, _data: &()) -> DescentResult<()> {
            Ok(())
        }
    }

    struct AlwaysNan;

    impl Objective for AlwaysNan {
        type Data = ();

        fn value(&self, _params: &Params, _data: &()) -> DescentResult<Cost> {
            Ok(f64::NAN)
        }

        fn check(&self, _params: &Params, _data: &()) -> DescentResult<()> {
            Ok(())
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that `fd_gradient` approximates the analytic gradient of a
    // simple quadratic objective.
    //
    // Given
    // -----
    // - A parameter vector `w` in ℝ².
    // - The objective `f(w) = wᵀw` with gradient `2w`.
    //
    // Expect
    // ------
    // - `fd_gradient` returns `Ok(grad)` with `grad ≈ 2w` to 1e-5.
    fn fd_gradient_quadratic_matches_analytic() {
        // Arrange
        let params: Params = Array1::from(vec![0.5_f64, -1.5]);

        // Act
        let grad = fd_gradient(&Quadratic, &params, &())
            .expect("Gradient for quadratic should be computed successfully");

        // Assert
        assert_eq!(grad.len(), params.len());
        for (g, w) in grad.iter().zip(params.iter()) {
            assert!(
                (g - 2.0 * w).abs() < 1e-5,
                "expected {}, got {g}",
                2.0 * w
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure that an objective error raised at a probe point is
    // propagated instead of surfacing as an InvalidGradient.
    //
    // Given
    // -----
    // - An objective whose `value` always fails with NonFiniteCost.
    //
    // Expect
    // ------
    // - `fd_gradient` returns the objective's own error variant.
    fn fd_gradient_objective_error_is_propagated() {
        // Arrange
        let params: Params = Array1::from(vec![1.0_f64]);

        // Act
        let result = fd_gradient(&AlwaysErrs, &params, &());

        // Assert
        let err = result.expect_err("Objective error should cause fd_gradient to fail");
        match err {
            DescentError::NonFiniteCost { .. } => {}
            other => panic!("Expected NonFiniteCost, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Confirm that a NaN-valued objective with no error side channel
    // fails validation on both finite-difference paths.
    //
    // Given
    // -----
    // - An objective that returns `Ok(NaN)` everywhere.
    //
    // Expect
    // ------
    // - `fd_gradient` returns `Err(DescentError::InvalidGradient { .. })`.
    fn fd_gradient_nan_objective_yields_invalidgradient_error() {
        // Arrange
        let params: Params = Array1::from(vec![0.0_f64, 1.0]);

        // Act
        let result = fd_gradient(&AlwaysNan, &params, &());

        // Assert
        let err = result.expect_err("NaN objective should cause an error");
        match err {
            DescentError::InvalidGradient { .. } => {}
            other => panic!("Expected InvalidGradient, got {other:?}"),
        }
    }
}

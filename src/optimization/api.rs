//! High-level entry point for minimizing a user-provided `Objective`.
//!
//! This runs plain fixed-step gradient descent: at each update the
//! parameters move by `-ε · ∇f(w)` with a constant `ε`, no line search,
//! momentum, or step decay. The gradient comes from `Objective::grad`
//! when implemented and from robust finite differences otherwise.
use crate::optimization::{
    errors::{DescentError, DescentResult},
    finite_diff::fd_gradient,
    traits::{DescentOptions, DescentOutcome, Objective},
    types::{Grad, Params},
    validation::validate_grad,
};
use argmin_math::ArgminL2Norm;

/// Minimize an objective `f(w)` with fixed-step gradient descent.
///
/// # Behavior
/// - Validates the initial guess via `f.check(params0, data)`.
/// - Evaluates the objective and gradient at `params0`, then iterates
///   `w ← w − ε ∇f(w)` up to `opts.max_iter` times with the constant
///   step `ε = opts.step_size`.
/// - When `opts.tol_grad` is set, stops early once the gradient L2 norm
///   falls below it and tags the outcome `converged = true`; with
///   `tol_grad = None`, always performs exactly `max_iter` updates and
///   reports `converged = false`.
/// - Gradient dispatch: `f.grad` is used when implemented (and its
///   output validated for shape and finiteness); a
///   `GradientNotImplemented` return falls back to central finite
///   differences via [`fd_gradient`]. Any other gradient error aborts.
/// - Tracks whether the objective ever rose between consecutive
///   iterates and reports it as `loss_increased`, a divergence hint for
///   a too-large step.
/// - With `opts.verbose`, prints the initial state, periodic progress,
///   and a one-time warning on the first objective increase to stderr.
///
/// # Parameters
/// - `f`: Your model implementing [`Objective`].
/// - `params0`: Initial parameter vector.
/// - `data`: Model data passed through to `value`/`grad`.
/// - `opts`: Descent options (step size, iteration cap, optional
///   gradient tolerance, verbosity).
///
/// # Errors
/// - Propagates any error from `f.check`, `f.value`, or the gradient
///   path.
/// - [`DescentError::NonFiniteCost`] if the objective turns NaN or
///   infinite at any visited point.
///
/// # Returns
/// A [`DescentOutcome`] containing `params_hat`, the final objective
/// value, the convergence tag, the update count, the final gradient
/// norm, and the `loss_increased` flag.
///
/// # Example
/// ```rust
/// use bootfit::optimization::{minimize, DescentOptions, Objective};
/// use bootfit::optimization::errors::DescentResult;
/// use ndarray::array;
///
/// struct Quadratic;
/// impl Objective for Quadratic {
///     type Data = ();
///     fn value(&self, w: &ndarray::Array1<f64>, _: &()) -> DescentResult<f64> {
///         Ok(w.dot(w))
///     }
///     fn check(&self, _: &ndarray::Array1<f64>, _: &()) -> DescentResult<()> {
///         Ok(())
///     }
/// }
///
/// let opts = DescentOptions::new(0.1, 200, Some(1e-8), false).unwrap();
/// let out = minimize(&Quadratic, array![1.0, -2.0], &(), &opts).unwrap();
/// assert!(out.converged);
/// assert!(out.params_hat.iter().all(|w| w.abs() < 1e-6));
/// ```
pub fn minimize<F: Objective>(
    f: &F, params0: Params, data: &F::Data, opts: &DescentOptions,
) -> DescentResult<DescentOutcome> {
    f.check(&params0, data)?;
    let dim = params0.len();
    let mut params = params0;

    let mut value = f.value(&params, data)?;
    if !value.is_finite() {
        return Err(DescentError::NonFiniteCost { value });
    }
    let mut grad = compute_grad(f, &params, data, dim)?;

    if opts.verbose {
        eprintln!(
            "descent: start objective = {value:.6e}, grad norm = {:.6e}",
            grad.l2_norm()
        );
    }

    let mut converged = false;
    let mut loss_increased = false;
    let mut iterations = 0_usize;

    for iter in 0..opts.max_iter {
        if let Some(tol) = opts.tol_grad {
            if grad.l2_norm() < tol {
                converged = true;
                break;
            }
        }

        params.scaled_add(-opts.step_size, &grad);
        iterations = iter + 1;

        let new_value = f.value(&params, data)?;
        if !new_value.is_finite() {
            return Err(DescentError::NonFiniteCost { value: new_value });
        }
        if new_value > value {
            if opts.verbose && !loss_increased {
                eprintln!(
                    "descent: objective increased at iteration {iterations} \
                     ({value:.6e} -> {new_value:.6e}); step size may be too large"
                );
            }
            loss_increased = true;
        }
        value = new_value;

        grad = compute_grad(f, &params, data, dim)?;

        if opts.verbose && iterations % 500 == 0 {
            eprintln!(
                "descent: iteration {iterations}, objective = {value:.6e}, grad norm = {:.6e}",
                grad.l2_norm()
            );
        }
    }

    // The cap can land exactly on a point that satisfies the tolerance.
    if !converged {
        if let Some(tol) = opts.tol_grad {
            if grad.l2_norm() < tol {
                converged = true;
            }
        }
    }

    DescentOutcome::new(params, value, converged, iterations, &grad, loss_increased)
}

/// Dispatch between the analytic gradient and the finite-difference
/// fallback.
///
/// # Errors
/// - Validation errors for an analytic gradient with wrong shape or
///   non-finite entries.
/// - Any error surfaced by [`fd_gradient`] on the fallback path.
fn compute_grad<F: Objective>(
    f: &F, params: &Params, data: &F::Data, dim: usize,
) -> DescentResult<Grad> {
    match f.grad(params, data) {
        Ok(grad) => {
            validate_grad(&grad, dim)?;
            Ok(grad)
        }
        Err(DescentError::GradientNotImplemented) => fd_gradient(f, params, data),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::types::Cost;
    use ndarray::{array, Array1};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Descent on a smooth convex objective with an analytic gradient.
    // - The finite-difference fallback when no gradient is implemented.
    // - Exact iteration counts and the converged tag with and without a
    //   gradient tolerance.
    // - Divergence detection via the loss_increased flag.
    //
    // They intentionally DO NOT cover:
    // - The linear-Gaussian likelihood model (exercised by the
    //   integration tests).
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

        fn grad(&self, params: &Params, _data: &()) -> DescentResult<Grad> {
            Ok(params.mapv(|w| 2.0 * w))
        }
    }

    struct QuadraticNoGrad;

    impl Objective for QuadraticNoGrad {
        type Data = ();

        fn value(&self, params: &Params, _data: &()) -> DescentResult<Cost> {
            Ok(params.dot(params))
        }

        fn check(&self, _params: &Params, _data: &()) -> DescentResult<()> {
            Ok(())
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that descent with an analytic gradient drives a convex
    // quadratic to its minimum and tags convergence.
    //
    // Given
    // -----
    // - f(w) = wᵀw starting at (1, -2), step 0.1, tol 1e-8.
    //
    // Expect
    // ------
    // - `converged == true` before the cap, final params near zero.
    fn minimize_quadratic_converges_to_origin() {
        // Arrange
        let opts = DescentOptions::new(0.1, 500, Some(1e-8), false).unwrap();

        // Act
        let out = minimize(&Quadratic, array![1.0_f64, -2.0], &(), &opts)
            .expect("Quadratic descent should succeed");

        // Assert
        assert!(out.converged);
        assert!(out.iterations < 500);
        assert!(out.params_hat.iter().all(|w| w.abs() < 1e-6));
        assert!(out.grad_norm < 1e-8);
        assert!(!out.loss_increased);
    }

    #[test]
    // Purpose
    // -------
    // Confirm that the finite-difference fallback reaches the same
    // minimum when no analytic gradient is implemented.
    //
    // Given
    // -----
    // - The same quadratic without a `grad` implementation.
    //
    // Expect
    // ------
    // - Final params within 1e-4 of the analytic-gradient run.
    fn minimize_fd_fallback_matches_analytic() {
        // Arrange
        let opts = DescentOptions::new(0.1, 500, Some(1e-6), false).unwrap();
        let start = array![1.0_f64, -2.0];

        // Act
        let analytic = minimize(&Quadratic, start.clone(), &(), &opts)
            .expect("analytic run should succeed");
        let fd = minimize(&QuadraticNoGrad, start, &(), &opts)
            .expect("finite-difference run should succeed");

        // Assert
        for (a, b) in analytic.params_hat.iter().zip(fd.params_hat.iter()) {
            assert!((a - b).abs() < 1e-4, "analytic {a} vs FD {b}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the no-tolerance contract: exactly max_iter updates and no
    // convergence tag.
    //
    // Given
    // -----
    // - tol_grad = None, max_iter = 25.
    //
    // Expect
    // ------
    // - `iterations == 25`, `converged == false`.
    fn minimize_without_tolerance_runs_full_cap() {
        // Arrange
        let opts = DescentOptions::new(0.1, 25, None, false).unwrap();

        // Act
        let out = minimize(&Quadratic, array![1.0_f64], &(), &opts)
            .expect("capped run should succeed");

        // Assert
        assert_eq!(out.iterations, 25);
        assert!(!out.converged);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a too-large step on a stiff quadratic is reported via
    // loss_increased.
    //
    // Given
    // -----
    // - f(w) = w² has curvature 2, so any step above 1.0 overshoots and
    //   the objective grows each update; step 1.5 diverges slowly enough
    //   to stay finite for a few iterations.
    //
    // Expect
    // ------
    // - `loss_increased == true` after a short capped run.
    fn minimize_oversized_step_sets_loss_increased() {
        // Arrange
        let opts = DescentOptions::new(1.5, 5, None, false).unwrap();

        // Act
        let out = minimize(&Quadratic, array![1.0_f64], &(), &opts)
            .expect("short divergent run should stay finite");

        // Assert
        assert!(out.loss_increased);
    }

    #[test]
    // Purpose
    // -------
    // Confirm that a zero-length descent is impossible by construction:
    // DescentOptions rejects max_iter = 0.
    //
    // Given
    // -----
    // - max_iter = 0 passed to the options constructor.
    //
    // Expect
    // ------
    // - `Err(DescentError::InvalidMaxIter { .. })`.
    fn options_reject_zero_max_iter() {
        // Arrange / Act
        let result = DescentOptions::new(0.1, 0, None, false);

        // Assert
        match result {
            Err(DescentError::InvalidMaxIter { .. }) => {}
            other => panic!("Expected InvalidMaxIter, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that an already-converged start exits before any update
    // when a tolerance is set.
    //
    // Given
    // -----
    // - Start at the exact minimum with tol 1e-6.
    //
    // Expect
    // ------
    // - Zero iterations and `converged == true`.
    fn minimize_at_minimum_exits_immediately() {
        // Arrange
        let opts = DescentOptions::new(0.1, 100, Some(1e-6), false).unwrap();

        // Act
        let out = minimize(&Quadratic, Array1::zeros(2), &(), &opts)
            .expect("run from the minimum should succeed");

        // Assert
        assert_eq!(out.iterations, 0);
        assert!(out.converged);
    }
}

//! Public API surface for objective minimization.
//!
//! - [`Objective`]: trait users implement for their model.
//! - [`DescentOptions`]: configuration for the fixed-step descent loop.
//! - [`DescentOutcome`]: normalized result returned by the high-level
//!   `minimize` API.
//!
//! Convention: we *minimize* a user objective `f(w)` directly (for MLE
//! fitting this is a negative log-likelihood). If an analytic gradient is
//! provided, it should be the gradient of the objective (`∇f(w)`); no
//! sign flips are performed anywhere in the descent loop.
use crate::optimization::{
    errors::{DescentError, DescentResult},
    types::{Cost, Grad, Params, DEFAULT_MAX_ITER, DEFAULT_STEP_SIZE},
    validation::{
        validate_params_hat, validate_value, verify_max_iter, verify_step_size, verify_tol_grad,
    },
};
use argmin_math::ArgminL2Norm;

/// User-implemented objective interface.
///
/// You minimize `f(w)` directly. If you provide an analytic gradient,
/// return the gradient of the objective `∇f(w)`.
///
/// - `type Data`: per-model data carried into `value`/`grad`/`check`.
///
/// Required:
/// - `value(&Params, &Data) -> DescentResult<Cost>`: evaluate `f(w)`.
///   - Errors: return a descriptive `DescentError` for invalid inputs or
///     model failures.
/// - `check(&Params, &Data) -> DescentResult<()>`: validation hook to
///   reject obviously invalid `w`/`data` pairs. Called once before
///   optimization.
///
/// Optional:
/// - `grad(&Params, &Data) -> DescentResult<Grad>`: analytic gradient
///   `∇f(w)`. If not implemented, robust finite differences are used
///   automatically.
pub trait Objective {
    type Data: 'static;

    // Required methods
    fn value(&self, params: &Params, data: &Self::Data) -> DescentResult<Cost>;
    fn check(&self, params: &Params, data: &Self::Data) -> DescentResult<()>;

    // Optional methods
    fn grad(&self, _params: &Params, _data: &Self::Data) -> DescentResult<Grad> {
        Err(DescentError::GradientNotImplemented)
    }
}

/// Descent-level configuration.
///
/// Fields:
/// - `step_size: f64` — fixed update scale `ε`; no line search or decay
///   is applied.
/// - `max_iter: usize` — hard cap on the number of updates.
/// - `tol_grad: Option<f64>` — optional early stop when the gradient
///   norm falls below this threshold; `None` runs the full cap.
/// - `verbose: bool` — if `true`, prints progress lines to stderr.
///
/// Constructor:
/// - `new(step_size, max_iter, tol_grad, verbose) -> DescentResult<Self>`
///   — builds validated options.
///
/// Default:
/// - `step_size = 0.01`, `max_iter = 5000`, `tol_grad = None`,
///   `verbose = false`.
#[derive(Debug, Clone, PartialEq)]
pub struct DescentOptions {
    pub step_size: f64,
    pub max_iter: usize,
    pub tol_grad: Option<f64>,
    pub verbose: bool,
}

impl DescentOptions {
    /// Construct validated descent options.
    ///
    /// # Rules
    /// - `step_size` must be **finite and strictly positive**.
    /// - `max_iter` must be `> 0`.
    /// - If provided, `tol_grad` must be **finite and strictly positive**.
    ///
    /// # Errors
    /// - [`DescentError::InvalidStepSize`] for a non-finite or non-positive step.
    /// - [`DescentError::InvalidMaxIter`] if `max_iter == 0`.
    /// - [`DescentError::InvalidTolGrad`] for a non-finite or non-positive tolerance.
    pub fn new(
        step_size: f64, max_iter: usize, tol_grad: Option<f64>, verbose: bool,
    ) -> DescentResult<Self> {
        verify_step_size(step_size)?;
        verify_max_iter(max_iter)?;
        verify_tol_grad(tol_grad)?;
        Ok(Self { step_size, max_iter, tol_grad, verbose })
    }
}

impl Default for DescentOptions {
    fn default() -> Self {
        Self {
            step_size: DEFAULT_STEP_SIZE,
            max_iter: DEFAULT_MAX_ITER,
            tol_grad: None,
            verbose: false,
        }
    }
}

/// Canonical result returned by `minimize`.
///
/// - `params_hat`: best parameter vector found.
/// - `value`: objective value `f(ŵ)` at the final parameters.
/// - `converged`: `true` if a `tol_grad` stopping rule was set and fired
///   before the iteration cap; `false` when the cap truncated the run or
///   no tolerance was requested.
/// - `iterations`: number of descent updates performed.
/// - `grad_norm`: L2 norm of the final gradient.
/// - `loss_increased`: `true` if the objective rose on any update, a
///   sign the fixed step is too large for the local curvature.
#[derive(Debug, Clone, PartialEq)]
pub struct DescentOutcome {
    pub params_hat: Params,
    pub value: f64,
    pub converged: bool,
    pub iterations: usize,
    pub grad_norm: f64,
    pub loss_increased: bool,
}

impl DescentOutcome {
    /// Build a validated [`DescentOutcome`] from raw descent state.
    ///
    /// Performs:
    /// - `params_hat` check via `validate_params_hat` (all finite).
    /// - `value` check via `validate_value` (finite).
    /// - Computes `grad_norm` from the final gradient.
    ///
    /// # Errors
    /// - Propagates any validation errors for `params_hat` or `value`.
    pub fn new(
        params_hat: Params, value: f64, converged: bool, iterations: usize, grad: &Grad,
        loss_increased: bool,
    ) -> DescentResult<Self> {
        validate_params_hat(&params_hat)?;
        validate_value(value)?;
        let grad_norm = grad.l2_norm();
        Ok(Self { params_hat, value, converged, iterations, grad_norm, loss_increased })
    }
}

//! bootfit — bootstrap variance estimation and MLE fitting with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the bootstrap-variance and regression-fitting routines to Python via the
//! `_bootfit` extension module. When the `python-bindings` feature is enabled,
//! this module defines the Python-facing classes and submodules used by the
//! `bootfit` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`bootstrap`, `optimization`, and
//!   `regression`) as the public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_bootfit` Python extension.
//! - Create and register Python submodules (`bootstrap`, `regression`) under
//!   `bootfit` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner Rust modules; this
//!   file performs only FFI glue, input validation, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible types mirror the
//!   invariants and signatures of their Rust counterparts (e.g.
//!   `SquaredMeanVariance`, `DescentOutcome`).
//! - On successful conversion from Python objects to Rust types, the
//!   invariants documented in the core modules are assumed to hold.
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_bootfit.<submodule>` and are
//!   typically wrapped by thin pure-Python facades in the top-level `bootfit`
//!   package.
//! - Moment, variance, and likelihood conventions follow the documentation of
//!   the underlying Rust modules (`bootstrap`, `regression`).
//! - Errors from core Rust code are propagated as rich error types internally
//!   and converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should usually depend directly on the inner modules and
//!   can ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_bootfit` module defined here and
//!   wraps its classes in user-facing Python APIs.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules and
//!   by the Rust integration tests; Python-level smoke tests verify that the
//!   classes can be constructed and queried from Python.

pub mod bootstrap;
pub mod optimization;
pub mod regression;
pub mod utils;

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use rand::rngs::StdRng;
#[cfg(feature = "python-bindings")]
use rand::SeedableRng;

#[cfg(feature = "python-bindings")]
use crate::{
    bootstrap::{monte_carlo::monte_carlo_variance, variance::SquaredMeanVariance},
    optimization::{api::minimize, traits::DescentOutcome},
    regression::{data::RegData, linear::{LinGaussLik, LinGaussParams}},
    utils::{extract_descent_options, extract_f64_array},
};

/// SquaredMeanBootstrap — Python-facing variance estimates for `(x̄)²`.
///
/// Purpose
/// -------
/// Compute and hold the plug-in, refined, and Monte Carlo estimates of
/// the bootstrap variance of the squared sample mean for one sample,
/// forwarding all computation to [`SquaredMeanVariance`] and
/// [`monte_carlo_variance`].
///
/// Key behaviors
/// -------------
/// - Validate and convert Python inputs into a contiguous `f64` slice.
/// - Run both analytic estimators and the seeded simulation at
///   construction time and store the three scalars.
/// - Expose `plug_in`, `refined`, `monte_carlo`, and `replicates` as
///   read-only Python properties.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `SquaredMeanBootstrap(data, replicates=10_000, seed=None)`:
/// - `data`: `&PyAny`
///   One-dimensional array-like of finite `f64` values with length ≥ 1.
/// - `replicates`: `Option<usize>`
///   Bootstrap resample count B; defaults to `10_000`.
/// - `seed`: `Option<u64>`
///   Seed for the simulation RNG; omitted means OS entropy, so repeated
///   calls differ.
///
/// Invariants
/// ----------
/// - Stored scalars were all computed from the same validated sample.
///
/// Notes
/// -----
/// - Native Rust code should prefer [`SquaredMeanVariance::estimate`]
///   and [`monte_carlo_variance`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "bootfit.bootstrap")]
pub struct SquaredMeanBootstrap {
    plug_in: f64,
    refined: f64,
    monte_carlo: f64,
    replicates: usize,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl SquaredMeanBootstrap {
    /// Variance estimates for the squared sample mean under iid
    /// resampling, analytic and simulated.
    #[new]
    #[pyo3(
        text_signature = "(data, /, replicates=10000, seed=None)",
        signature = (raw_data, replicates = 10_000, seed = None)
    )]
    pub fn new<'py>(
        py: Python<'py>, raw_data: &Bound<'py, PyAny>, replicates: Option<usize>,
        seed: Option<u64>,
    ) -> PyResult<SquaredMeanBootstrap> {
        let arr = extract_f64_array(py, raw_data)?;
        let data: &[f64] = arr.as_slice().map_err(|_| {
            PyValueError::new_err("data must be a 1-D contiguous float64 array or sequence")
        })?;

        let replicates = replicates.unwrap_or(10_000);
        let analytic = SquaredMeanVariance::estimate(data)?;
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let monte_carlo = monte_carlo_variance(data, replicates, &mut rng)?;

        Ok(SquaredMeanBootstrap {
            plug_in: analytic.plug_in(),
            refined: analytic.refined(),
            monte_carlo,
            replicates,
        })
    }

    /// First-order delta-method estimate.
    #[getter]
    pub fn plug_in(&self) -> f64 {
        self.plug_in
    }

    /// Refined estimate with the small-sample quartic correction.
    #[getter]
    pub fn refined(&self) -> f64 {
        self.refined
    }

    /// Simulated reference value from B resamples.
    #[getter]
    pub fn monte_carlo(&self) -> f64 {
        self.monte_carlo
    }

    /// Resample count used for the simulation.
    #[getter]
    pub fn replicates(&self) -> usize {
        self.replicates
    }
}

/// LinearMLE — Python-facing linear-Gaussian fit by gradient descent.
///
/// Purpose
/// -------
/// Expose the descent-based MLE of the linear-Gaussian model to Python
/// callers while preserving the core Rust invariants and error handling.
///
/// Key behaviors
/// -------------
/// - Build a validated [`RegData`] container and [`DescentOptions`] from
///   Python-friendly arguments.
/// - Run [`minimize`] on [`LinGaussLik`] at construction time and store
///   the outcome and typed parameter triple.
/// - Expose the fitted parameters and descent diagnostics as read-only
///   Python properties.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `LinearMLE(x, y, theta0=None, step_size=0.01, max_iter=5000, tol_grad=None, verbose=False)`:
/// - `x`, `y`: `&PyAny`
///   Equal-length one-dimensional array-likes of finite `f64` values.
/// - `theta0`: `Option<&PyAny>`
///   Starting point `[intercept, slope, sigma]`; defaults to
///   `[0, 0, 1]`.
/// - `step_size`, `max_iter`, `tol_grad`, `verbose`
///   Descent configuration, matching [`DescentOptions`] semantics.
///
/// Invariants
/// ----------
/// - `fitted` always holds a validated parameter triple with
///   `sigma > 0`; a fit that drove sigma out of its domain would have
///   raised instead of constructing the object.
///
/// Notes
/// -----
/// - Native Rust callers should use [`minimize`] and [`LinGaussLik`]
///   directly; this type exists solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "bootfit.regression")]
pub struct LinearMLE {
    /// Full descent outcome from the fit.
    outcome: DescentOutcome,
    /// Fitted parameters unpacked from the outcome.
    fitted: LinGaussParams,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl LinearMLE {
    /// Fit `y = w0 + w1 x + N(0, σ²)` by fixed-step descent on the
    /// average negative log-likelihood.
    #[new]
    #[pyo3(
        text_signature = "(x, y, /, theta0=None, step_size=0.01, max_iter=5000, \
                          tol_grad=None, verbose=False)",
        signature = (x, y, theta0 = None, step_size = None, max_iter = None, tol_grad = None, verbose = None)
    )]
    pub fn new<'py>(
        py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>,
        theta0: Option<&Bound<'py, PyAny>>, step_size: Option<f64>, max_iter: Option<usize>,
        tol_grad: Option<f64>, verbose: Option<bool>,
    ) -> PyResult<LinearMLE> {
        let x_arr = extract_f64_array(py, x)?;
        let y_arr = extract_f64_array(py, y)?;
        let x_slice = x_arr.as_slice().map_err(|_| {
            PyValueError::new_err("x must be a 1-D contiguous float64 array or sequence")
        })?;
        let y_slice = y_arr.as_slice().map_err(|_| {
            PyValueError::new_err("y must be a 1-D contiguous float64 array or sequence")
        })?;
        let data = RegData::new(x_slice.to_vec(), y_slice.to_vec())?;

        let start = match theta0 {
            Some(raw) => {
                let arr = extract_f64_array(py, raw)?;
                let slice = arr.as_slice().map_err(|_| {
                    PyValueError::new_err(
                        "theta0 must be a 1-D contiguous float64 array or sequence",
                    )
                })?;
                Array1::from(slice.to_vec())
            }
            None => LinGaussParams::new(0.0, 0.0, 1.0)?.to_params(),
        };

        let opts = extract_descent_options(step_size, max_iter, tol_grad, verbose)?;
        let outcome = minimize(&LinGaussLik, start, &data, &opts)?;
        let fitted = LinGaussParams::from_params(&outcome.params_hat)?;
        Ok(LinearMLE { outcome, fitted })
    }

    /// Fitted intercept `ŵ0`.
    #[getter]
    pub fn intercept(&self) -> f64 {
        self.fitted.intercept
    }

    /// Fitted slope `ŵ1`.
    #[getter]
    pub fn slope(&self) -> f64 {
        self.fitted.slope
    }

    /// Fitted noise scale `σ̂`.
    #[getter]
    pub fn sigma(&self) -> f64 {
        self.fitted.sigma
    }

    /// Flat fitted vector `[intercept, slope, sigma]`.
    #[getter]
    pub fn params(&self) -> Vec<f64> {
        self.outcome.params_hat.to_vec()
    }

    /// Final objective value (average negative log-likelihood).
    #[getter]
    pub fn value(&self) -> f64 {
        self.outcome.value
    }

    /// Whether a gradient tolerance fired before the iteration cap.
    #[getter]
    pub fn converged(&self) -> bool {
        self.outcome.converged
    }

    /// Number of descent updates performed.
    #[getter]
    pub fn iterations(&self) -> usize {
        self.outcome.iterations
    }

    /// L2 norm of the final gradient.
    #[getter]
    pub fn grad_norm(&self) -> f64 {
        self.outcome.grad_norm
    }

    /// Whether the objective rose on any update.
    #[getter]
    pub fn loss_increased(&self) -> bool {
        self.outcome.loss_increased
    }
}

/// _bootfit — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_bootfit` Python module and register its submodules used
/// by the public `bootfit` package.
///
/// Key behaviors
/// -------------
/// - Create `bootstrap` and `regression` submodules.
/// - Attach those submodules to the parent `_bootfit` module.
/// - Register the submodules in `sys.modules` so they are importable via
///   dotted paths from Python.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _bootfit<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let bootstrap_mod = PyModule::new(_py, "bootstrap")?;
    let regression_mod = PyModule::new(_py, "regression")?;
    bootstrap_submodule(_py, m, &bootstrap_mod)?;
    regression_submodule(_py, m, &regression_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("bootfit.bootstrap", bootstrap_mod)?;

    _py.import("sys")?
        .getattr("modules")?
        .set_item("bootfit.regression", regression_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn bootstrap_submodule<'py>(
    _py: Python, bootfit: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<SquaredMeanBootstrap>()?;
    bootfit.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn regression_submodule<'py>(
    _py: Python, bootfit: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<LinearMLE>()?;
    bootfit.add_submodule(m)?;
    Ok(())
}

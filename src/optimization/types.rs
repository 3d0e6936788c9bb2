//! optimization::types — shared numeric aliases and descent defaults.
//!
//! Purpose
//! -------
//! Centralize the core numeric types and default constants used by the
//! gradient-descent minimizer. By defining these in one place, the rest
//! of the optimization code can stay agnostic to `ndarray` generics and
//! can more easily evolve if the backend changes.
//!
//! Key behaviors
//! -------------
//! - Define canonical aliases for parameter vectors, gradients, and
//!   scalar costs (`Params`, `Grad`, `Cost`).
//! - Expose the default fixed step size and iteration cap shared by
//!   [`DescentOptions::default`](crate::optimization::traits::DescentOptions).
//!
//! Invariants & assumptions
//! ------------------------
//! - All optimizer vectors are represented as `ndarray` containers over
//!   `f64`.
//! - `Cost` is always a scalar `f64` in objective space; the descent
//!   loop minimizes it directly with no sign flips.
//!
//! Conventions
//! -----------
//! - `Params` and `Grad` are treated conceptually as column vectors with
//!   length equal to the number of free parameters.
//! - This module defines no runtime behavior beyond what `ndarray`
//!   requires when these types are instantiated elsewhere.
//!
//! Downstream usage
//! ----------------
//! - Other optimizer modules import these aliases instead of referring
//!   directly to `ndarray` generics.
//! - High-level APIs use [`Params`] and [`Grad`] as the standard
//!   parameter and gradient types when implementing
//!   [`Objective`](crate::optimization::traits::Objective).
//!
//! Testing notes
//! -------------
//! - This module only defines type aliases and constants; there are no
//!   dedicated unit tests.
//! - Correctness is exercised indirectly by tests in the surrounding
//!   optimizer modules that operate on these aliases.
use ndarray::Array1;

/// Parameter vector `w` for objective minimization.
///
/// Alias for `ndarray::Array1<f64>`, used as the canonical parameter type
/// throughout the optimizer.
pub type Params = Array1<f64>;

/// Gradient vector `∇f(w)` for optimization.
///
/// Alias for `ndarray::Array1<f64>`, matching the shape of `Params`.
pub type Grad = Array1<f64>;

/// Scalar objective value used by the optimizer.
///
/// In this crate, this is typically a negative log-likelihood.
pub type Cost = f64;

/// Default fixed step size `ε` for descent runs.
pub const DEFAULT_STEP_SIZE: f64 = 0.01;

/// Default hard cap on the number of descent updates.
pub const DEFAULT_MAX_ITER: usize = 5_000;

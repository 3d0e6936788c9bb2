//! optimization — fixed-step descent stack and unified error surface.
//!
//! Purpose
//! -------
//! Provide a cohesive optimization layer for model fitting, combining a
//! fixed-step gradient-descent minimizer, a finite-difference gradient
//! fallback, and a single error/result surface. Callers implement an
//! objective, choose options, and obtain fitted parameters and
//! diagnostics without touching the descent internals.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **minimizing objectives** `f(w)` via
//!   [`minimize`], with constant-step updates `w ← w − ε ∇f(w)` and an
//!   optional gradient-norm stopping rule.
//! - Dispatch between analytic gradients and robust central/forward
//!   finite differences (`finite_diff`) based on whether the objective
//!   implements [`Objective::grad`].
//! - Normalize configuration issues, numerical failures, and model
//!   errors into a single enum (`errors::DescentError`) with a common
//!   result alias (`DescentResult<T>`).
//!
//! Invariants & assumptions
//! ------------------------
//! - The minimizer operates in an unconstrained parameter space `w` and
//!   assumes that inputs are finite once validation has passed; invalid
//!   states are reported as `DescentError`, not panics.
//! - Objective implementations are expected to treat domain violations
//!   (e.g., a non-positive noise scale) as recoverable errors surfaced
//!   through the optimization layer.
//! - Dimension and finiteness checks for parameters and gradients are
//!   enforced via shared validation, so downstream code can assume that
//!   accepted vectors satisfy basic shape constraints.
//!
//! Conventions
//! -----------
//! - The descent loop minimizes `f(w)` directly; no sign flips occur
//!   anywhere, so MLE callers pass a negative log-likelihood.
//! - Parameters and gradients are represented using `ndarray`-backed
//!   aliases from [`types`].
//! - The step size is constant for the whole run; there is no line
//!   search, momentum, or decay schedule.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use bootfit::optimization::{minimize, DescentOptions, Objective};
//!   ```
//!
//!   and only refers to `optimization::validation` or
//!   `optimization::finite_diff` directly when reusing the lower-level
//!   pieces.
//! - The regression subtree implements [`Objective`] for its
//!   linear-Gaussian likelihood and calls [`minimize`] to fit it.
//! - Python bindings expose a thin wrapper around the same entry point.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`api`] cover convergence on convex objectives, the
//!   finite-difference fallback, exact iteration counts, and divergence
//!   detection.
//! - Unit tests in [`finite_diff`] cover gradient accuracy and error
//!   capture at probe points.
//! - End-to-end MLE recovery on simulated data lives in the integration
//!   tests.

pub mod api;
pub mod errors;
pub mod finite_diff;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::minimize;
pub use self::errors::{DescentError, DescentResult};
pub use self::traits::{DescentOptions, DescentOutcome, Objective};
pub use self::types::{Cost, Grad, Params, DEFAULT_MAX_ITER, DEFAULT_STEP_SIZE};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use bootfit::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::api::minimize;
    pub use super::errors::{DescentError, DescentResult};
    pub use super::traits::{DescentOptions, DescentOutcome, Objective};
    pub use super::types::{Cost, Grad, Params};
}

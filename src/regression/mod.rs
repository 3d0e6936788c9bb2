//! regression — linear-Gaussian model and MLE fitting surface.
//!
//! Purpose
//! -------
//! Collect the regression-side machinery for fitting the linear-Gaussian
//! model `y_i = w0 + w1 x_i + e_i`, `e_i ~ N(0, σ²)` by maximum
//! likelihood: the validated data container, the parameter triple, and
//! the negative log-likelihood objective wired into the optimization
//! layer, including Python bridges for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Validate raw (x, y) observation pairs once, at the boundary, via
//!   [`RegData`].
//! - Express model parameters as the typed triple [`LinGaussParams`]
//!   with conversions to and from the flat optimizer vector.
//! - Implement the averaged negative log-likelihood and its analytic
//!   gradient as an [`Objective`](crate::optimization::traits::Objective)
//!   via [`LinGaussLik`], so fitting is a plain
//!   [`minimize`](crate::optimization::minimize) call.
//! - Provide a dedicated error type [`RegError`] and result alias
//!   [`RegResult`], absorbed into the optimizer's error surface through
//!   `From<RegError> for DescentError`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Data entering the likelihood satisfies the [`RegData`] invariants
//!   (equal non-zero lengths, all finite); the likelihood never
//!   re-validates it.
//! - `sigma` is checked at every likelihood evaluation, since descent
//!   steps can push it out of the domain mid-run.
//!
//! Conventions
//! -----------
//! - The objective is averaged over observations and drops the
//!   `½ ln(2π)` constant; see [`linear`] for the exact form.
//! - Error messages are phrased in terms of domain constraints such as
//!   "sigma must be finite and > 0".
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code fits the model as:
//!
//!   ```rust
//!   use bootfit::optimization::{minimize, DescentOptions};
//!   use bootfit::regression::{LinGaussLik, LinGaussParams, RegData};
//!
//!   # fn run() -> Result<(), Box<dyn std::error::Error>> {
//!   let data = RegData::new(vec![0.0, 1.0, 2.0], vec![1.0, 3.1, 4.9])?;
//!   let start = LinGaussParams::new(0.0, 0.0, 1.0)?;
//!   let opts = DescentOptions::default();
//!   let out = minimize(&LinGaussLik, start.to_params(), &data, &opts)?;
//!   let fitted = LinGaussParams::from_params(&out.params_hat)?;
//!   # let _ = fitted; Ok(())
//!   # }
//!   ```
//! - Python bindings expose the same fit through a thin wrapper class.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`data`] cover the container invariants; tests in
//!   [`linear`] pin the likelihood and gradient, including a statrs
//!   cross-check and a finite-difference comparison.
//! - Descent-based parameter recovery on simulated data lives in the
//!   integration tests.

pub mod data;
pub mod errors;
pub mod linear;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::data::RegData;
pub use self::errors::{RegError, RegResult};
pub use self::linear::{LinGaussLik, LinGaussParams, PARAM_DIM};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use bootfit::regression::prelude::*;
//
// to import the main regression surface in a single line.

pub mod prelude {
    pub use super::data::RegData;
    pub use super::errors::{RegError, RegResult};
    pub use super::linear::{LinGaussLik, LinGaussParams};
}

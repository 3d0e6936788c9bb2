//! bootstrap::errors — shared error types and Python bridges.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias used by the bootstrap-variance
//! routines, together with a conversion layer to Python exceptions for
//! PyO3-based bindings. All input-validation and computation failures of
//! the moment and variance estimators are reported through [`BootError`]
//! rather than panics or silent NaN propagation.
//!
//! Key behaviors
//! -------------
//! - Define [`BootResult`] and [`BootError`] as the canonical result and
//!   error types for the moment, variance, and Monte Carlo estimators.
//! - Attach human-readable `Display` messages to each variant so that
//!   diagnostics are meaningful without additional context.
//! - Implement `From<BootError> for PyErr` (behind the `python-bindings`
//!   feature) so Python callers see `ValueError`s with the Rust message.
//!
//! Invariants & assumptions
//! ------------------------
//! - Estimator modules validate their inputs (sample length, finiteness,
//!   moment order, replicate count) and return [`BootResult<T>`] instead
//!   of panicking.
//! - `BootError` values are small, cheap to clone, and comfortable to use
//!   in unit tests and higher-level orchestration code.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints ("sample
//!   must not be empty", "k must be at least 1") rather than low-level
//!   implementation details.
//! - Optimizer- and model-specific error types live in their own `errors`
//!   modules under the relevant subtrees.
//!
//! Downstream usage
//! ----------------
//! - The moment and variance estimators return [`BootResult<T>`] to
//!   propagate failures cleanly to callers.
//! - Python bindings rely on the `From<BootError>` implementation to
//!   surface failures as `ValueError`.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload (offending value, order, or replicate count).

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

pub type BootResult<T> = Result<T, BootError>;

/// BootError — error conditions for bootstrap-variance estimation.
///
/// Variants
/// --------
/// - `EmptySample`
///   The input sample contains no observations, so the sample mean (and
///   every central moment) is undefined.
/// - `NonFiniteSample(value: f64)`
///   A sample element is NaN or ±∞ and cannot enter the moment sums.
/// - `InvalidMomentOrder(order: u32)`
///   The requested central-moment order violates `k ≥ 1`.
/// - `InvalidReplicates(b: usize)`
///   The Monte Carlo replicate count violates `B ≥ 1`.
///
/// Invariants
/// ----------
/// - Each variant carries just enough payload (offending value or count)
///   for logging and debugging without dragging along data structures.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] for
///   idiomatic `?`-based propagation; a feature-gated
///   `From<BootError> for PyErr` maps all cases to `ValueError` at the
///   Python boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum BootError {
    //------ Input validation errors ------
    EmptySample,
    NonFiniteSample(f64),
    InvalidMomentOrder(u32),
    InvalidReplicates(usize),
}

impl std::error::Error for BootError {}

impl std::fmt::Display for BootError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BootError::EmptySample => {
                write!(f, "Sample must not be empty: the sample mean is undefined.")
            }
            BootError::NonFiniteSample(value) => {
                write!(f, "Invalid sample value: {value}. Must be a finite number.")
            }
            BootError::InvalidMomentOrder(order) => {
                write!(f, "Invalid moment order: {order}. Must satisfy k ≥ 1.")
            }
            BootError::InvalidReplicates(b) => {
                write!(f, "Invalid replicate count: {b}. Must satisfy B ≥ 1.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<BootError> for PyErr {
    fn from(err: BootError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

//! Error types for the regression layer.
//!
//! [`RegError`] covers data-container and parameter validation failures
//! for the linear-Gaussian model. The optimization layer absorbs these
//! via `From<RegError> for DescentError` so descent callers see a single
//! error surface; the Python boundary maps every variant to `ValueError`
//! behind the `python-bindings` feature.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

/// Result alias for regression operations.
pub type RegResult<T> = Result<T, RegError>;

#[derive(Debug, Clone, PartialEq)]
pub enum RegError {
    // ---- Data container ----
    /// Both series are empty.
    EmptyData,
    /// Predictor and response lengths differ.
    LengthMismatch {
        x_len: usize,
        y_len: usize,
    },
    /// A data value is NaN or ±∞.
    NonFiniteData(f64),

    // ---- Parameters ----
    /// Noise scale must be finite and strictly positive.
    SigmaNotPositive(f64),
    /// Parameter vector has the wrong length.
    ParamsLengthMismatch {
        expected: usize,
        actual: usize,
    },
    /// A parameter coordinate is NaN or ±∞.
    NonFiniteParam {
        index: usize,
        value: f64,
    },
}

impl std::error::Error for RegError {}

impl std::fmt::Display for RegError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Data container ----
            RegError::EmptyData => {
                write!(f, "Regression data must be non-empty")
            }
            RegError::LengthMismatch { x_len, y_len } => {
                write!(f, "Predictor/response length mismatch: x has {x_len}, y has {y_len}")
            }
            RegError::NonFiniteData(value) => {
                write!(f, "Regression data contains non-finite value: {value}")
            }

            // ---- Parameters ----
            RegError::SigmaNotPositive(value) => {
                write!(f, "Invalid noise scale sigma: {value}, must be finite and > 0")
            }
            RegError::ParamsLengthMismatch { expected, actual } => {
                write!(f, "Parameter length mismatch: expected {expected}, actual {actual}")
            }
            RegError::NonFiniteParam { index, value } => {
                write!(f, "Invalid parameter at index {index}: {value}, must be finite")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<RegError> for PyErr {
    fn from(err: RegError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

use crate::regression::errors::RegError;

/// Crate-wide result alias for descent operations.
pub type DescentResult<T> = Result<T, DescentError>;

#[derive(Debug, Clone, PartialEq)]
pub enum DescentError {
    // ---- Gradient ----
    /// Implies that FD should be used
    GradientNotImplemented,

    /// Gradient dimensions do not match parameter dimensions.
    GradientDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Gradient elements need to be finite
    InvalidGradient {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    // ---- DescentOptions ----
    /// Step size needs to be positive and finite.
    InvalidStepSize {
        step: f64,
        reason: &'static str,
    },
    /// Gradient tolerance needs to be positive and finite.
    InvalidTolGrad {
        tol: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },

    // ---- Cost function ----
    /// Cost function returned a non-finite value.
    NonFiniteCost {
        value: f64,
    },

    // ---- Optimizer outcome ----
    /// Estimated parameters must be finite.
    InvalidParamsHat {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    // ---- Regression Errors ----
    /// Data container is empty.
    EmptyData,
    /// Predictor and response lengths differ.
    LengthMismatch {
        x_len: usize,
        y_len: usize,
    },
    /// Data contains a non-finite value.
    NonFiniteData {
        value: f64,
    },
    /// Noise scale must be positive and finite.
    SigmaNotPositive {
        value: f64,
    },
    /// Parameter vector length mismatch.
    ParamsLengthMismatch {
        expected: usize,
        actual: usize,
    },
    /// Parameter coordinates need to be finite.
    NonFiniteParam {
        index: usize,
        value: f64,
    },
}

impl std::error::Error for DescentError {}

impl std::fmt::Display for DescentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Gradient ----
            DescentError::GradientNotImplemented => {
                write!(f, "Analytic gradient not implemented")
            }
            DescentError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, found {found}")
            }
            DescentError::InvalidGradient { index, value, reason } => {
                write!(f, "Invalid gradient at index {index}: {value}: {reason}")
            }

            // ---- DescentOptions ----
            DescentError::InvalidStepSize { step, reason } => {
                write!(f, "Invalid step size {step}: {reason}")
            }
            DescentError::InvalidTolGrad { tol, reason } => {
                write!(f, "Invalid gradient tolerance {tol}: {reason}")
            }
            DescentError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }

            // ---- Cost function ----
            DescentError::NonFiniteCost { value } => {
                write!(f, "Non-finite cost value: {value}")
            }

            // ---- Optimizer outcome ----
            DescentError::InvalidParamsHat { index, value, reason } => {
                write!(f, "Invalid estimated parameter at index {index}: {value}: {reason}")
            }

            // ---- Regression Errors ----
            DescentError::EmptyData => {
                write!(f, "Regression data must be non-empty")
            }
            DescentError::LengthMismatch { x_len, y_len } => {
                write!(f, "Predictor/response length mismatch: x has {x_len}, y has {y_len}")
            }
            DescentError::NonFiniteData { value } => {
                write!(f, "Regression data contains non-finite value: {value}")
            }
            DescentError::SigmaNotPositive { value } => {
                write!(f, "Invalid noise scale sigma: {value}, must be finite and > 0")
            }
            DescentError::ParamsLengthMismatch { expected, actual } => {
                write!(f, "Parameter length mismatch: expected {expected}, actual {actual}")
            }
            DescentError::NonFiniteParam { index, value } => {
                write!(f, "Invalid parameter at index {index}: {value}, must be finite")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<DescentError> for PyErr {
    fn from(err: DescentError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

impl From<RegError> for DescentError {
    fn from(err: RegError) -> Self {
        match err {
            RegError::EmptyData => DescentError::EmptyData,
            RegError::LengthMismatch { x_len, y_len } => {
                DescentError::LengthMismatch { x_len, y_len }
            }
            RegError::NonFiniteData(value) => DescentError::NonFiniteData { value },
            RegError::SigmaNotPositive(value) => DescentError::SigmaNotPositive { value },
            RegError::ParamsLengthMismatch { expected, actual } => {
                DescentError::ParamsLengthMismatch { expected, actual }
            }
            RegError::NonFiniteParam { index, value } => {
                DescentError::NonFiniteParam { index, value }
            }
        }
    }
}

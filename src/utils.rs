#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::optimization::{
    traits::DescentOptions,
    types::{DEFAULT_MAX_ITER, DEFAULT_STEP_SIZE},
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

#[cfg(feature = "python-bindings")]
pub fn extract_descent_options(
    step_size: Option<f64>, max_iter: Option<usize>, tol_grad: Option<f64>, verbose: Option<bool>,
) -> PyResult<DescentOptions> {
    // DescentOptions::new -> DescentResult<DescentOptions> -> PyErr
    let opts = DescentOptions::new(
        step_size.unwrap_or(DEFAULT_STEP_SIZE),
        max_iter.unwrap_or(DEFAULT_MAX_ITER),
        tol_grad,
        verbose.unwrap_or(false),
    )?;
    Ok(opts)
}

//! Paired data container for linear regression.
//!
//! Purpose
//! -------
//! Provide a small, validated container for (x, y) observation pairs
//! used by the linear-Gaussian likelihood. This module centralizes input
//! validation for raw regression data so downstream likelihood and
//! gradient code can assume clean, equal-length, finite series.
//!
//! Key behaviors
//! -------------
//! - [`RegData`] enforces basic data invariants (non-empty, equal
//!   lengths, finite values) at construction time.
//! - Accessors expose the validated slices and their common length
//!   without re-checking.
//!
//! Invariants & assumptions
//! ------------------------
//! - `x` and `y` must have the same non-zero length.
//! - All values in both series must be finite.
//!
//! Conventions
//! -----------
//! - `x` holds the predictors and `y` the responses of the model
//!   `y_i = w0 + w1 x_i + noise`.
//! - This module does not center, scale, or otherwise transform the
//!   input; it only validates it.
//!
//! Downstream usage
//! ----------------
//! - Construct [`RegData`] at the boundary where raw observations enter
//!   the regression stack; pass it as the `Data` type of the
//!   [`Objective`](crate::optimization::traits::Objective)
//!   implementation in [`linear`](crate::regression::linear).
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path, empty input, length mismatch, and
//!   non-finite values in either series.
use crate::regression::errors::{RegError, RegResult};

/// `RegData` — validated (x, y) observation pairs.
///
/// Fields
/// ------
/// - `x`: `Vec<f64>`
///   Predictor values; finite, same length as `y`.
/// - `y`: `Vec<f64>`
///   Response values; finite, same length as `x`.
///
/// Invariants
/// ----------
/// - `x.len() == y.len() > 0`.
/// - All entries in both vectors are finite.
///
/// Notes
/// -----
/// - Validation is O(n) with a single scan over each series; after
///   construction this is a plain container with no hidden allocations.
#[derive(Debug, Clone, PartialEq)]
pub struct RegData {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl RegData {
    /// Construct a validated [`RegData`] instance from raw series.
    ///
    /// Parameters
    /// ----------
    /// - `x`: `Vec<f64>`
    ///   Predictor series. Must be non-empty and fully finite.
    /// - `y`: `Vec<f64>`
    ///   Response series. Must match `x` in length and be fully finite.
    ///
    /// Returns
    /// -------
    /// `RegResult<RegData>`
    ///   The validated container, or the first violated constraint.
    ///
    /// Errors
    /// ------
    /// - `RegError::EmptyData` when both series are empty.
    /// - `RegError::LengthMismatch` when the lengths differ.
    /// - `RegError::NonFiniteData` with the first NaN or ±∞ found,
    ///   scanning `x` before `y`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use bootfit::regression::data::RegData;
    /// let data = RegData::new(vec![0.0, 1.0], vec![1.0, 3.0]).unwrap();
    /// assert_eq!(data.len(), 2);
    /// ```
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> RegResult<Self> {
        if x.is_empty() && y.is_empty() {
            return Err(RegError::EmptyData);
        }
        if x.len() != y.len() {
            return Err(RegError::LengthMismatch { x_len: x.len(), y_len: y.len() });
        }
        for &value in x.iter().chain(y.iter()) {
            if !value.is_finite() {
                return Err(RegError::NonFiniteData(value));
            }
        }
        Ok(RegData { x, y })
    }

    /// Predictor values.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Response values.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of observation pairs.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always `false` for a constructed instance; present for slice-like
    /// API completeness.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Construction behavior of `RegData::new`.
    // - Enforcement of invariants: non-empty, equal lengths, finiteness.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `RegData::new` succeeds on valid equal-length series
    // and preserves the data exactly.
    //
    // Given
    // -----
    // - x = [0, 1, 2], y = [1, 3, 5].
    //
    // Expect
    // ------
    // - `Ok(..)` with accessors returning the original slices.
    fn regdata_new_returns_ok_for_valid_input() {
        let x = vec![0.0, 1.0, 2.0];
        let y = vec![1.0, 3.0, 5.0];

        let data = RegData::new(x.clone(), y.clone()).unwrap();

        assert_eq!(data.x(), x.as_slice());
        assert_eq!(data.y(), y.as_slice());
        assert_eq!(data.len(), 3);
    }

    #[test]
    // Purpose
    // -------
    // Ensure `RegData::new` rejects empty input.
    //
    // Given
    // -----
    // - Both series empty.
    //
    // Expect
    // ------
    // - `Err(RegError::EmptyData)`.
    fn regdata_new_returns_error_for_empty_input() {
        let result = RegData::new(Vec::new(), Vec::new());

        assert_eq!(result.unwrap_err(), RegError::EmptyData);
    }

    #[test]
    // Purpose
    // -------
    // Ensure `RegData::new` rejects mismatched lengths and reports both.
    //
    // Given
    // -----
    // - x of length 3, y of length 2.
    //
    // Expect
    // ------
    // - `Err(RegError::LengthMismatch { x_len: 3, y_len: 2 })`.
    fn regdata_new_returns_error_for_length_mismatch() {
        let result = RegData::new(vec![1.0, 2.0, 3.0], vec![1.0, 2.0]);

        assert_eq!(result.unwrap_err(), RegError::LengthMismatch { x_len: 3, y_len: 2 });
    }

    #[test]
    // Purpose
    // -------
    // Ensure `RegData::new` rejects non-finite values in either series.
    //
    // Given
    // -----
    // - A NaN in y.
    //
    // Expect
    // ------
    // - `Err(RegError::NonFiniteData(..))`.
    fn regdata_new_returns_error_for_non_finite_values() {
        let result = RegData::new(vec![1.0, 2.0], vec![1.0, f64::NAN]);

        match result {
            Err(RegError::NonFiniteData(value)) => assert!(value.is_nan()),
            other => panic!("expected NonFiniteData, got {other:?}"),
        }
    }
}

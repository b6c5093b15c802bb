//! regression::design: lagged design matrices for pairwise causality tests.
//!
//! Purpose
//! -------
//! Turn two aligned series into the response vector and the restricted /
//! unrestricted regressor matrices used by the Granger F-test at a single
//! lag order `k`.
//!
//! Conventions
//! -----------
//! - Rows correspond to t = k,…,T−1, so the usable sample has `N = T − k`
//!   observations; the first `k` observations only serve as lags.
//! - Column order is `[A(t−1),…,A(t−k), B(t−1),…,B(t−k), 1]`: own lags
//!   first, cause lags next (unrestricted only), intercept last. The
//!   Wald test in `statistical_tests::granger` relies on the cause lags
//!   occupying columns `k..2k` of the unrestricted design.
//! - Matrices are `ndarray::Array2<f64>` in row-major order; conversion to
//!   `nalgebra` happens inside the OLS solver.
use crate::regression::errors::{RegressionError, RegressionResult};
use ndarray::{Array1, Array2};

/// LaggedDesign: response and regressor matrices for one lag order.
///
/// Fields
/// ------
/// - `lag`: `usize`
///   Lag order `k` used to build the matrices.
/// - `response`: `Array1<f64>`
///   A(t) for t = k,…,T−1 (length `N = T − k`).
/// - `restricted`: `Array2<f64>`
///   `N × (k + 1)` matrix of own lags plus intercept.
/// - `unrestricted`: `Array2<f64>`
///   `N × (2k + 1)` matrix of own lags, cause lags, and intercept.
#[derive(Debug, Clone, PartialEq)]
pub struct LaggedDesign {
    pub lag: usize,
    pub response: Array1<f64>,
    pub restricted: Array2<f64>,
    pub unrestricted: Array2<f64>,
}

impl LaggedDesign {
    /// Number of usable observations `N = T − k`.
    pub fn nobs(&self) -> usize {
        self.response.len()
    }

    /// Column range holding the cause lags in [`unrestricted`](Self::unrestricted).
    pub fn cause_columns(&self) -> std::ops::Range<usize> {
        self.lag..2 * self.lag
    }
}

/// Build the restricted and unrestricted designs for lag order `k`.
///
/// Parameters
/// ----------
/// - `target`: `&[f64]`
///   Series A being predicted.
/// - `cause`: `&[f64]`
///   Candidate predictor B; must have the same length as `target`.
/// - `lag`: `usize`
///   Lag order `k`, with `1 ≤ k < T`.
///
/// Errors
/// ------
/// - `RegressionError::ShapeMismatch` when the series lengths differ.
/// - `RegressionError::LagOutOfRange` when `lag == 0` or `lag >= T`.
///
/// Notes
/// -----
/// - Does not check residual degrees of freedom; the OLS solver reports
///   `NoResidualDof` when the unrestricted design is too wide.
pub fn lagged_design(target: &[f64], cause: &[f64], lag: usize) -> RegressionResult<LaggedDesign> {
    let len = target.len();
    if cause.len() != len {
        return Err(RegressionError::ShapeMismatch { rows: len, response_len: cause.len() });
    }
    if lag == 0 || lag >= len {
        return Err(RegressionError::LagOutOfRange { lag, len });
    }

    let nobs = len - lag;
    let response = Array1::from_iter(target[lag..].iter().copied());

    let restricted = Array2::from_shape_fn((nobs, lag + 1), |(row, col)| {
        let t = row + lag;
        if col < lag { target[t - col - 1] } else { 1.0 }
    });

    let unrestricted = Array2::from_shape_fn((nobs, 2 * lag + 1), |(row, col)| {
        let t = row + lag;
        match col {
            c if c < lag => target[t - c - 1],
            c if c < 2 * lag => cause[t - (c - lag) - 1],
            _ => 1.0,
        }
    });

    Ok(LaggedDesign { lag, response, restricted, unrestricted })
}

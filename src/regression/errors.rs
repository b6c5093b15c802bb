//! regression::errors: failure modes of the least-squares utilities.
//!
//! Purpose
//! -------
//! Give the design-matrix builders and the OLS solver a small error surface
//! that higher layers (the Granger tester) can map into their own error
//! types with lag and model context attached.
//!
//! Conventions
//! -----------
//! - Variants carry only shapes and indices, never the matrices themselves.
//! - Messages describe the violated constraint ("rank-deficient design",
//!   "no residual degrees of freedom").

pub type RegressionResult<T> = Result<T, RegressionError>;

/// RegressionError: error conditions for OLS fitting and design assembly.
///
/// Variants
/// --------
/// - `Singular { column }`
///   The design matrix is (numerically) rank-deficient; `column` is the
///   first column whose QR diagonal fell below the rank tolerance.
/// - `ShapeMismatch { rows, response_len }`
///   The response vector length differs from the number of design rows.
/// - `NoResidualDof { nobs, params }`
///   The design has at least as many columns as rows, leaving no residual
///   degrees of freedom for a variance estimate.
/// - `LagOutOfRange { lag, len }`
///   A lagged design was requested with `lag == 0` or `lag >= len`.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    Singular { column: usize },
    ShapeMismatch { rows: usize, response_len: usize },
    NoResidualDof { nobs: usize, params: usize },
    LagOutOfRange { lag: usize, len: usize },
}

impl std::error::Error for RegressionError {}

impl std::fmt::Display for RegressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegressionError::Singular { column } => {
                write!(f, "Regression Error: rank-deficient design matrix (column {column})")
            }
            RegressionError::ShapeMismatch { rows, response_len } => write!(
                f,
                "Regression Error: design has {rows} rows but response has {response_len} entries"
            ),
            RegressionError::NoResidualDof { nobs, params } => write!(
                f,
                "Regression Error: no residual degrees of freedom ({nobs} observations, {params} parameters)"
            ),
            RegressionError::LagOutOfRange { lag, len } => {
                write!(f, "Regression Error: lag {lag} must satisfy 1 ≤ lag < {len}")
            }
        }
    }
}

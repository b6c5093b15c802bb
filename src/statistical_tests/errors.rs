//! statistical_tests::errors: error types for the Granger causality tester.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the pairwise lagged-regression
//! causality test and its validation helpers. Failures from the least-squares
//! layer are mapped here with lag and model context attached.
//!
//! Key behaviors
//! -------------
//! - Define [`GrangerResult`] and [`GrangerError`] as the canonical result and
//!   error types for `statistical_tests::granger` and
//!   `statistical_tests::validation`.
//! - Attach human-readable `Display` messages phrased in terms of the violated
//!   constraint, e.g. "N − 2k − 1 must be positive".
//!
//! Invariants & assumptions
//! ------------------------
//! - Test routines validate inputs up front and return
//!   [`GrangerResult<T>`] instead of panicking.
//! - `InsufficientData` is raised for the largest requested lag, since that
//!   lag has the fewest usable observations and the most parameters.
//! - `GrangerError` values are small and cheap to clone.
//!
//! Conventions
//! -----------
//! - `ModelKind` names which of the two nested regressions failed, so a
//!   singular design can be traced to the own-lag or the joint model.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module check that `Display` messages embed their
//!   payloads (lag, observation counts, offending value).
//! - The tester and validation modules exercise each variant indirectly.
use crate::regression::errors::RegressionError;

pub type GrangerResult<T> = Result<T, GrangerError>;

/// ModelKind: which of the nested regressions an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    /// Target on its own lags plus intercept.
    Restricted,
    /// Target on its own lags, the cause's lags, and intercept.
    Unrestricted,
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelKind::Restricted => write!(f, "restricted"),
            ModelKind::Unrestricted => write!(f, "unrestricted"),
        }
    }
}

/// GrangerError: error conditions for the pairwise causality test.
///
/// Variants
/// --------
/// - `InvalidMaxLag(max_lag)`
///   The requested maximum lag is zero.
/// - `LengthMismatch { target, cause }`
///   The two series are not aligned (different lengths).
/// - `InvalidData { index, value }`
///   A non-finite observation at `index`.
/// - `InsufficientData { lag, nobs, params }`
///   At lag `lag` the usable sample `nobs = T − lag` leaves no residual
///   degrees of freedom for the unrestricted model with `params = 2·lag + 1`
///   coefficients, i.e. `nobs − params ≤ 0`.
/// - `SingularMatrix { lag, model }`
///   The design of `model` at `lag` is rank-deficient.
/// - `ZeroResidual { lag }`
///   The unrestricted model fits the target exactly, so the F ratio is
///   undefined.
/// - `Distribution { lag, message }`
///   The reference F or χ² distribution could not be constructed.
/// - `Regression { lag, error }`
///   Any other failure surfaced by the least-squares layer.
#[derive(Debug, Clone, PartialEq)]
pub enum GrangerError {
    InvalidMaxLag(usize),
    LengthMismatch { target: usize, cause: usize },
    InvalidData { index: usize, value: f64 },
    InsufficientData { lag: usize, nobs: usize, params: usize },
    SingularMatrix { lag: usize, model: ModelKind },
    ZeroResidual { lag: usize },
    Distribution { lag: usize, message: String },
    Regression { lag: usize, error: RegressionError },
}

impl GrangerError {
    /// Attach lag and model context to a least-squares failure.
    pub fn from_regression(lag: usize, model: ModelKind, error: RegressionError) -> Self {
        match error {
            RegressionError::Singular { .. } => GrangerError::SingularMatrix { lag, model },
            RegressionError::NoResidualDof { nobs, params } => {
                GrangerError::InsufficientData { lag, nobs, params }
            }
            other => GrangerError::Regression { lag, error: other },
        }
    }
}

impl std::error::Error for GrangerError {}

impl std::fmt::Display for GrangerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrangerError::InvalidMaxLag(max_lag) => {
                write!(f, "Invalid max lag: {max_lag}. Must be at least 1.")
            }
            GrangerError::LengthMismatch { target, cause } => write!(
                f,
                "Series are not aligned: target has {target} observations, cause has {cause}."
            ),
            GrangerError::InvalidData { index, value } => {
                write!(f, "Invalid data value {value} at index {index}. Must be a finite number.")
            }
            GrangerError::InsufficientData { lag, nobs, params } => write!(
                f,
                "Insufficient observations at lag {lag}: {nobs} usable rows for {params} parameters (N − 2k − 1 must be positive)."
            ),
            GrangerError::SingularMatrix { lag, model } => {
                write!(f, "Singular design matrix for the {model} model at lag {lag}.")
            }
            GrangerError::ZeroResidual { lag } => write!(
                f,
                "Unrestricted model at lag {lag} fits exactly; the F statistic is undefined."
            ),
            GrangerError::Distribution { lag, message } => {
                write!(f, "Reference distribution unavailable at lag {lag}: {message}")
            }
            GrangerError::Regression { lag, error } => write!(f, "At lag {lag}: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` payload embedding for the main variants.
    // - Mapping of least-squares failures into Granger errors.
    // -------------------------------------------------------------------------

    #[test]
    fn insufficient_data_message_embeds_lag_and_counts() {
        let err = GrangerError::InsufficientData { lag: 5, nobs: 11, params: 11 };

        let msg = err.to_string();

        assert!(msg.contains("lag 5"), "missing lag in: {msg}");
        assert!(msg.contains("11 usable rows"), "missing counts in: {msg}");
    }

    #[test]
    fn singular_matrix_message_names_model() {
        let err = GrangerError::SingularMatrix { lag: 2, model: ModelKind::Unrestricted };

        let msg = err.to_string();

        assert!(msg.contains("unrestricted") && msg.contains("lag 2"), "got: {msg}");
    }

    #[test]
    fn invalid_data_message_includes_value_and_index() {
        let msg = GrangerError::InvalidData { index: 7, value: f64::NAN }.to_string();
        assert!(msg.contains("NaN") && msg.contains('7'), "got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure regression failures keep their meaning once lag context is
    // attached.
    //
    // Given
    // -----
    // - A `Singular`, a `NoResidualDof`, and a `ShapeMismatch` error.
    //
    // Expect
    // ------
    // - `SingularMatrix`, `InsufficientData`, and the `Regression`
    //   passthrough respectively.
    fn from_regression_maps_each_failure_kind() {
        assert_eq!(
            GrangerError::from_regression(
                3,
                ModelKind::Restricted,
                RegressionError::Singular { column: 1 }
            ),
            GrangerError::SingularMatrix { lag: 3, model: ModelKind::Restricted }
        );
        assert_eq!(
            GrangerError::from_regression(
                3,
                ModelKind::Unrestricted,
                RegressionError::NoResidualDof { nobs: 7, params: 7 }
            ),
            GrangerError::InsufficientData { lag: 3, nobs: 7, params: 7 }
        );
        let mismatch = RegressionError::ShapeMismatch { rows: 4, response_len: 5 };
        assert_eq!(
            GrangerError::from_regression(1, ModelKind::Restricted, mismatch.clone()),
            GrangerError::Regression { lag: 1, error: mismatch }
        );
    }
}

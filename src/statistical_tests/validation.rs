//! statistical_tests::validation: shared input guards for the causality test.
//!
//! Purpose
//! -------
//! Centralize the checks that must hold before any lagged regression is
//! built: a positive maximum lag, aligned series, finite observations, and
//! enough observations for the widest model.
//!
//! Invariants & assumptions
//! ------------------------
//! - With `T` observations and lag `k`, the usable sample is `N = T − k` and
//!   the unrestricted model has `2k + 1` coefficients, so the test needs
//!   `N − 2k − 1 > 0`, i.e. `T > 3k + 1`.
//! - The condition is monotone in `k`: checking `max_lag` covers every
//!   smaller lag.
//!
//! Conventions
//! -----------
//! - Purely about validation. No allocation, no I/O.
//! - Checks run in a fixed order (lag, alignment, finiteness, sample size)
//!   so the reported error is deterministic.
use crate::statistical_tests::errors::{GrangerError, GrangerResult};

/// Validate the inputs of a Granger causality run.
///
/// Parameters
/// ----------
/// - `target`: `&[f64]`
///   Series being predicted (A).
/// - `cause`: `&[f64]`
///   Candidate predictor (B); must be aligned with `target`.
/// - `max_lag`: `usize`
///   Largest lag order to be tested; must be ≥ 1.
///
/// Errors
/// ------
/// - `GrangerError::InvalidMaxLag` when `max_lag == 0`.
/// - `GrangerError::LengthMismatch` when the lengths differ.
/// - `GrangerError::InvalidData` for the first non-finite value (target
///   scanned before cause; the index is the row index).
/// - `GrangerError::InsufficientData` when `T − max_lag − (2·max_lag + 1) ≤ 0`.
///
/// Examples
/// --------
/// ```rust
/// # use rust_granger::statistical_tests::validation::validate_input;
/// # use rust_granger::statistical_tests::errors::GrangerError;
/// let a: Vec<f64> = (0..10).map(|t| (t as f64).sin()).collect();
/// let b: Vec<f64> = (0..10).map(|t| (t as f64).cos()).collect();
///
/// assert!(validate_input(&a, &b, 2).is_ok());
/// // T = 10 = 3·3 + 1 leaves N − 2k − 1 = 0 at k = 3.
/// assert!(matches!(
///     validate_input(&a, &b, 3),
///     Err(GrangerError::InsufficientData { lag: 3, .. })
/// ));
/// ```
pub fn validate_input(target: &[f64], cause: &[f64], max_lag: usize) -> GrangerResult<()> {
    if max_lag == 0 {
        return Err(GrangerError::InvalidMaxLag(max_lag));
    }

    if target.len() != cause.len() {
        return Err(GrangerError::LengthMismatch { target: target.len(), cause: cause.len() });
    }

    for series in [target, cause] {
        if let Some((index, &value)) = series.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(GrangerError::InvalidData { index, value });
        }
    }

    let nobs = target.len().saturating_sub(max_lag);
    let params = max_lag.saturating_mul(2).saturating_add(1);
    if nobs <= params {
        return Err(GrangerError::InsufficientData { lag: max_lag, nobs, params });
    }

    Ok(())
}

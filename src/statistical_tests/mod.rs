//! statistical_tests: pairwise Granger causality and its shared infrastructure.
//!
//! Purpose
//! -------
//! Collect the causality-testing routine together with its input
//! validation and error handling. The test compares nested lagged
//! regressions per lag order and reports F, χ², likelihood-ratio and Wald
//! statistics.
//!
//! Key behaviors
//! -------------
//! - Run the test for every lag 1..=max_lag via [`granger_causality`], or
//!   for a single lag via [`LagOutcome::at_lag`].
//! - Centralize input guards in [`validate_input`] (positive lag, aligned
//!   and finite series, enough observations for the widest model).
//! - Report failures through [`GrangerError`] / [`GrangerResult`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are real-valued, aligned, finite series; validation runs before
//!   any regression is built.
//! - Routines never panic on user-facing invalid inputs; insufficient data
//!   and singular designs are errors, never NaN results.
//!
//! Conventions
//! -----------
//! - Arguments are ordered `(target, cause)`: the test asks whether the
//!   cause's past helps predict the target.
//! - Interpretation against a significance level is left to the caller
//!   (see [`LagOutcome::rejects_null`]).
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use rust_granger::statistical_tests::{GrangerResult, LagOutcome, granger_causality};
//!
//!   fn eggs_cause_chickens(chicken: &[f64], egg: &[f64]) -> GrangerResult<Vec<LagOutcome>> {
//!       granger_causality(chicken, egg, 5)
//!   }
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests in [`errors`] verify `Display` payloads and regression error
//!   mapping.
//! - Unit tests in [`validation`] exercise every branch, including the
//!   exact N − 2k − 1 = 0 boundary.
//! - Unit tests in [`granger`] cover output shape, bounds, statistic
//!   cross-checks, detection of a planted dependence, and error paths.

pub mod errors;
pub mod granger;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{GrangerError, GrangerResult, ModelKind};
pub use self::granger::{Chi2Test, FTest, LagOutcome, granger_causality};
pub use self::validation::validate_input;

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::errors::{GrangerError, GrangerResult};
    pub use super::granger::{LagOutcome, granger_causality};
}

//! regression: least-squares building blocks for lagged-regression tests.
//!
//! Purpose
//! -------
//! Provide the small numerics layer the causality tests stand on: lagged
//! design construction ([`lagged_design`]) and QR-based ordinary least
//! squares ([`OlsFit`]), with a dedicated error type
//! ([`RegressionError`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are finite; validation of raw series happens upstream in
//!   `statistical_tests::validation`.
//! - Rank-deficient designs are reported, never silently solved.
//!
//! Downstream usage
//! ----------------
//! - `statistical_tests::granger` builds one [`LaggedDesign`] per lag and
//!   fits both of its models with [`OlsFit::fit`], mapping
//!   [`RegressionError`] into its own error type with lag context.

pub mod design;
pub mod errors;
pub mod ols;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::design::{LaggedDesign, lagged_design};
pub use self::errors::{RegressionError, RegressionResult};
pub use self::ols::OlsFit;

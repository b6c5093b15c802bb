//! analysis: configured end-to-end runs and their reports.
//!
//! Purpose
//! -------
//! Tie the loader, the chart, and the causality tests together behind one
//! entry point, [`run_analysis`], driven by an [`AnalysisConfig`].
//!
//! Key behaviors
//! -------------
//! - [`AnalysisConfig`] is read from TOML (or defaulted) and validated once.
//! - [`run_analysis`] loads the CSV once and tests both directions from the
//!   same table; [`analyze_table`] does the testing part for a table already
//!   in memory.
//! - [`AnalysisReport`] keeps the results structured; printing happens
//!   through `Display`.
//!
//! Downstream usage
//! ----------------
//! - The `granger-analysis` binary builds an [`AnalysisConfig`] from its
//!   flags and prints the returned report.

pub mod config;
pub mod errors;
pub mod pipeline;
pub mod report;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::config::{AnalysisConfig, ChartConfig};
pub use self::errors::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use self::pipeline::{analyze_table, run_analysis};
pub use self::report::{AnalysisReport, CausalityReport, Verdict};

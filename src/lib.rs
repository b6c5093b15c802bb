//! rust_granger: pairwise Granger causality analysis of annual series.
//!
//! Purpose
//! -------
//! Serve as the crate root for loading a year-indexed two-series CSV (the
//! ChickEgg dataset by default), charting both series on a dual-axis plot,
//! and testing Granger causality in both directions for lags 1..=max_lag.
//!
//! Key behaviors
//! -------------
//! - [`data`] loads the CSV into a [`data::SeriesTable`] and hands out
//!   directional [`data::SeriesPair`] views.
//! - [`regression`] builds lagged design matrices and fits OLS by QR.
//! - [`statistical_tests`] runs the restricted vs. unrestricted comparison
//!   per lag and reports F, χ², likelihood-ratio and Wald statistics.
//! - [`visualization`] renders the dual-axis SVG chart.
//! - [`analysis`] wires the stages together from an
//!   [`analysis::AnalysisConfig`] and returns a printable report.
//!
//! Invariants & assumptions
//! ------------------------
//! - Series are aligned by row position; no interpolation or resampling is
//!   performed.
//! - The tests assume stationarity; nothing is differenced or detrended.
//!
//! Conventions
//! -----------
//! - Every stage has its own error enum with a `*Result` alias; the binary
//!   reports them through `anyhow`.
//! - Library code logs through `tracing`; installing a subscriber is the
//!   binary's job.
//!
//! Downstream usage
//! ----------------
//! - Library callers usually need only [`analysis::run_analysis`], or
//!   [`statistical_tests::granger_causality`] for series already in memory.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each module; `tests/` runs the full pipeline on
//!   the bundled ChickEgg CSV and checks the published p-value pattern.

pub mod analysis;
pub mod data;
pub mod regression;
pub mod statistical_tests;
pub mod visualization;

//! analysis::pipeline: load, chart, and test in one call.
//!
//! Purpose
//! -------
//! Run the whole analysis from an [`AnalysisConfig`]: load the CSV once,
//! optionally render the dual-axis chart, then test both causal directions
//! from the same in-memory table.
//!
//! Key behaviors
//! -------------
//! - The configuration is validated before any file is touched.
//! - A chart failure aborts the run; a disabled chart is skipped silently.
//! - The forward direction tests "second series caused by first"; the
//!   reverse direction is the swapped pair.
use crate::{
    analysis::{
        config::AnalysisConfig,
        errors::AnalysisResult,
        report::{AnalysisReport, CausalityReport},
    },
    data::SeriesTable,
    visualization::render_dual_axis_chart,
};
use tracing::{debug, info};

/// Run the configured analysis end to end.
///
/// Errors
/// ------
/// - `AnalysisError::Config` when [`AnalysisConfig::validate`] fails.
/// - `AnalysisError::Data` when the CSV cannot be read or parsed.
/// - `AnalysisError::Chart` when charting is enabled and rendering fails.
/// - `AnalysisError::Granger` when either direction cannot be tested.
///
/// [`AnalysisError`]: crate::analysis::AnalysisError
pub fn run_analysis(config: &AnalysisConfig) -> AnalysisResult<AnalysisReport> {
    config.validate()?;
    let table = SeriesTable::from_path(&config.input, &config.load_options())?;
    debug!("\n{}", table.head(10));

    let chart = if config.chart.enabled {
        let [left, right] = &config.series;
        render_dual_axis_chart(&table, left, right, &config.chart.options(), &config.chart.output)?;
        Some(config.chart.output.clone())
    } else {
        None
    };

    let mut report = analyze_table(&table, config)?;
    report.chart = chart;
    Ok(report)
}

/// Test both directions on an already loaded table. No chart is drawn.
///
/// Errors
/// ------
/// - `AnalysisError::Config` when the configuration is invalid.
/// - `AnalysisError::Data` when a configured series is not in `table`.
/// - `AnalysisError::Granger` when either direction cannot be tested.
///
/// [`AnalysisError`]: crate::analysis::AnalysisError
pub fn analyze_table(table: &SeriesTable, config: &AnalysisConfig) -> AnalysisResult<AnalysisReport> {
    config.validate()?;
    let [first, second] = &config.series;
    let pair = table.pair(second, first)?;

    let forward = CausalityReport::from_pair(&pair, config.max_lag)?;
    let reverse = CausalityReport::from_pair(&pair.swapped(), config.max_lag)?;

    for report in [&forward, &reverse] {
        info!(
            cause = report.cause(),
            target = report.target(),
            first_significant_lag = ?report.first_significant_lag(config.significance),
            "Granger causality tested"
        );
    }

    Ok(AnalysisReport {
        rows: table.len(),
        significance: config.significance,
        chart: None,
        forward,
        reverse,
    })
}

//! granger-analysis: command-line entry point.
//!
//! Loads the configured CSV, renders the dual-axis chart, and prints Granger
//! causality results for both directions. Flags override values from the
//! optional TOML config file.
use anyhow::{Context, Result};
use clap::Parser;
use rust_granger::analysis::{AnalysisConfig, run_analysis};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "granger-analysis", version, about = "Pairwise Granger causality for two annual series")]
struct Cli {
    /// CSV file with a year column and the two series
    input: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Largest lag order to test
    #[arg(long)]
    max_lag: Option<usize>,

    /// Significance level for the verdict lines
    #[arg(long)]
    significance: Option<f64>,

    /// Write the chart to this SVG file
    #[arg(long, conflicts_with = "no_chart")]
    chart: Option<PathBuf>,

    /// Skip rendering the chart
    #[arg(long)]
    no_chart: bool,
}

impl Cli {
    fn into_config(self) -> Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::from_path(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => AnalysisConfig::default(),
        };

        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(max_lag) = self.max_lag {
            config.max_lag = max_lag;
        }
        if let Some(significance) = self.significance {
            config.significance = significance;
        }
        if let Some(chart) = self.chart {
            config.chart.enabled = true;
            config.chart.output = chart;
        }
        if self.no_chart {
            config.chart.enabled = false;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().into_config()?;
    info!(input = %config.input.display(), max_lag = config.max_lag, "starting analysis");

    let report = run_analysis(&config).context("Granger analysis failed")?;
    println!("{report}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Precedence of flags over the config file over defaults.
    // - The `--chart` / `--no-chart` switches and their conflict.
    // -------------------------------------------------------------------------

    fn parse(args: &[&str]) -> Result<AnalysisConfig> {
        let argv = std::iter::once("granger-analysis").chain(args.iter().copied());
        Cli::try_parse_from(argv)?.into_config()
    }

    #[test]
    // Purpose
    // -------
    // Verify the three configuration layers resolve in the documented order.
    //
    // Given
    // -----
    // - A config file setting `max_lag = 7` and `significance = 0.01`.
    // - `--max-lag 3` on the command line.
    //
    // Expect
    // ------
    // - max_lag = 3 (flag beats file), significance = 0.01 (file beats
    //   default), input = default path (neither layer sets it).
    fn flags_override_file_and_file_overrides_defaults() {
        // Arrange
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("granger.toml");
        std::fs::write(&path, "max_lag = 7\nsignificance = 0.01\n").expect("write config");
        let path = path.to_str().expect("utf-8 temp path");

        // Act
        let config = parse(&["--config", path, "--max-lag", "3"]).expect("valid arguments");

        // Assert
        assert_eq!(config.max_lag, 3);
        assert_eq!(config.significance, 0.01);
        assert_eq!(config.input, AnalysisConfig::default().input);
    }

    #[test]
    fn positional_input_replaces_default_path() {
        let config = parse(&["data/other.csv"]).expect("valid arguments");

        assert_eq!(config.input, PathBuf::from("data/other.csv"));
        assert_eq!(config.max_lag, 5);
    }

    #[test]
    fn chart_flag_enables_chart_at_given_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("granger.toml");
        std::fs::write(&path, "[chart]\nenabled = false\n").expect("write config");
        let path = path.to_str().expect("utf-8 temp path");

        let config = parse(&["--config", path, "--chart", "out.svg"]).expect("valid arguments");

        assert!(config.chart.enabled);
        assert_eq!(config.chart.output, PathBuf::from("out.svg"));
    }

    #[test]
    fn no_chart_flag_disables_chart() {
        let config = parse(&["--no-chart"]).expect("valid arguments");

        assert!(!config.chart.enabled);
    }

    #[test]
    fn chart_and_no_chart_together_are_rejected() {
        let err = Cli::try_parse_from(["granger-analysis", "--chart", "a.svg", "--no-chart"])
            .expect_err("conflicting flags");

        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn missing_config_file_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.toml");

        let err = parse(&["--config", path.to_str().expect("utf-8 temp path")])
            .expect_err("missing file");

        assert!(err.to_string().contains("failed to load config"), "got {err:#}");
    }
}

//! analysis::config: explicit configuration for one analysis run.
//!
//! Purpose
//! -------
//! Replace the hard-coded input path and lag of an interactive session with a
//! typed configuration: where the CSV lives, which columns to read, the
//! maximum lag, the significance level used for verdicts, and the chart
//! settings.
//!
//! Key behaviors
//! -------------
//! - Deserialize from TOML ([`AnalysisConfig::from_toml_str`],
//!   [`AnalysisConfig::from_path`]); every field has a default, so a partial
//!   file is valid.
//! - [`AnalysisConfig::validate`] checks cross-field constraints once, before
//!   any file is opened.
//!
//! Conventions
//! -----------
//! - `series = [first, second]`: the first series is drawn on the left axis.
//!   The analysis tests "second caused by first" and then the swapped
//!   direction.
//! - Unknown keys are rejected so typos surface as parse errors.
use crate::{
    analysis::errors::{ConfigError, ConfigResult},
    data::LoadOptions,
    visualization::ChartOptions,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// AnalysisConfig: inputs of [`run_analysis`](crate::analysis::run_analysis).
///
/// Fields
/// ------
/// - `input`: CSV path (default `datasets/ChickEgg.csv`).
/// - `year_column`: index column name (default `year`).
/// - `series`: the two series names (default `["chicken", "egg"]`).
/// - `max_lag`: largest lag order tested (default 5).
/// - `significance`: alpha for verdicts (default 0.05).
/// - `chart`: chart settings, see [`ChartConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub input: PathBuf,
    pub year_column: String,
    pub series: [String; 2],
    pub max_lag: usize,
    pub significance: f64,
    pub chart: ChartConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            input: PathBuf::from("datasets/ChickEgg.csv"),
            year_column: "year".to_string(),
            series: ["chicken".to_string(), "egg".to_string()],
            max_lag: 5,
            significance: 0.05,
            chart: ChartConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Render the configuration back to TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check value constraints.
    ///
    /// Errors
    /// ------
    /// - `ConfigError::Invalid` when `max_lag == 0`, `significance ∉ (0, 1)`,
    ///   the two series names coincide or are empty, or a chart dimension is
    ///   zero while charting is enabled.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_lag == 0 {
            return Err(ConfigError::Invalid("max_lag must be at least 1".into()));
        }
        if !(self.significance > 0.0 && self.significance < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "significance must lie in (0, 1), got {}",
                self.significance
            )));
        }
        let [first, second] = &self.series;
        if first.is_empty() || second.is_empty() {
            return Err(ConfigError::Invalid("series names must not be empty".into()));
        }
        if first == second {
            return Err(ConfigError::Invalid(format!("series names must differ, got '{first}' twice")));
        }
        if self.chart.enabled && (self.chart.width == 0 || self.chart.height == 0) {
            return Err(ConfigError::Invalid("chart width and height must be positive".into()));
        }
        Ok(())
    }

    /// Column selection for the loader.
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions { year_column: self.year_column.clone(), series: self.series.to_vec() }
    }
}

/// ChartConfig: whether and how to render the dual-axis chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub enabled: bool,
    pub output: PathBuf,
    pub title: String,
    pub x_label: String,
    pub left_label: String,
    pub right_label: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        let options = ChartOptions::default();
        ChartConfig {
            enabled: true,
            output: PathBuf::from("chickegg.svg"),
            title: options.title,
            x_label: options.x_label,
            left_label: options.left_label,
            right_label: options.right_label,
            width: options.width,
            height: options.height,
        }
    }
}

impl ChartConfig {
    pub fn options(&self) -> ChartOptions {
        ChartOptions {
            title: self.title.clone(),
            x_label: self.x_label.clone(),
            left_label: self.left_label.clone(),
            right_label: self.right_label.clone(),
            width: self.width,
            height: self.height,
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
    // - Defaults, partial TOML documents, and the TOML round trip.
    // - Rejection of unknown keys and of each invalid value.
    // - File reading errors.
    // -------------------------------------------------------------------------

    #[test]
    fn default_config_is_valid_and_targets_chickegg() {
        let config = AnalysisConfig::default();

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.max_lag, 5);
        assert_eq!(config.load_options(), LoadOptions::default());
    }

    #[test]
    // Purpose
    // -------
    // Verify that a partial document overrides only the keys it names.
    //
    // Given
    // -----
    // - A TOML document setting `max_lag`, `series`, and `chart.enabled`.
    //
    // Expect
    // ------
    // - Those three fields change; everything else keeps its default.
    fn from_toml_str_overrides_only_named_keys() {
        let text = r#"
            max_lag = 3
            series = ["gdp", "oil"]

            [chart]
            enabled = false
        "#;

        let config = AnalysisConfig::from_toml_str(text).expect("valid toml");

        assert_eq!(config.max_lag, 3);
        assert_eq!(config.series, ["gdp".to_string(), "oil".to_string()]);
        assert!(!config.chart.enabled);
        assert_eq!(config.significance, 0.05);
        assert_eq!(config.chart.width, 1280);
        assert_eq!(config.input, PathBuf::from("datasets/ChickEgg.csv"));
    }

    #[test]
    fn toml_round_trip_preserves_defaults() {
        let config = AnalysisConfig::default();

        let text = config.to_toml_string().expect("serializable");
        let parsed = AnalysisConfig::from_toml_str(&text).expect("parsable");

        assert_eq!(parsed, config);
    }

    #[test]
    fn from_toml_str_rejects_unknown_keys() {
        let result = AnalysisConfig::from_toml_str("max_lags = 3\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))), "got {result:?}");
    }

    #[test]
    fn validate_rejects_each_invalid_value() {
        let base = AnalysisConfig::default();

        let zero_lag = AnalysisConfig { max_lag: 0, ..base.clone() };
        let bad_alpha = AnalysisConfig { significance: 1.0, ..base.clone() };
        let same_series =
            AnalysisConfig { series: ["egg".to_string(), "egg".to_string()], ..base.clone() };
        let mut flat_chart = base.clone();
        flat_chart.chart.height = 0;

        for config in [zero_lag, bad_alpha, same_series, flat_chart] {
            assert!(
                matches!(config.validate(), Err(ConfigError::Invalid(_))),
                "expected Invalid for {config:?}"
            );
        }
    }

    #[test]
    fn from_path_missing_file_is_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");

        let result = AnalysisConfig::from_path(dir.path().join("missing.toml"));

        assert!(matches!(result, Err(ConfigError::Read { .. })), "got {result:?}");
    }
}

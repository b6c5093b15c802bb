//! analysis::errors: configuration errors and the pipeline-wide error type.
//!
//! Purpose
//! -------
//! Define [`ConfigError`] for loading/validating [`AnalysisConfig`] and
//! [`AnalysisError`], which wraps every stage's error so `?` composes
//! across load → chart → test.
//!
//! Conventions
//! -----------
//! - `AnalysisError`'s `Display` names only the failed stage; the stage
//!   error itself is reachable through `source()`, so an `anyhow` chain
//!   prints each message once.
//!
//! [`AnalysisConfig`]: crate::analysis::config::AnalysisConfig
use crate::{
    data::DataError, statistical_tests::GrangerError, visualization::ChartError,
};
use std::path::PathBuf;

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// ConfigError: failures reading or validating the analysis configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The config file could not be read.
    Read { path: PathBuf, message: String },
    /// The file is not valid TOML for [`AnalysisConfig`](crate::analysis::AnalysisConfig).
    Parse(String),
    /// A value violates a documented constraint.
    Invalid(String),
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read { path, message } => {
                write!(f, "Config Error: cannot read '{}': {message}", path.display())
            }
            ConfigError::Parse(msg) => write!(f, "Config Error: {msg}"),
            ConfigError::Invalid(msg) => write!(f, "Config Error: invalid value: {msg}"),
        }
    }
}

/// AnalysisError: any failure of the end-to-end analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    Config(ConfigError),
    Data(DataError),
    Chart(ChartError),
    Granger(GrangerError),
}

impl From<ConfigError> for AnalysisError {
    fn from(err: ConfigError) -> Self {
        AnalysisError::Config(err)
    }
}

impl From<DataError> for AnalysisError {
    fn from(err: DataError) -> Self {
        AnalysisError::Data(err)
    }
}

impl From<ChartError> for AnalysisError {
    fn from(err: ChartError) -> Self {
        AnalysisError::Chart(err)
    }
}

impl From<GrangerError> for AnalysisError {
    fn from(err: GrangerError) -> Self {
        AnalysisError::Granger(err)
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::Config(e) => Some(e),
            AnalysisError::Data(e) => Some(e),
            AnalysisError::Chart(e) => Some(e),
            AnalysisError::Granger(e) => Some(e),
        }
    }
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::Config(_) => write!(f, "invalid configuration"),
            AnalysisError::Data(_) => write!(f, "failed to load data"),
            AnalysisError::Chart(_) => write!(f, "failed to render chart"),
            AnalysisError::Granger(_) => write!(f, "causality test failed"),
        }
    }
}

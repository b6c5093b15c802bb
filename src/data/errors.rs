//! data::errors: error types for loading tabular series data.
//!
//! Purpose
//! -------
//! Separate the two failure families of the loader: the file cannot be
//! read at all (`FileAccess`), or its contents do not match the expected
//! schema (every other variant, collectively the data-format errors).
//!
//! Conventions
//! -----------
//! - Line numbers are 1-based CSV line positions as reported by the `csv`
//!   reader (the header is line 1).
//! - Paths and offending values are stored as owned strings so the error
//!   stays `Clone` and outlives the reader.
use std::path::PathBuf;

pub type DataResult<T> = Result<T, DataError>;

/// DataError: loader failures.
///
/// Variants
/// --------
/// - `FileAccess { path, message }`
///   The path could not be opened or read.
/// - `MissingColumn { column }`
///   A required column is absent from the header row.
/// - `InvalidValue { line, column, value }`
///   A field could not be coerced to the column's type.
/// - `MissingValue { line, column }`
///   A required field is empty or `NA`.
/// - `Malformed { line, message }`
///   The CSV structure itself is broken (e.g. unequal record lengths).
/// - `Empty`
///   The file has a header but no data rows.
/// - `UnknownSeries { name }`
///   A series name was requested that the table does not hold.
#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    FileAccess { path: PathBuf, message: String },
    MissingColumn { column: String },
    InvalidValue { line: u64, column: String, value: String },
    MissingValue { line: u64, column: String },
    Malformed { line: Option<u64>, message: String },
    Empty,
    UnknownSeries { name: String },
}

impl DataError {
    /// `true` for the `FileAccess` family, `false` for data-format errors.
    pub fn is_file_access(&self) -> bool {
        matches!(self, DataError::FileAccess { .. })
    }

    /// Map a `csv` reader error, keeping I/O failures apart from format ones.
    pub(crate) fn from_csv(err: csv::Error, path: Option<&std::path::Path>) -> Self {
        let line = err.position().map(|p| p.line());
        match err.into_kind() {
            csv::ErrorKind::Io(io) => DataError::FileAccess {
                path: path.map(PathBuf::from).unwrap_or_default(),
                message: io.to_string(),
            },
            csv::ErrorKind::UnequalLengths { expected_len, len, .. } => DataError::Malformed {
                line,
                message: format!("expected {expected_len} fields, found {len}"),
            },
            other => DataError::Malformed { line, message: format!("{other:?}") },
        }
    }
}

impl std::error::Error for DataError {}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::FileAccess { path, message } => {
                write!(f, "Cannot read '{}': {message}", path.display())
            }
            DataError::MissingColumn { column } => {
                write!(f, "Data format error: required column '{column}' not found in header")
            }
            DataError::InvalidValue { line, column, value } => write!(
                f,
                "Data format error: line {line}, column '{column}': cannot parse '{value}'"
            ),
            DataError::MissingValue { line, column } => {
                write!(f, "Data format error: line {line}, column '{column}': missing value")
            }
            DataError::Malformed { line: Some(line), message } => {
                write!(f, "Data format error: line {line}: {message}")
            }
            DataError::Malformed { line: None, message } => {
                write!(f, "Data format error: {message}")
            }
            DataError::Empty => write!(f, "Data format error: no data rows"),
            DataError::UnknownSeries { name } => {
                write!(f, "Data format error: table has no series named '{name}'")
            }
        }
    }
}

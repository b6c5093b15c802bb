//! visualization::errors: chart rendering failures.

pub type ChartResult<T> = Result<T, ChartError>;

/// ChartError: error conditions for the dual-axis chart.
///
/// Variants
/// --------
/// - `UnknownSeries { name }`: the table does not hold the requested series.
/// - `NonFinite { series }`: a value of `series` is NaN or ±∞, so no axis
///   range can be derived.
/// - `Render(message)`: the drawing backend failed (I/O or layout).
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    UnknownSeries { name: String },
    NonFinite { series: String },
    Render(String),
}

impl std::error::Error for ChartError {}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartError::UnknownSeries { name } => write!(f, "Chart Error: no series named '{name}'"),
            ChartError::NonFinite { series } => {
                write!(f, "Chart Error: series '{series}' contains non-finite values")
            }
            ChartError::Render(msg) => write!(f, "Chart Error: rendering failed: {msg}"),
        }
    }
}

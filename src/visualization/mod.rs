//! visualization: human-facing chart of the loaded series.
//!
//! Purpose
//! -------
//! Render the two series of a [`SeriesTable`](crate::data::SeriesTable) as a
//! dual-axis line chart ([`render_dual_axis_chart`]). The chart is a terminal
//! side effect; nothing downstream consumes it.

pub mod chart;
pub mod errors;

pub use self::chart::{ChartOptions, render_dual_axis_chart};
pub use self::errors::{ChartError, ChartResult};

//! visualization::chart: dual-axis line chart of two series against year.
//!
//! Purpose
//! -------
//! Render the two loaded series on a shared year axis with independently
//! scaled left and right value axes, for visual inspection before the
//! causality tests are read.
//!
//! Key behaviors
//! -------------
//! - The first series is drawn in blue on the left axis, the second in gold
//!   on the right axis; one combined legend sits in the upper-left corner.
//! - Axis ranges are padded by 5% of the span (or a fixed margin for flat
//!   series) so lines never sit on the frame.
//! - Output is an SVG file; nothing is returned to the analysis.
//!
//! Conventions
//! -----------
//! - Defaults mirror a 16:9 figure at 80 dpi (1280×720 px).
use crate::{
    data::SeriesTable,
    visualization::errors::{ChartError, ChartResult},
};
use plotters::prelude::*;
use std::{ops::Range, path::Path};
use tracing::info;

const LEFT_COLOR: RGBColor = BLUE;
const RIGHT_COLOR: RGBColor = RGBColor(214, 170, 0);
const FONT: &str = "sans-serif";

/// ChartOptions: captions and canvas size for [`render_dual_axis_chart`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub title: String,
    pub x_label: String,
    pub left_label: String,
    pub right_label: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        ChartOptions {
            title: "US Chicken Population & Egg Production from 1930 to 1983".to_string(),
            x_label: "Years".to_string(),
            left_label: "Chicken Population".to_string(),
            right_label: "Egg Production".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Render `left` and `right` from `table` as a dual-axis SVG at `output`.
///
/// Errors
/// ------
/// - `ChartError::UnknownSeries` when either series is not loaded.
/// - `ChartError::NonFinite` when a series contains NaN or ±∞.
/// - `ChartError::Render` for backend failures, including an unwritable
///   output path.
pub fn render_dual_axis_chart(
    table: &SeriesTable, left: &str, right: &str, options: &ChartOptions, output: &Path,
) -> ChartResult<()> {
    let left_values = series(table, left)?;
    let right_values = series(table, right)?;
    let years = table.years();

    let x_min = years.iter().copied().min().unwrap_or_default();
    let x_max = years.iter().copied().max().unwrap_or_default();
    let x_range = if x_max > x_min { x_min..x_max } else { x_min..x_min + 1 };

    let root = SVGBackend::new(output, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&options.title, (FONT, 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .right_y_label_area_size(90)
        .build_cartesian_2d(x_range.clone(), padded_range(left_values))
        .map_err(render_err)?
        .set_secondary_coord(x_range, padded_range(right_values));

    chart
        .configure_mesh()
        .x_desc(options.x_label.as_str())
        .y_desc(options.left_label.as_str())
        .axis_desc_style((FONT, 20))
        .label_style((FONT, 14))
        .draw()
        .map_err(render_err)?;
    chart
        .configure_secondary_axes()
        .y_desc(options.right_label.as_str())
        .axis_desc_style((FONT, 20))
        .label_style((FONT, 14))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(points(years, left_values), LEFT_COLOR.stroke_width(2)))
        .map_err(render_err)?
        .label(options.left_label.as_str())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], LEFT_COLOR.stroke_width(2)));
    chart
        .draw_secondary_series(LineSeries::new(
            points(years, right_values),
            RIGHT_COLOR.stroke_width(2),
        ))
        .map_err(render_err)?
        .label(options.right_label.as_str())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RIGHT_COLOR.stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .label_font((FONT, 16))
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    info!(output = %output.display(), left, right, "rendered dual-axis chart");
    Ok(())
}

fn series<'a>(table: &'a SeriesTable, name: &str) -> ChartResult<&'a [f64]> {
    let values =
        table.series(name).ok_or_else(|| ChartError::UnknownSeries { name: name.to_string() })?;
    if values.iter().any(|v| !v.is_finite()) {
        return Err(ChartError::NonFinite { series: name.to_string() });
    }
    Ok(values)
}

fn points<'a>(years: &'a [i64], values: &'a [f64]) -> impl Iterator<Item = (i64, f64)> + 'a {
    years.iter().copied().zip(values.iter().copied())
}

/// Value range padded by 5% of the span; flat series get a unit-scale margin.
fn padded_range(values: &[f64]) -> Range<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let pad = if span > 0.0 { span * 0.05 } else { (max.abs() * 0.05).max(1.0) };
    (min - pad)..(max + pad)
}

fn render_err<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Render(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LoadOptions;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Rendering a well-formed table to an SVG file without error.
    // - Input errors (unknown series) surfacing before any drawing.
    // - Axis padding for spread and flat series.
    //
    // They intentionally DO NOT cover:
    // - Visual correctness of the chart; it is for human inspection only.
    // -------------------------------------------------------------------------

    fn small_table() -> SeriesTable {
        let csv = "year,chicken,egg\n1930,468491,3581\n1931,449743,3532\n1932,436815,3327\n";
        SeriesTable::from_reader(csv.as_bytes(), &LoadOptions::default()).expect("fixture")
    }

    #[test]
    fn render_writes_svg_with_both_legend_labels() {
        let dir = tempfile::tempdir().expect("tempdir");
        let output = dir.path().join("chart.svg");

        render_dual_axis_chart(&small_table(), "chicken", "egg", &ChartOptions::default(), &output)
            .expect("render should succeed");

        let svg = std::fs::read_to_string(&output).expect("svg written");
        assert!(svg.contains("<svg"), "not an svg document");
        assert!(svg.contains("Chicken Population") && svg.contains("Egg Production"));
    }

    #[test]
    fn render_rejects_unknown_series() {
        let dir = tempfile::tempdir().expect("tempdir");
        let output = dir.path().join("chart.svg");

        let err = render_dual_axis_chart(
            &small_table(),
            "chicken",
            "duck",
            &ChartOptions::default(),
            &output,
        )
        .unwrap_err();

        assert_eq!(err, ChartError::UnknownSeries { name: "duck".into() });
        assert!(!output.exists());
    }

    #[test]
    // Purpose
    // -------
    // The smallest table the loader can produce (one row) still renders.
    //
    // Given
    // -----
    // - A single-row table, so both the year range and each value range
    //   are degenerate.
    //
    // Expect
    // ------
    // - An SVG is written without error.
    fn render_single_row_table_succeeds() {
        let dir = tempfile::tempdir().expect("tempdir");
        let output = dir.path().join("one.svg");
        let csv = "year,chicken,egg\n1930,468491,3581\n";
        let table = SeriesTable::from_reader(csv.as_bytes(), &LoadOptions::default())
            .expect("fixture");

        render_dual_axis_chart(&table, "chicken", "egg", &ChartOptions::default(), &output)
            .expect("render should succeed");

        assert!(output.exists());
    }

    #[test]
    fn padded_range_widens_spread_and_flat_series() {
        let spread = padded_range(&[10.0, 20.0]);
        assert!((spread.start - 9.5).abs() < 1e-12 && (spread.end - 20.5).abs() < 1e-12);

        let flat = padded_range(&[3.0, 3.0]);
        assert!(flat.start < 3.0 && flat.end > 3.0);
    }
}

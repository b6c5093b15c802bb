//! data::table: loading a year-indexed CSV into named series columns.
//!
//! Purpose
//! -------
//! Read a CSV file with a header row into a [`SeriesTable`]: one integer
//! year column plus the requested numeric series, in source row order.
//!
//! Key behaviors
//! -------------
//! - Columns are located by header name ([`LoadOptions`]); extra columns,
//!   such as the unnamed row-index column R writes, are ignored.
//! - Header names and fields are whitespace-trimmed before matching and
//!   parsing.
//! - Years accept integer text or integral floats (`1930` or `1930.0`).
//! - Empty fields and `NA` are reported as missing values; no imputation.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every series column has exactly `years.len()` finite-or-not values;
//!   value ranges are not validated here (the causality tester rejects
//!   non-finite data on its own).
//! - A loaded table has at least one row.
use crate::data::{
    errors::{DataError, DataResult},
    pair::SeriesPair,
};
use ndarray::Array1;
use std::{fmt, fs::File, io, path::Path};
use tracing::info;

/// LoadOptions: which columns to pull from the CSV.
///
/// Fields
/// ------
/// - `year_column`: header name of the integer index column.
/// - `series`: header names of the numeric series, in the order they should
///   be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOptions {
    pub year_column: String,
    pub series: Vec<String>,
}

impl LoadOptions {
    pub fn new(year_column: impl Into<String>, series: &[&str]) -> Self {
        LoadOptions {
            year_column: year_column.into(),
            series: series.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for LoadOptions {
    /// The ChickEgg layout: `year`, `chicken`, `egg`.
    fn default() -> Self {
        LoadOptions::new("year", &["chicken", "egg"])
    }
}

/// SeriesTable: year index plus named numeric columns.
///
/// Fields
/// ------
/// - `year_column`: name of the index column as found in the header.
/// - `years`: index values in source order.
/// - `names`: series names, parallel to `columns`.
/// - `columns`: one `Array1<f64>` per series, each of length `years.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesTable {
    year_column: String,
    years: Vec<i64>,
    names: Vec<String>,
    columns: Vec<Array1<f64>>,
}

impl SeriesTable {
    /// Load a table from a CSV file on disk.
    ///
    /// Errors
    /// ------
    /// - `DataError::FileAccess` when the file cannot be opened or read.
    /// - Any data-format error from [`SeriesTable::from_reader`].
    pub fn from_path(path: impl AsRef<Path>, options: &LoadOptions) -> DataResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DataError::FileAccess {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let table = Self::read(file, options, Some(path))?;
        info!(path = %path.display(), rows = table.len(), "loaded series table");
        Ok(table)
    }

    /// Load a table from any reader producing CSV bytes.
    ///
    /// Errors
    /// ------
    /// - `DataError::MissingColumn` when a requested header is absent.
    /// - `DataError::InvalidValue` / `MissingValue` for unparsable or empty
    ///   fields.
    /// - `DataError::Malformed` for structural CSV errors.
    /// - `DataError::Empty` when there are no data rows.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_granger::data::{LoadOptions, SeriesTable};
    /// let csv = "year,chicken,egg\n1930,468491,3581\n1931,449743,3532\n";
    /// let table = SeriesTable::from_reader(csv.as_bytes(), &LoadOptions::default()).unwrap();
    /// assert_eq!(table.years(), &[1930, 1931]);
    /// assert_eq!(table.series("egg").unwrap(), &[3581.0, 3532.0]);
    /// ```
    pub fn from_reader<R: io::Read>(reader: R, options: &LoadOptions) -> DataResult<Self> {
        Self::read(reader, options, None)
    }

    fn read<R: io::Read>(
        reader: R, options: &LoadOptions, path: Option<&Path>,
    ) -> DataResult<Self> {
        let mut csv_reader =
            csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);

        let headers = csv_reader.headers().map_err(|e| DataError::from_csv(e, path))?.clone();
        let locate = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DataError::MissingColumn { column: name.to_string() })
        };
        let year_idx = locate(options.year_column.as_str())?;
        let series_idx: Vec<usize> =
            options.series.iter().map(|s| locate(s.as_str())).collect::<DataResult<_>>()?;

        let mut years = Vec::new();
        let mut values: Vec<Vec<f64>> = vec![Vec::new(); series_idx.len()];

        for record in csv_reader.records() {
            let record = record.map_err(|e| DataError::from_csv(e, path))?;
            let line = record.position().map_or(0, |p| p.line());

            years.push(parse_year(record.get(year_idx), line, &options.year_column)?);
            for ((idx, name), column) in series_idx.iter().zip(&options.series).zip(&mut values) {
                column.push(parse_value(record.get(*idx), line, name)?);
            }
        }

        if years.is_empty() {
            return Err(DataError::Empty);
        }

        Ok(SeriesTable {
            year_column: options.year_column.clone(),
            years,
            names: options.series.clone(),
            columns: values.into_iter().map(Array1::from_vec).collect(),
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn year_column(&self) -> &str {
        &self.year_column
    }

    pub fn years(&self) -> &[i64] {
        &self.years
    }

    /// Names of the loaded series, in load order.
    pub fn series_names(&self) -> &[String] {
        &self.names
    }

    /// Column `name` as an `ndarray` view source.
    pub fn column(&self, name: &str) -> Option<&Array1<f64>> {
        self.names.iter().position(|n| n == name).map(|i| &self.columns[i])
    }

    /// Column `name` as a contiguous slice.
    pub fn series(&self, name: &str) -> Option<&[f64]> {
        self.column(name).and_then(|c| c.as_slice())
    }

    /// Borrow two columns as a (target, cause) pair for causality testing.
    ///
    /// Errors
    /// ------
    /// - `DataError::UnknownSeries` when either name is not loaded.
    pub fn pair<'a>(&'a self, target: &'a str, cause: &'a str) -> DataResult<SeriesPair<'a>> {
        let lookup = |name: &'a str| {
            self.series(name).ok_or_else(|| DataError::UnknownSeries { name: name.to_string() })
        };
        Ok(SeriesPair::new(target, lookup(target)?, cause, lookup(cause)?, &self.years))
    }

    /// Preview of the first `n` rows, rendered through `Display`.
    pub fn head(&self, n: usize) -> TablePreview<'_> {
        TablePreview { table: self, rows: n.min(self.len()) }
    }
}

/// TablePreview: the first rows of a [`SeriesTable`] for console output.
#[derive(Debug, Clone, Copy)]
pub struct TablePreview<'a> {
    table: &'a SeriesTable,
    rows: usize,
}

impl fmt::Display for TablePreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>8}", self.table.year_column)?;
        for name in &self.table.names {
            write!(f, " {name:>12}")?;
        }
        writeln!(f)?;
        for row in 0..self.rows {
            write!(f, "{:>8}", self.table.years[row])?;
            for column in &self.table.columns {
                write!(f, " {:>12}", column[row])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn parse_year(field: Option<&str>, line: u64, column: &str) -> DataResult<i64> {
    let raw = required_field(field, line, column)?;
    if let Ok(year) = raw.parse::<i64>() {
        return Ok(year);
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 => Ok(v as i64),
        _ => Err(DataError::InvalidValue {
            line,
            column: column.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn parse_value(field: Option<&str>, line: u64, column: &str) -> DataResult<f64> {
    let raw = required_field(field, line, column)?;
    raw.parse::<f64>().map_err(|_| DataError::InvalidValue {
        line,
        column: column.to_string(),
        value: raw.to_string(),
    })
}

fn required_field<'r>(field: Option<&'r str>, line: u64, column: &str) -> DataResult<&'r str> {
    match field {
        Some(raw) if !raw.is_empty() && raw != "NA" => Ok(raw),
        _ => Err(DataError::MissingValue { line, column: column.to_string() }),
    }
}

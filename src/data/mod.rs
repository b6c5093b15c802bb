//! data: loading the year-indexed series the analysis runs on.
//!
//! Purpose
//! -------
//! Read a fixed-schema CSV (year plus named numeric series) into memory and
//! hand out borrowed (target, cause) views for the causality tests.
//!
//! Key behaviors
//! -------------
//! - [`SeriesTable::from_path`] / [`SeriesTable::from_reader`] load columns
//!   by header name as configured by [`LoadOptions`].
//! - [`SeriesTable::pair`] borrows two columns as a [`SeriesPair`]; both test
//!   directions come from one load via [`SeriesPair::swapped`].
//! - Failures are split into file-access and data-format errors in
//!   [`DataError`].
//!
//! Conventions
//! -----------
//! - Row order is the file's row order; nothing is sorted or deduplicated.
//! - Only type coercion is performed; value ranges are not checked.

pub mod errors;
pub mod pair;
pub mod table;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{DataError, DataResult};
pub use self::pair::SeriesPair;
pub use self::table::{LoadOptions, SeriesTable, TablePreview};

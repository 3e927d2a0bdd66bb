//! Label tables read from delimited text.
use crate::{Cell, TableError};
use polars::prelude::*;
use std::path::Path;

/// Row-addressable source of loosely typed records.
pub trait RecordSource {
    /// Column names in file order.
    fn column_names(&self) -> Vec<String>;

    /// Number of records (rows, excluding the header).
    fn num_records(&self) -> usize;

    /// Value at `record` in `column`; `None` when the column does not exist.
    fn cell(&self, record: usize, column: &str) -> Option<Cell>;
}

/// A header-carrying CSV table held in memory as a polars [`DataFrame`].
///
/// Every column is read as text so that a stray value never aborts the load;
/// typing happens per cell through [`Cell`].
#[derive(Debug, Clone)]
pub struct LabelTable {
    frame: DataFrame,
}

impl LabelTable {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let polars_err = |source: PolarsError| TableError::Polars {
            path: display.clone(),
            source,
        };
        // a missing or unreadable path is an IO error
        std::fs::metadata(path).map_err(|source| TableError::Io {
            path: display.clone(),
            source,
        })?;

        let frame = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .map_err(polars_err)?
            .finish()
            .map_err(polars_err)?;
        log::debug!(
            "Read {} rows x {} columns from {}",
            frame.height(),
            frame.width(),
            display
        );
        Ok(LabelTable { frame })
    }

}

impl From<DataFrame> for LabelTable {
    fn from(frame: DataFrame) -> Self {
        LabelTable { frame }
    }
}

impl RecordSource for LabelTable {
    fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    fn num_records(&self) -> usize {
        self.frame.height()
    }

    fn cell(&self, record: usize, column: &str) -> Option<Cell> {
        let column = self.frame.column(column).ok()?;
        let value = column.get(record).ok()?;
        Some(cell_from_any(value))
    }
}

fn cell_from_any(value: AnyValue) -> Cell {
    match value {
        AnyValue::Null => Cell::Missing,
        AnyValue::Boolean(b) => Cell::Bool(b),
        AnyValue::String(s) => Cell::from_text(s),
        AnyValue::StringOwned(s) => Cell::from_text(s.as_str()),
        AnyValue::Float32(v) => Cell::Float(v as f64),
        AnyValue::Float64(v) => Cell::Float(v),
        other => match other.extract::<i64>() {
            Some(v) => Cell::Int(v),
            None => Cell::from_text(&other.to_string()),
        },
    }
}

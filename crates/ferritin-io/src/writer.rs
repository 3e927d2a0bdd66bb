//! Delimited output tables.
use crate::TableError;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Values of one output column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Int(Vec<i64>),
    Float(Vec<f64>),
    Text(Vec<String>),
}

impl ColumnData {
    pub(crate) fn len(&self) -> usize {
        match self {
            ColumnData::Int(v) => v.len(),
            ColumnData::Float(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    fn into_series(self, name: &str) -> Series {
        match self {
            ColumnData::Int(v) => Series::new(name.into(), v),
            ColumnData::Float(v) => Series::new(name.into(), v),
            ColumnData::Text(v) => Series::new(name.into(), v),
        }
    }
}

/// Write named columns, in the given order, as a comma separated file with a header row.
///
/// All columns must have the same length.
pub fn write_csv(
    path: impl AsRef<Path>,
    columns: Vec<(&str, ColumnData)>,
) -> Result<(), TableError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let expected = columns.first().map(|(_, data)| data.len()).unwrap_or(0);
    if let Some((name, data)) = columns.iter().find(|(_, data)| data.len() != expected) {
        return Err(TableError::ColumnLength {
            name: name.to_string(),
            expected,
            actual: data.len(),
        });
    }

    let series: Vec<Series> = columns
        .into_iter()
        .map(|(name, data)| data.into_series(name))
        .collect();
    let mut frame = DataFrame::new(series.into_iter().map(Into::into).collect()).map_err(
        |source| TableError::Polars {
            path: display.clone(),
            source,
        },
    )?;

    let mut file = File::create(path).map_err(|source| TableError::Io {
        path: display.clone(),
        source,
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut frame)
        .map_err(|source| TableError::Polars {
            path: display.clone(),
            source,
        })?;
    log::debug!("Wrote {} rows to {}", frame.height(), display);
    Ok(())
}

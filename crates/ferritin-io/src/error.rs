use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not process table {path}: {source}")]
    Polars {
        path: String,
        #[source]
        source: PolarsError,
    },
    #[error("column {name} has {actual} values, expected {expected}")]
    ColumnLength {
        name: String,
        expected: usize,
        actual: usize,
    },
}

//! # ferritin-io
//!
//! Tabular input and output for ferritin.
//!
//! * [`LabelTable`] loads a header-carrying CSV through polars and exposes it as a
//!   [`RecordSource`] of loosely typed [`Cell`]s.
//! * [`write_csv`] persists named columns in a fixed order.
//!
mod cell;
mod error;
mod table;
mod writer;

pub use cell::{Cell, NULL_TOKENS};
pub use error::TableError;
pub use table::{LabelTable, RecordSource};
pub use writer::{write_csv, ColumnData};

//! Join label records against residue descriptors.
use crate::record::{MergedRecord, DEFAULT_RESIDUE_NAME};
use crate::schema::ColumnMapping;
use ferritin_core::ResidueFeatures;
use ferritin_io::{Cell, RecordSource};

/// Pass-through column carried into `original_sasa_complex`.
pub const SASA_COMPLEX_COLUMN: &str = "sasa_complex";
/// Pass-through column carried into `original_sasa_monomer`.
pub const SASA_MONOMER_COLUMN: &str = "sasa_monomer";

/// Row accounting for one join.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct JoinStats {
    pub rows_seen: usize,
    /// Rows without any index value; skipped silently.
    pub missing_index: usize,
    /// Rows whose index could not be read as an integer; dropped with a warning.
    pub invalid_index: usize,
}

impl JoinStats {
    pub fn rows_kept(&self) -> usize {
        self.rows_seen - self.missing_index - self.invalid_index
    }
}

#[derive(Debug, Clone)]
pub struct JoinOutcome {
    /// Sorted ascending by residue index; rows sharing an index keep table order.
    pub records: Vec<MergedRecord>,
    pub stats: JoinStats,
}

enum RowOutcome {
    Merged(MergedRecord),
    MissingIndex,
    InvalidIndex(Cell),
}

pub struct RecordJoiner<'a> {
    mapping: &'a ColumnMapping,
    features: &'a ResidueFeatures,
}

impl<'a> RecordJoiner<'a> {
    pub fn new(mapping: &'a ColumnMapping, features: &'a ResidueFeatures) -> Self {
        RecordJoiner { mapping, features }
    }

    pub fn join<S: RecordSource>(&self, source: &S) -> JoinOutcome {
        let mut stats = JoinStats::default();
        let mut records = Vec::with_capacity(source.num_records());

        for row in 0..source.num_records() {
            stats.rows_seen += 1;
            match self.merge_row(source, row) {
                RowOutcome::Merged(record) => records.push(record),
                RowOutcome::MissingIndex => {
                    log::debug!("Row {}: no residue index, skipping", row + 1);
                    stats.missing_index += 1;
                }
                RowOutcome::InvalidIndex(cell) => {
                    log::warn!(
                        "Row {}: residue index {:?} in column {} is not an integer, dropping row",
                        row + 1,
                        cell,
                        self.mapping.residue_index
                    );
                    stats.invalid_index += 1;
                }
            }
        }

        records.sort_by_key(|record| record.residue_index);
        JoinOutcome { records, stats }
    }

    fn merge_row<S: RecordSource>(&self, source: &S, row: usize) -> RowOutcome {
        let raw_index = source
            .cell(row, &self.mapping.residue_index)
            .unwrap_or(Cell::Missing);
        if raw_index.is_missing() {
            return RowOutcome::MissingIndex;
        }
        let residue_index = match raw_index.to_i64() {
            Some(index) => index,
            None => return RowOutcome::InvalidIndex(raw_index),
        };

        let residue_name = self
            .mapping
            .residue_name
            .as_deref()
            .and_then(|column| source.cell(row, column))
            .and_then(|cell| cell.to_text())
            .unwrap_or_else(|| DEFAULT_RESIDUE_NAME.to_string());

        let is_epitope = self
            .mapping
            .is_epitope
            .as_deref()
            .and_then(|column| source.cell(row, column))
            .filter(|cell| !cell.is_missing())
            .map(|cell| match cell.to_flag() {
                Some(flag) => u8::from(flag),
                None => {
                    log::warn!(
                        "Row {}: epitope label {:?} is not a 0/1 value, using 0",
                        row + 1,
                        cell
                    );
                    0
                }
            })
            .unwrap_or(0);

        if !self.features.plddt.contains(residue_index) {
            log::debug!(
                "Row {}: residue {} is not in the structure, using default features",
                row + 1,
                residue_index
            );
        }

        RowOutcome::Merged(MergedRecord {
            residue_index,
            residue_name,
            is_epitope,
            sasa: *self.features.sasa.get(residue_index),
            plddt: *self.features.plddt.get(residue_index),
            secondary_structure: *self.features.secondary_structure.get(residue_index),
            original_sasa_complex: passthrough(source, row, SASA_COMPLEX_COLUMN),
            original_sasa_monomer: passthrough(source, row, SASA_MONOMER_COLUMN),
        })
    }
}

fn passthrough<S: RecordSource>(source: &S, row: usize, column: &str) -> f64 {
    source
        .cell(row, column)
        .and_then(|cell| cell.to_f64())
        .unwrap_or(0.0)
}

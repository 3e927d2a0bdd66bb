//! Persist joined records and their summary.
use crate::error::EpitopeError;
use crate::record::MergedRecord;
use ferritin_io::{write_csv, ColumnData};
use std::fs;
use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

/// Output columns, in order.
pub const OUTPUT_COLUMNS: [&str; 8] = [
    "residue_index",
    "residue_name",
    "is_epitope",
    "sasa",
    "plddt",
    "secondary_structure",
    "original_sasa_complex",
    "original_sasa_monomer",
];

pub fn write_results(path: &Path, records: &[MergedRecord]) -> Result<(), EpitopeError> {
    let columns = vec![
        (
            OUTPUT_COLUMNS[0],
            ColumnData::Int(records.iter().map(|r| r.residue_index).collect()),
        ),
        (
            OUTPUT_COLUMNS[1],
            ColumnData::Text(records.iter().map(|r| r.residue_name.clone()).collect()),
        ),
        (
            OUTPUT_COLUMNS[2],
            ColumnData::Int(records.iter().map(|r| i64::from(r.is_epitope)).collect()),
        ),
        (
            OUTPUT_COLUMNS[3],
            ColumnData::Float(records.iter().map(|r| r.sasa).collect()),
        ),
        (
            OUTPUT_COLUMNS[4],
            ColumnData::Float(records.iter().map(|r| r.plddt).collect()),
        ),
        (
            OUTPUT_COLUMNS[5],
            ColumnData::Text(
                records
                    .iter()
                    .map(|r| r.secondary_structure.to_string())
                    .collect(),
            ),
        ),
        (
            OUTPUT_COLUMNS[6],
            ColumnData::Float(records.iter().map(|r| r.original_sasa_complex).collect()),
        ),
        (
            OUTPUT_COLUMNS[7],
            ColumnData::Float(records.iter().map(|r| r.original_sasa_monomer).collect()),
        ),
    ];
    write_csv(path, columns)?;
    Ok(())
}

pub fn write_summary(path: &Path, contents: &str) -> Result<(), EpitopeError> {
    fs::write(path, contents).map_err(|source| write_error(path, source))
}

/// Write the joined table and its summary, or neither.
///
/// Both files are staged next to their destinations and only moved into place
/// once both are complete.
pub fn write_artifacts(
    output_file: &Path,
    summary_file: &Path,
    records: &[MergedRecord],
    summary: &str,
) -> Result<(), EpitopeError> {
    let staged_table = staging_file(output_file)?;
    write_results(staged_table.path(), records)?;
    let staged_summary = staging_file(summary_file)?;
    write_summary(staged_summary.path(), summary)?;

    staged_summary
        .persist(summary_file)
        .map_err(|e| write_error(summary_file, e.error))?;
    if let Err(e) = staged_table.persist(output_file) {
        if let Err(cleanup) = fs::remove_file(summary_file) {
            log::warn!("Could not remove {}: {}", summary_file.display(), cleanup);
        }
        return Err(write_error(output_file, e.error));
    }
    Ok(())
}

fn staging_file(target: &Path) -> Result<NamedTempFile, EpitopeError> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    tempfile::Builder::new()
        .prefix(".ferritin-epitope-")
        .tempfile_in(dir)
        .map_err(|source| write_error(target, source))
}

fn write_error(path: &Path, source: io::Error) -> EpitopeError {
    EpitopeError::Write {
        path: path.display().to_string(),
        source,
    }
}

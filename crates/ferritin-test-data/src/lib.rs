//! ferritin-test-data
//!
//! A module to provide test files embedded in the crate for use in testing.
//! Example structures and label tables are included in the crate distribution.
//!
//! The test files are represented as `TestFile` objects which package the raw binary data
//! and create temporary files for programs to operate on.
use std::fs;
use tempfile::{Builder, NamedTempFile};

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use ferritin_test_data::TestFile;
/// let (prot_file, _temp) = TestFile::epitope_structure().create_temp().unwrap();
/// let (label_file, _temp) = TestFile::labels_uniprot().create_temp().unwrap();
///
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// Three-residue predicted model (MET 1, LYS 2, GLY 3) plus one water (HOH 101).
    ///
    /// Residue confidence means in the B-factor column are 80, 90 and 70.
    pub fn epitope_structure() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/epitope_model.pdb"),
            suffix: "pdb",
        }
    }
    /// Label table using the `uniprot_pos` / `uniprot_aa` / `label_epitope` columns.
    ///
    /// Holds one row with an empty index and one with a non-numeric index.
    pub fn labels_uniprot() -> Self {
        Self {
            filebinary: include_bytes!("../data/labels/labels_uniprot.csv"),
            suffix: "csv",
        }
    }
    /// Same values as [`TestFile::labels_uniprot`] under the
    /// `residue_index` / `residue_name` / `is_epitope` columns.
    pub fn labels_residue() -> Self {
        Self {
            filebinary: include_bytes!("../data/labels/labels_residue.csv"),
            suffix: "csv",
        }
    }
    /// Label table without any recognised residue index column.
    pub fn labels_no_index() -> Self {
        Self {
            filebinary: include_bytes!("../data/labels/labels_no_index.csv"),
            suffix: "csv",
        }
    }
    /// Label table with an index and name but no epitope column.
    pub fn labels_no_epitopes() -> Self {
        Self {
            filebinary: include_bytes!("../data/labels/labels_no_epitopes.csv"),
            suffix: "csv",
        }
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }
}

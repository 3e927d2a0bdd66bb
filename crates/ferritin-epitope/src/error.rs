use ferritin_core::StructureError;
use ferritin_io::TableError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EpitopeError {
    #[error(transparent)]
    Structure(#[from] StructureError),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("no residue index column in label table: expected one of {expected:?}, found {found:?}")]
    MissingIndexColumn {
        expected: Vec<String>,
        found: Vec<String>,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

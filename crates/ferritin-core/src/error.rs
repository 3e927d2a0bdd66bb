use thiserror::Error;

#[derive(Error, Debug)]
pub enum StructureError {
    #[error("could not read structure file {path}: {messages}")]
    Parse { path: String, messages: String },
    #[error("invalid surface calculation parameters: {0}")]
    InvalidSurfaceParameters(String),
    #[error("surface calculator returned {areas} areas for {atoms} atoms")]
    SurfaceSizeMismatch { areas: usize, atoms: usize },
}

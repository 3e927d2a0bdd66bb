//! # ferritin-epitope
//!
//! Join experimentally derived epitope labels against per-residue descriptors
//! of a predicted structure.
//!
//! A run loads a structure through [`ferritin_core::AtomCollection`], extracts
//! residue area, confidence and secondary structure, maps the label table's
//! columns onto canonical fields ([`ColumnMapping`]), joins the two
//! ([`RecordJoiner`]) and writes the joined table together with a short
//! summary of epitope versus non-epitope statistics.
//!
//! ```ignore
//! use ferritin_core::SurfaceComputer;
//! use ferritin_epitope::{analyze_epitopes, AnalysisConfig};
//!
//! let config = AnalysisConfig::new("model.pdb", "labels.csv", "results.csv");
//! let outcome = analyze_epitopes(&config, &SurfaceComputer::default())?;
//! println!("{} epitope residues", outcome.statistics.epitope);
//! ```
mod error;
mod join;
mod pipeline;
mod record;
mod report;
mod schema;
mod summary;
#[cfg(test)]
mod test_utilities;

pub use error::EpitopeError;
pub use join::{JoinOutcome, JoinStats, RecordJoiner, SASA_COMPLEX_COLUMN, SASA_MONOMER_COLUMN};
pub use pipeline::{analyze_epitopes, annotate, AnalysisConfig, AnalysisOutcome};
pub use record::{MergedRecord, DEFAULT_RESIDUE_NAME};
pub use report::{write_artifacts, write_results, write_summary, OUTPUT_COLUMNS};
pub use schema::{CanonicalField, ColumnMapping};
pub use summary::{render_summary, summary_path, GroupMeans, SummaryStatistics, SUMMARY_TITLE};

//! End-to-end run: load both inputs, join, aggregate, persist.
use crate::error::EpitopeError;
use crate::join::{JoinStats, RecordJoiner};
use crate::record::MergedRecord;
use crate::report::write_artifacts;
use crate::schema::ColumnMapping;
use crate::summary::{render_summary, summary_path, SummaryStatistics};
use ferritin_core::{AtomCollection, ResidueDescriptors, ResidueFeatures, SurfaceAreaCalculator};
use ferritin_io::{LabelTable, RecordSource};
use std::path::PathBuf;

/// Paths for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Predicted structure (PDB or mmCIF); B-factors hold per-atom confidence.
    pub pdb_file: PathBuf,
    /// Label table with a residue index column.
    pub truth_file: PathBuf,
    /// Joined table destination. The summary is written next to it.
    pub output_file: PathBuf,
}

impl AnalysisConfig {
    pub fn new(
        pdb_file: impl Into<PathBuf>,
        truth_file: impl Into<PathBuf>,
        output_file: impl Into<PathBuf>,
    ) -> Self {
        AnalysisConfig {
            pdb_file: pdb_file.into(),
            truth_file: truth_file.into(),
            output_file: output_file.into(),
        }
    }

    pub fn summary_file(&self) -> PathBuf {
        summary_path(&self.output_file)
    }
}

/// Everything computed by a run, before or after persistence.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub mapping: ColumnMapping,
    pub records: Vec<MergedRecord>,
    pub join_stats: JoinStats,
    pub statistics: SummaryStatistics,
}

/// Resolve the label columns, join against `features` and aggregate. No I/O.
pub fn annotate<S: RecordSource>(
    features: &ResidueFeatures,
    labels: &S,
) -> Result<AnalysisOutcome, EpitopeError> {
    let columns = labels.column_names();
    log::info!("Available columns: {:?}", columns);
    let mapping = ColumnMapping::resolve(&columns)?;
    log::info!("Column mapping: {}", mapping);

    let joined = RecordJoiner::new(&mapping, features).join(labels);
    let stats = joined.stats;
    if stats.missing_index + stats.invalid_index > 0 {
        log::info!(
            "Kept {} of {} label rows ({} without index, {} with an unreadable index)",
            stats.rows_kept(),
            stats.rows_seen,
            stats.missing_index,
            stats.invalid_index
        );
    }

    let statistics = SummaryStatistics::from_records(&joined.records);
    Ok(AnalysisOutcome {
        mapping,
        records: joined.records,
        join_stats: stats,
        statistics,
    })
}

/// Run the whole analysis and write the joined table and its summary.
///
/// Nothing is written unless every earlier step succeeded.
pub fn analyze_epitopes<S: SurfaceAreaCalculator>(
    config: &AnalysisConfig,
    surface: &S,
) -> Result<AnalysisOutcome, EpitopeError> {
    log::info!("Loading structure from {}", config.pdb_file.display());
    let structure = AtomCollection::from_file(&config.pdb_file)?;
    let features = structure.residue_features(surface)?;
    log::info!(
        "Extracted features for {} residues ({} atoms)",
        features.residue_count(),
        structure.get_size()
    );

    log::info!("Loading labels from {}", config.truth_file.display());
    let labels = LabelTable::from_path(&config.truth_file)?;
    log::info!("Read {} label rows", labels.num_records());

    let outcome = annotate(&features, &labels)?;
    outcome.statistics.log();

    let summary = render_summary(&outcome.statistics, &config.pdb_file, &config.truth_file);
    let summary_file = config.summary_file();
    write_artifacts(&config.output_file, &summary_file, &outcome.records, &summary)?;
    log::info!("Results saved to {}", config.output_file.display());
    log::info!("Summary saved to {}", summary_file.display());

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utilities::{features_fixture, MemoryTable};
    use ferritin_core::{SecondaryStructure, SurfaceComputer};
    use ferritin_test_data::TestFile;
    use tempfile::tempdir;

    #[test]
    fn test_annotate_scenario() {
        let labels = MemoryTable::new(
            &["residue_index", "is_epitope"],
            &[&["1", "1"], &["2", "0"], &["99", "1"]],
        );
        let outcome = annotate(&features_fixture(), &labels).unwrap();

        assert_eq!(outcome.records.len(), 3);
        let unmatched = &outcome.records[2];
        assert_eq!(unmatched.residue_index, 99);
        assert_eq!(unmatched.plddt, 0.0);
        assert_eq!(unmatched.secondary_structure, SecondaryStructure::Unknown);
        assert_eq!(outcome.statistics.epitope, 2);
        assert_eq!(outcome.statistics.non_epitope, 1);
        assert_eq!(
            outcome.statistics.epitope + outcome.statistics.non_epitope,
            outcome.statistics.total
        );
    }

    #[test]
    fn test_annotate_without_index_column() {
        let labels = MemoryTable::new(&["position", "label"], &[&["1", "1"]]);
        let err = annotate(&features_fixture(), &labels).unwrap_err();
        assert!(matches!(err, EpitopeError::MissingIndexColumn { .. }));
    }

    #[test]
    fn test_analyze_epitopes_writes_both_files() {
        let (pdb_file, _pdb) = TestFile::epitope_structure().create_temp().unwrap();
        let (truth_file, _truth) = TestFile::labels_uniprot().create_temp().unwrap();
        let dir = tempdir().unwrap();
        let config = AnalysisConfig::new(&pdb_file, &truth_file, dir.path().join("out.csv"));

        let outcome = analyze_epitopes(&config, &SurfaceComputer::default()).unwrap();
        assert_eq!(outcome.records.len(), 4);
        assert_eq!(outcome.join_stats.missing_index, 1);
        assert_eq!(outcome.join_stats.invalid_index, 1);
        assert_eq!(outcome.statistics.epitope, 2);
        assert_eq!(outcome.statistics.non_epitope, 2);

        assert!(config.output_file.exists());
        let summary = std::fs::read_to_string(config.summary_file()).unwrap();
        assert!(summary.starts_with("=== AlphaFold Epitope Analysis Summary ==="));
        assert!(summary.contains(&format!("Input PDB: {}", pdb_file)));
        assert!(summary.contains("Total residues: 4\n"));
        // residue 1 (80) and the unmatched 99 (0) are the epitopes
        assert!(summary.contains("Mean pLDDT (epitope): 40.00\n"));
        assert!(summary.contains("Mean pLDDT (non-epitope): 80.00\n"));
    }

    #[test]
    fn test_analyze_epitopes_fails_before_writing() {
        let (pdb_file, _pdb) = TestFile::epitope_structure().create_temp().unwrap();
        let (truth_file, _truth) = TestFile::labels_no_index().create_temp().unwrap();
        let dir = tempdir().unwrap();
        let config = AnalysisConfig::new(&pdb_file, &truth_file, dir.path().join("out.csv"));

        let err = analyze_epitopes(&config, &SurfaceComputer::default()).unwrap_err();
        assert!(matches!(err, EpitopeError::MissingIndexColumn { .. }));
        assert!(!config.output_file.exists());
        assert!(!config.summary_file().exists());
    }

    #[test]
    fn test_analyze_epitopes_blocked_summary_leaves_no_table() {
        let (pdb_file, _pdb) = TestFile::epitope_structure().create_temp().unwrap();
        let (truth_file, _truth) = TestFile::labels_residue().create_temp().unwrap();
        let dir = tempdir().unwrap();
        let config = AnalysisConfig::new(&pdb_file, &truth_file, dir.path().join("results.csv"));
        std::fs::create_dir(config.summary_file()).unwrap();

        let err = analyze_epitopes(&config, &SurfaceComputer::default()).unwrap_err();
        assert!(matches!(err, EpitopeError::Write { .. }));
        assert!(!config.output_file.exists());
        assert!(config.summary_file().is_dir());
        // no staged files left behind either
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_analyze_epitopes_missing_structure() {
        let (truth_file, _truth) = TestFile::labels_residue().create_temp().unwrap();
        let dir = tempdir().unwrap();
        let config = AnalysisConfig::new(
            dir.path().join("missing.pdb"),
            &truth_file,
            dir.path().join("out.csv"),
        );
        let err = analyze_epitopes(&config, &SurfaceComputer::default()).unwrap_err();
        assert!(matches!(err, EpitopeError::Structure(_)));
        assert!(!config.output_file.exists());
    }
}

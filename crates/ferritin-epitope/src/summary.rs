//! Group statistics over joined records and the plain-text summary.
use crate::record::MergedRecord;
use std::path::{Path, PathBuf};

pub const SUMMARY_TITLE: &str = "=== AlphaFold Epitope Analysis Summary ===";

/// Mean confidence and area of one group of records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupMeans {
    pub plddt: f64,
    pub sasa: f64,
}

impl GroupMeans {
    /// `None` for an empty group.
    fn of<'a>(records: impl Iterator<Item = &'a MergedRecord>) -> Option<Self> {
        let (count, plddt, sasa) = records.fold((0usize, 0.0, 0.0), |(n, p, s), r| {
            (n + 1, p + r.plddt, s + r.sasa)
        });
        if count == 0 {
            return None;
        }
        Some(GroupMeans {
            plddt: plddt / count as f64,
            sasa: sasa / count as f64,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStatistics {
    pub total: usize,
    pub epitope: usize,
    pub non_epitope: usize,
    /// Only computed when at least one epitope residue is present.
    pub epitope_means: Option<GroupMeans>,
    pub non_epitope_means: Option<GroupMeans>,
}

impl SummaryStatistics {
    pub fn from_records(records: &[MergedRecord]) -> Self {
        let epitope = records.iter().filter(|r| r.is_epitope()).count();
        let (epitope_means, non_epitope_means) = if epitope > 0 {
            (
                GroupMeans::of(records.iter().filter(|r| r.is_epitope())),
                GroupMeans::of(records.iter().filter(|r| !r.is_epitope())),
            )
        } else {
            (None, None)
        };
        SummaryStatistics {
            total: records.len(),
            epitope,
            non_epitope: records.len() - epitope,
            epitope_means,
            non_epitope_means,
        }
    }

    pub fn has_means(&self) -> bool {
        self.epitope_means.is_some()
    }

    /// Narrate the statistics at info level.
    pub fn log(&self) {
        log::info!("Total residues: {}", self.total);
        log::info!("Epitope residues: {}", self.epitope);
        log::info!("Non-epitope residues: {}", self.non_epitope);
        if self.has_means() {
            log::info!(
                "Mean pLDDT (epitope): {}",
                format_mean(self.epitope_means.map(|m| m.plddt))
            );
            log::info!(
                "Mean pLDDT (non-epitope): {}",
                format_mean(self.non_epitope_means.map(|m| m.plddt))
            );
            log::info!(
                "Mean SASA (epitope): {}",
                format_mean(self.epitope_means.map(|m| m.sasa))
            );
            log::info!(
                "Mean SASA (non-epitope): {}",
                format_mean(self.non_epitope_means.map(|m| m.sasa))
            );
        }
    }
}

fn format_mean(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "NA".to_string(),
    }
}

/// Render the summary file contents.
pub fn render_summary(stats: &SummaryStatistics, pdb_file: &Path, truth_file: &Path) -> String {
    let mut out = format!(
        "{}\n\nInput PDB: {}\nTruth CSV: {}\n\n\
         Total residues: {}\nEpitope residues: {}\nNon-epitope residues: {}\n",
        SUMMARY_TITLE,
        pdb_file.display(),
        truth_file.display(),
        stats.total,
        stats.epitope,
        stats.non_epitope
    );

    if stats.has_means() {
        let epitope = stats.epitope_means;
        let non_epitope = stats.non_epitope_means;
        out.push('\n');
        for (label, value) in [
            ("Mean pLDDT (epitope)", epitope.map(|m| m.plddt)),
            ("Mean pLDDT (non-epitope)", non_epitope.map(|m| m.plddt)),
            ("Mean SASA (epitope)", epitope.map(|m| m.sasa)),
            ("Mean SASA (non-epitope)", non_epitope.map(|m| m.sasa)),
        ] {
            out.push_str(&format!("{}: {}\n", label, format_mean(value)));
        }
    }
    out
}

/// `<stem>_summary.txt` beside the output table.
pub fn summary_path(output_file: &Path) -> PathBuf {
    let stem = output_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_file.with_file_name(format!("{}_summary.txt", stem))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferritin_core::SecondaryStructure;

    fn record(residue_index: i64, is_epitope: u8, plddt: f64, sasa: f64) -> MergedRecord {
        MergedRecord {
            residue_index,
            residue_name: "UNK".to_string(),
            is_epitope,
            sasa,
            plddt,
            secondary_structure: SecondaryStructure::Coil,
            original_sasa_complex: 0.0,
            original_sasa_monomer: 0.0,
        }
    }

    #[test]
    fn test_group_statistics() {
        let records = vec![
            record(1, 1, 80.0, 10.0),
            record(2, 0, 90.0, 20.0),
            record(99, 1, 0.0, 0.0),
        ];
        let stats = SummaryStatistics::from_records(&records);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.epitope, 2);
        assert_eq!(stats.non_epitope, 1);
        assert_eq!(
            stats.epitope_means,
            Some(GroupMeans {
                plddt: 40.0,
                sasa: 5.0
            })
        );
        assert_eq!(
            stats.non_epitope_means,
            Some(GroupMeans {
                plddt: 90.0,
                sasa: 20.0
            })
        );
    }

    #[test]
    fn test_no_epitopes_means_omitted() {
        let records = vec![record(1, 0, 80.0, 10.0), record(2, 0, 90.0, 20.0)];
        let stats = SummaryStatistics::from_records(&records);
        assert_eq!(stats.epitope, 0);
        assert_eq!(stats.non_epitope, 2);
        assert!(!stats.has_means());
        assert!(stats.non_epitope_means.is_none());

        let text = render_summary(&stats, Path::new("model.pdb"), Path::new("labels.csv"));
        assert!(!text.contains("Mean"));
        assert!(!text.contains("NaN"));
    }

    #[test]
    fn test_empty_non_epitope_group_is_na() {
        let records = vec![record(1, 1, 80.0, 10.0)];
        let stats = SummaryStatistics::from_records(&records);
        assert!(stats.non_epitope_means.is_none());
        let text = render_summary(&stats, Path::new("a.pdb"), Path::new("b.csv"));
        assert!(text.contains("Mean pLDDT (epitope): 80.00\n"));
        assert!(text.contains("Mean pLDDT (non-epitope): NA\n"));
        assert!(text.contains("Mean SASA (non-epitope): NA\n"));
    }

    #[test]
    fn test_render_summary() {
        let records = vec![
            record(1, 1, 80.0, 10.0),
            record(2, 0, 90.0, 20.5),
            record(99, 1, 0.0, 0.0),
        ];
        let stats = SummaryStatistics::from_records(&records);
        let text = render_summary(&stats, Path::new("model.pdb"), Path::new("labels.csv"));
        let expected = "\
=== AlphaFold Epitope Analysis Summary ===

Input PDB: model.pdb
Truth CSV: labels.csv

Total residues: 3
Epitope residues: 2
Non-epitope residues: 1

Mean pLDDT (epitope): 40.00
Mean pLDDT (non-epitope): 90.00
Mean SASA (epitope): 5.00
Mean SASA (non-epitope): 20.50
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_summary_path() {
        assert_eq!(
            summary_path(Path::new("out/results.csv")),
            PathBuf::from("out/results_summary.txt")
        );
        assert_eq!(
            summary_path(Path::new("results")),
            PathBuf::from("results_summary.txt")
        );
        assert_eq!(
            summary_path(Path::new("run.v2.tsv")),
            PathBuf::from("run.v2_summary.txt")
        );
    }
}

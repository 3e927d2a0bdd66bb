use anyhow::Context;
use ferritin_core::SurfaceComputer;
use ferritin_epitope::{analyze_epitopes, AnalysisConfig};

pub fn execute(config: &AnalysisConfig) -> anyhow::Result<()> {
    let outcome = analyze_epitopes(config, &SurfaceComputer::default()).with_context(|| {
        format!(
            "epitope analysis of {} against {} failed",
            config.pdb_file.display(),
            config.truth_file.display()
        )
    })?;
    log::info!(
        "Wrote {} residues ({} epitope)",
        outcome.statistics.total,
        outcome.statistics.epitope
    );
    Ok(())
}

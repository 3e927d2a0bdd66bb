use super::commands;
use clap::Parser;
use env_logger::fmt::Color;
use env_logger::Env;
use ferritin_epitope::AnalysisConfig;
use log::Level;
use std::io::Write;
use std::path::PathBuf;

/// Compare epitope labels with residue descriptors of a predicted structure.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Predicted structure (PDB or mmCIF) with per-atom confidence in the B-factor column
    #[arg(long, alias = "pdb_file", value_name = "PATH")]
    pub pdb_file: PathBuf,

    /// Label table with a `uniprot_pos` or `residue_index` column
    #[arg(long, alias = "truth_file", value_name = "PATH")]
    pub truth_file: PathBuf,

    /// Joined output table; `<stem>_summary.txt` is written beside it
    #[arg(long, alias = "output_file", value_name = "PATH")]
    pub output_file: PathBuf,
}

impl Cli {
    pub fn config(&self) -> AnalysisConfig {
        AnalysisConfig::new(&self.pdb_file, &self.truth_file, &self.output_file)
    }

    pub fn execute(&self) -> anyhow::Result<()> {
        commands::analyze::execute(&self.config())
    }
}

/// Install the global logger. `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match level {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .init();
}

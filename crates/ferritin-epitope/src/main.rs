use clap::Parser;
mod cli;
mod commands;

fn runner() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging();
    log::info!("Running {}-{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    cli.execute()?;
    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

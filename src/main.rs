use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
mod config;
mod error;
mod pipeline;
mod tcg;
#[cfg(test)]
mod test_support;
mod utils;
mod verify;

use config::PipelineConfig;
use tcg::nrdb::NrdbApi;

/// Convert high-resolution card scans into sized WebP images and check them
/// against NetrunnerDB
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Default, PartialEq, Eq)]
enum Commands {
    /// Check coverage, then rebuild every WebP tree (default)
    #[default]
    Run,
    /// Only check local card images against NetrunnerDB
    Verify,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let args = Args::parse();
    let config = PipelineConfig::default();
    let catalog = NrdbApi::new(config.catalog_url.as_str())?;

    match args.command.unwrap_or_default() {
        Commands::Run => pipeline::run(&config, &catalog)?,
        Commands::Verify => pipeline::verify_only(&config, &catalog)?,
    }

    Ok(())
}

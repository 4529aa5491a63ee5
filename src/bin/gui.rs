use anyhow::{Context, Result};
use clap::Parser;
use escape_time_explorer::{ExplorerConfig, PixelsPresenterFactory, RunGuiCommand};
use std::path::PathBuf;

/// Interactive escape-time fractal explorer.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML configuration file for the start-up view.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let config = match &cli.config {
        Some(path) => ExplorerConfig::load(path)
            .with_context(|| format!("could not load {}", path.display()))?,
        None => ExplorerConfig::default(),
    };
    let settings = config.resolve().context("invalid configuration")?;

    RunGuiCommand::new(PixelsPresenterFactory::new(), settings)
        .execute()
        .context("explorer window failed")
}

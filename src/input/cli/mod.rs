//! Command-line front end.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Command};
use clap::Parser;

/// Parses the process arguments, initialises logging and runs the subcommand.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    match &cli.command {
        Command::Render(args) => commands::render::run_render(args),
        Command::Play(args) => commands::play::run_play(args),
    }
}

//! volant: terminal output helpers from the command line.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use volant::cli::Cli;

mod commands;

/// Log to stderr so stdout carries only the requested output.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    commands::run(cli)
}

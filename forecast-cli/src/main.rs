//! Binary crate for the `forecast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Logging setup and mapping pipeline failures to exit codes

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cmd = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cmd.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();

    cmd.run().await
}

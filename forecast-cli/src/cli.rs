use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use forecast_core::{Config, FORECAST_URL, HttpForecastSource, OutputPaths, pipeline};
use inquire::{Confirm, CustomType};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Export the data.gov.my weather forecast to CSV and JSON")]
pub struct Cli {
    /// Log request and response details.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Download the forecast and write forecast.csv and forecast.json.
    Fetch {
        /// Request timeout in seconds; overrides the config file.
        #[arg(long)]
        timeout: Option<u64>,

        /// Skip TLS certificate and hostname verification (insecure).
        #[arg(long)]
        insecure: bool,
    },

    /// Interactively edit the HTTP settings.
    Configure,

    /// Print the location of the config file.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Fetch { timeout, insecure } => fetch(timeout, insecure).await,
            Command::Configure => {
                configure()?;
                Ok(ExitCode::SUCCESS)
            }
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

async fn fetch(timeout: Option<u64>, insecure: bool) -> anyhow::Result<ExitCode> {
    let config = Config::load()?.with_overrides(timeout, insecure)?;
    let source = HttpForecastSource::new(FORECAST_URL, &config.http)
        .context("Failed to build HTTP client")?;

    match pipeline::run(&source, &OutputPaths::default()).await {
        Ok(summary) => {
            println!(
                "Saved {} records to {} and {} (fetched {})",
                summary.records,
                summary.outputs.csv.display(),
                summary.outputs.json.display(),
                summary.fetched_at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S"),
            );
            Ok(ExitCode::SUCCESS)
        }
        // The failing stage has already logged the cause.
        Err(e) => Ok(exit_code(e.exit_code())),
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    config.http.timeout_secs = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(config.http.timeout_secs)
        .with_error_message("Please enter a whole number of seconds")
        .prompt()?;

    config.http.accept_invalid_certs = Confirm::new(
        "Disable TLS certificate verification? This makes the download trivially forgeable.",
    )
    .with_default(config.http.accept_invalid_certs)
    .prompt()?;

    config.validate()?;
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map(ExitCode::from).unwrap_or(ExitCode::FAILURE)
}

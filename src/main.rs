//! trafficjam - commute traffic alert
//!
//! Usage:
//!   trafficjam config.json
//!
//! Meant to be run from a scheduler. Prints nothing and exits 0 when the
//! route is within its threshold or the alert was sent; prints one error
//! line and exits 1 on any failure.
//!
//! Environment:
//!   RUST_LOG - Log filter (default: trafficjam=warn)

use clap::Parser;
use eyre::WrapErr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use trafficjam::utils::constants::{APP_NAME, APP_VERSION, DEFAULT_LOG_FILTER};
use trafficjam::{AppResult, CommuteMonitor, Config, Outcome};

#[derive(Debug, Parser)]
#[command(name = APP_NAME, version = APP_VERSION, about = "Email an alert when a commute takes too long")]
struct Cli {
    /// Path to the JSON config file
    config: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging() {
        eprintln!("{}: {:#}", APP_NAME, e);
        return ExitCode::FAILURE;
    }

    match run(&cli.config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("{} {} failure: {:?}", e.category().as_str(), e.code_str(), e);
            eprintln!("{}: {}", APP_NAME, single_line(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}

async fn run(config_path: &Path) -> AppResult<Outcome> {
    let config = Config::load(config_path)?;
    let monitor = CommuteMonitor::from_config(&config)?;
    monitor.run(&config).await
}

fn init_logging() -> eyre::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(DEFAULT_LOG_FILTER).wrap_err("invalid default log filter")?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init()
        .map_err(|e| eyre::eyre!("failed to initialize logging: {}", e))
}

/// SMTP servers can answer with multi-line responses; keep the report on one line
fn single_line(message: &str) -> String {
    message.split_whitespace().collect::<Vec<_>>().join(" ")
}

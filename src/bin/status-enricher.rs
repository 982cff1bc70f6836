//! # Status Enricher
//!
//! Command-line tool that enriches an orchestration status exported as JSON, the same way
//! the monitor API does before serving it. Useful for inspecting correlation results on
//! captured data.

use clap::Parser;
use monitor_core::config::ConfigManager;
use monitor_core::enrichment::{ExpandedOrchestrationStatus, Fetch};
use monitor_core::logging::init_structured_logging;
use monitor_core::models::{OrchestrationStatus, SubOrchestrationRecord};
use monitor_core::{MonitorError, MonitorResult};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::process;
use tracing::error;

#[derive(Parser)]
#[command(name = "status-enricher")]
#[command(about = "Enrich an orchestration status JSON document")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Orchestration status JSON file
    status: PathBuf,

    /// Detailed history JSON file (an orchestration status with full history)
    #[arg(short, long)]
    details: Option<PathBuf>,

    /// JSON array of sub-orchestration records
    #[arg(short, long)]
    sub_orchestrations: Option<PathBuf>,

    /// Configuration file (defaults to config/monitor.* when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

fn read_json_task<T>(operation: &'static str, path: PathBuf) -> Fetch<T>
where
    T: DeserializeOwned + Send + 'static,
{
    let handle = tokio::spawn(async move { read_json::<T>(operation, &path).await });
    Fetch::from_task(operation, handle)
}

async fn read_json<T: DeserializeOwned>(operation: &str, path: &Path) -> MonitorResult<T> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        MonitorError::upstream_fetch(operation, format!("{}: {e}", path.display()))
    })?;
    Ok(serde_json::from_str(&raw)?)
}

async fn run(cli: Cli) -> MonitorResult<()> {
    let manager = match &cli.config {
        Some(path) => ConfigManager::load_from_file(path)?,
        None => ConfigManager::load()?,
    };
    init_structured_logging(&manager.config().logging);

    // Start both upstream reads before the status itself, as the API does
    let details = cli
        .details
        .map(|path| read_json_task::<OrchestrationStatus>("details", path));
    let sub_orchestrations = cli
        .sub_orchestrations
        .map(|path| read_json_task::<Vec<SubOrchestrationRecord>>("sub_orchestrations", path));

    let status: OrchestrationStatus = read_json("status", &cli.status).await?;

    let expanded = ExpandedOrchestrationStatus::with_config(
        status,
        details,
        sub_orchestrations,
        &manager.config().enrichment,
    )
    .await;

    let response = expanded.to_response().await;
    let output = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{output}");
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!(error = %e, "status enrichment failed");
        eprintln!("status-enricher: {e}");
        process::exit(1);
    }
}

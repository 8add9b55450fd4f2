mod application;
mod auth;
mod cli;
mod error;
mod github;
mod infrastructure;
mod models;

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use application::services::{summarize, ReportService};
use auth::TokenConfig;
use cli::Cli;
use github::GitHubClient;
use infrastructure::logging::{BoundaryLogger, TraceContext};
use infrastructure::report::ReportWriter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run(cli: Cli) -> Result<()> {
    let token = TokenConfig::from_env()?;
    let trace_id = TraceContext::new_trace_id();
    let settings = cli.scan_settings();

    info!(
        trace_id = %trace_id,
        organization = %settings.organization,
        prefix = %settings.prefix,
        workflow_file = %settings.workflow_file,
        stale_hours = settings.stale_hours,
        "Starting package aggregation"
    );

    let client = GitHubClient::new(token.token, &cli.api_url, &trace_id);
    let service = ReportService::new(Arc::new(client), settings, Arc::new(BoundaryLogger::new()));

    let states = service.collect(&trace_id).await?;

    ReportWriter::write(&cli.output, &states)
        .await
        .context("Report was not written")?;

    for (status, count) in summarize(&states) {
        info!(trace_id = %trace_id, status = %status, count, "Summary");
    }

    Ok(())
}

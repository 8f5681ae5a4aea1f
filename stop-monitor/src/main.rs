use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use stop_monitor::cli::Cli;
use stop_monitor::fetcher::Fetcher;
use stop_monitor::siri::SmClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = SmClient::new(cli.sm_config()).context("failed to create stop monitoring client")?;
    let fetcher = Fetcher::new(client, cli.query());

    // A non-200 answer is printed, not treated as a failure
    let mut stdout = std::io::stdout().lock();
    fetcher
        .fetch_and_report(&mut stdout)
        .await
        .with_context(|| {
            format!(
                "stop monitoring request for {} failed",
                fetcher.query().monitoring_ref()
            )
        })?;

    Ok(())
}

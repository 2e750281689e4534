use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::sync::Arc;

use ghstatus::app;
use ghstatus::client::StatusClient;
use ghstatus::config::Endpoints;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Print the current GitHub status: component health and unresolved incidents"
)]
struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let _args = Args::parse();

    let client = StatusClient::new(Endpoints::default()).context("failed to build HTTP client")?;
    let summary = app::run(Arc::new(client)).await?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(summary.as_bytes())
        .context("failed to write to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}

//! Seeds the featured cars into the database.
//!
//! Run with:
//! ```
//! cargo run -p car-seed --bin seed
//! ```

use std::process::ExitCode;

use anyhow::Context;
use car_seed::prelude::*;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

fn init_logging() {
    // Warnings and errors go to stderr, progress to stdout.
    let writer = std::io::stderr
        .with_max_level(Level::WARN)
        .or_else(std::io::stdout);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .init();
}

async fn seed(config: &SeedConfig) -> anyhow::Result<SeedReport> {
    let db = Database::connect(&config.database_url, config.max_connections)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");

    let report = run(&db, &featured_cars()).await?;
    Ok(report)
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let config = SeedConfig::from_env();

    match seed(&config).await {
        Ok(report) => {
            tracing::debug!("Upserted {} cars", report.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

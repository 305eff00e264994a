//! motor-import CLI

use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use electra_adapter_postgres::{PostgresConfig, create_pool};
use electra_telemetry::init_tracing;
use tracing::info;

use motor_import::{import_records, read_records};

#[derive(Debug, Parser)]
#[command(name = "motor-import", about = "Import HV motor inventory from CSV")]
struct Arguments {
    /// CSV file to import
    #[arg(short, long, value_name = "path")]
    file: PathBuf,
    /// PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL", value_name = "url", hide_env_values = true)]
    database_url: String,
    /// Parse and report without writing
    #[arg(long)]
    dry_run: bool,
    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Arguments::parse();
    init_tracing(&args.log_level);

    let file = File::open(&args.file)
        .with_context(|| format!("failed to open {}", args.file.display()))?;
    let records = read_records(file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    info!(file = %args.file.display(), records = records.len(), "CSV parsed");

    if args.dry_run {
        return Ok(());
    }

    let config = PostgresConfig::new(args.database_url)
        .with_max_connections(1)
        .with_application_name("motor-import");
    let pool = create_pool(&config).await.context("failed to connect to database")?;

    let result = import_records(&pool, &records).await;
    pool.close().await;

    let inserted = result.context("import rolled back")?;
    info!(inserted, "Import finished");

    Ok(())
}

//! FDP ETL - CSV snapshot to MongoDB batch loader

use anyhow::Result;
use clap::Parser;
use fdp_common::logging::{init_logging, LogConfig, LogLevel};
use fdp_etl::config::EtlConfig;
use fdp_etl::pipeline::EtlPipeline;
use fdp_etl::sources::SourceDir;
use fdp_etl::store::DocumentStore;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "fdp-etl")]
#[command(author, version, about = "Denormalize football CSV snapshots into MongoDB collections")]
struct Cli {
    /// Directory containing the CSV snapshot
    #[arg(short, long)]
    dataset_dir: Option<PathBuf>,

    /// MongoDB connection string
    #[arg(long)]
    uri: Option<String>,

    /// Target database name
    #[arg(long)]
    database: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env()?;
    log_config.file_prefix = "fdp-etl".to_string();
    if cli.verbose {
        log_config.level = LogLevel::Debug;
    }
    init_logging(&log_config)?;

    let mut config = EtlConfig::load()?;
    if let Some(dataset_dir) = cli.dataset_dir {
        config.dataset_dir = dataset_dir;
    }
    if let Some(uri) = cli.uri {
        config.store.uri = uri;
    }
    if let Some(database) = cli.database {
        config.store.database = database;
    }
    config.validate()?;

    info!(
        dataset_dir = %config.dataset_dir.display(),
        database = %config.store.database,
        "Starting ETL run"
    );

    // A connection failure is the only store error that fails the process
    let store = DocumentStore::connect(&config.store).await?;

    let pipeline = EtlPipeline::new(SourceDir::new(&config.dataset_dir), store);
    let report = pipeline.run().await?;

    // Per-entity failures are reported in the summary but do not change
    // the exit status; the run is best-effort past the connection stage
    info!("ETL pipeline completed: {}", report.summary());

    Ok(())
}

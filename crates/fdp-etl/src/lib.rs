//! FDP ETL Library
//!
//! Denormalizes a CSV snapshot of relational football data (players,
//! clubs, competitions, games, valuations, appearances, game events) into
//! five document collections and loads them into MongoDB with supporting
//! indexes and shard keys.
//!
//! # Example
//!
//! ```no_run
//! use fdp_etl::{config::EtlConfig, pipeline::EtlPipeline, sources::SourceDir, store::DocumentStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = EtlConfig::load()?;
//!     let store = DocumentStore::connect(&config.store).await?;
//!     let pipeline = EtlPipeline::new(SourceDir::new(&config.dataset_dir), store);
//!     let report = pipeline.run().await?;
//!     tracing::info!("{}", report.summary());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod documents;
pub mod entities;
pub mod pipeline;
pub mod sources;
pub mod store;
pub mod table;

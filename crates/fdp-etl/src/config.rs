//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default MongoDB connection string for local development.
pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";

/// Default target database name.
pub const DEFAULT_DB_NAME: &str = "transfermarkt";

/// Default directory containing the CSV snapshot.
pub const DEFAULT_DATASET_DIR: &str = "dataset";

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EtlConfig {
    pub store: StoreConfig,
    pub dataset_dir: PathBuf,
}

/// Document store connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub uri: String,
    pub database: String,
}

impl EtlConfig {
    /// Load configuration from environment and defaults
    ///
    /// Reads a `.env` file when present, then `MONGO_URI`, `DB_NAME` and
    /// `DATASET_DIR`. Resolved once at startup and passed explicitly into
    /// the store gateway and the orchestrator.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = EtlConfig {
            store: StoreConfig {
                uri: std::env::var("MONGO_URI").unwrap_or_else(|_| DEFAULT_MONGO_URI.to_string()),
                database: std::env::var("DB_NAME").unwrap_or_else(|_| DEFAULT_DB_NAME.to_string()),
            },
            dataset_dir: std::env::var("DATASET_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATASET_DIR)),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.store.uri.is_empty() {
            anyhow::bail!("MongoDB URI cannot be empty");
        }

        if self.store.database.is_empty() {
            anyhow::bail!("Database name cannot be empty");
        }

        if self.dataset_dir.as_os_str().is_empty() {
            anyhow::bail!("Dataset directory cannot be empty");
        }

        Ok(())
    }
}

impl Default for EtlConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig {
                uri: DEFAULT_MONGO_URI.to_string(),
                database: DEFAULT_DB_NAME.to_string(),
            },
            dataset_dir: PathBuf::from(DEFAULT_DATASET_DIR),
        }
    }
}

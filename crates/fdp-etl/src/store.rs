//! Document store gateway
//!
//! Thin wrapper over the MongoDB driver covering exactly the write surface
//! the pipeline needs: collection drop, index creation, bulk insert, and
//! the sharding admin commands. No component reads inserted data back.

use fdp_common::Result;
use mongodb::bson::{doc, Document};
use mongodb::options::IndexOptions;
use mongodb::{Client, Database, IndexModel};
use serde::Serialize;
use tracing::info;

use crate::config::StoreConfig;

/// Connected handle to the target database
#[derive(Debug, Clone)]
pub struct DocumentStore {
    client: Client,
    db: Database,
    db_name: String,
}

impl DocumentStore {
    /// Connect and verify the deployment is reachable.
    ///
    /// The driver connects lazily, so a `ping` is issued here to surface
    /// connection failures before any collection work starts.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let client = Client::with_uri_str(&config.uri).await?;
        let db = client.database(&config.database);
        db.run_command(doc! { "ping": 1 }).await?;
        info!(database = %config.database, "Connected to MongoDB");

        Ok(Self {
            client,
            db,
            db_name: config.database.clone(),
        })
    }

    /// Drop each listed collection that currently exists; absent
    /// collections are skipped, which makes repeated runs idempotent.
    pub async fn drop_collections(&self, names: &[&str]) -> Result<()> {
        let existing = self.db.list_collection_names().await?;
        for &name in names {
            if existing.iter().any(|c| c.as_str() == name) {
                self.db.collection::<Document>(name).drop().await?;
                info!(collection = name, "Dropped collection");
            }
        }
        Ok(())
    }

    /// Create one index on a collection.
    pub async fn create_index(&self, collection: &str, keys: Document, unique: bool) -> Result<()> {
        let options = IndexOptions::builder().unique(unique).build();
        let model = IndexModel::builder().keys(keys).options(options).build();
        self.db
            .collection::<Document>(collection)
            .create_index(model)
            .await?;
        Ok(())
    }

    /// Bulk insert documents, returning the inserted count.
    pub async fn insert_many<T>(&self, collection: &str, docs: &[T]) -> Result<usize>
    where
        T: Serialize + Send + Sync,
    {
        if docs.is_empty() {
            return Ok(0);
        }
        let result = self
            .db
            .collection::<T>(collection)
            .insert_many(docs)
            .await?;
        Ok(result.inserted_ids.len())
    }

    /// Enable sharding for the target database.
    pub async fn enable_sharding(&self) -> Result<()> {
        self.admin()
            .run_command(doc! { "enableSharding": self.db_name.clone() })
            .await?;
        Ok(())
    }

    /// Shard a collection with the given key.
    pub async fn shard_collection(&self, collection: &str, key: Document) -> Result<()> {
        self.admin()
            .run_command(doc! {
                "shardCollection": format!("{}.{}", self.db_name, collection),
                "key": key,
            })
            .await?;
        Ok(())
    }

    fn admin(&self) -> Database {
        self.client.database("admin")
    }
}

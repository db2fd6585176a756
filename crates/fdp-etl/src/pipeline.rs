//! Load orchestrator
//!
//! Runs the batch load in fixed stages: reset, index provisioning, shard
//! provisioning, then the five entity loads. The entity loads are
//! failure-isolated: an error is recorded for that entity and the run
//! moves on to the next one.

use fdp_common::Result;
use mongodb::bson::{doc, Document};
use tracing::{error, info, warn};

use crate::documents::{
    ClubDoc, CompetitionDoc, GameEventsDoc, GameSummaryDoc, PlayerDoc, TARGET_COLLECTIONS,
};
use crate::entities;
use crate::sources::SourceDir;
use crate::store::DocumentStore;

/// The five target entities, in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Players,
    Clubs,
    Competitions,
    GameSummaries,
    GameEvents,
}

impl Entity {
    pub const ALL: [Entity; 5] = [
        Entity::Players,
        Entity::Clubs,
        Entity::Competitions,
        Entity::GameSummaries,
        Entity::GameEvents,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Entity::Players => "players",
            Entity::Clubs => "clubs",
            Entity::Competitions => "competitions",
            Entity::GameSummaries => "game summaries",
            Entity::GameEvents => "game events",
        }
    }

    /// Physical collection the entity loads into
    pub fn collection(self) -> &'static str {
        match self {
            Entity::Players => PlayerDoc::COLLECTION,
            Entity::Clubs => ClubDoc::COLLECTION,
            Entity::Competitions => CompetitionDoc::COLLECTION,
            Entity::GameSummaries => GameSummaryDoc::COLLECTION,
            Entity::GameEvents => GameEventsDoc::COLLECTION,
        }
    }
}

/// Outcome of one entity load
#[derive(Debug, Clone)]
pub struct EntityOutcome {
    pub entity: Entity,
    pub inserted: usize,
    pub error: Option<String>,
}

impl EntityOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Report for a completed run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub outcomes: Vec<EntityOutcome>,
}

impl PipelineReport {
    /// True when every entity loaded
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(EntityOutcome::is_ok)
    }

    pub fn total_inserted(&self) -> usize {
        self.outcomes.iter().map(|o| o.inserted).sum()
    }

    /// One-line summary for the final log
    pub fn summary(&self) -> String {
        let failed: Vec<&str> = self
            .outcomes
            .iter()
            .filter(|o| !o.is_ok())
            .map(|o| o.entity.as_str())
            .collect();

        if failed.is_empty() {
            format!(
                "{} documents inserted across {} collections",
                self.total_inserted(),
                self.outcomes.len()
            )
        } else {
            format!(
                "{} documents inserted, failed entities: {}",
                self.total_inserted(),
                failed.join(", ")
            )
        }
    }
}

/// Batch load orchestrator
pub struct EtlPipeline {
    sources: SourceDir,
    store: DocumentStore,
}

impl EtlPipeline {
    pub fn new(sources: SourceDir, store: DocumentStore) -> Self {
        Self { sources, store }
    }

    /// Run the full load.
    ///
    /// Reset failures are fatal; index and shard provisioning failures
    /// degrade to warnings so the load also works against bare,
    /// non-sharded deployments. Each entity reads its own source files,
    /// so a missing file fails that entity alone.
    pub async fn run(&self) -> Result<PipelineReport> {
        info!("Phase 1: Resetting target collections");
        self.store.drop_collections(&TARGET_COLLECTIONS).await?;

        info!("Phase 2: Creating indexes");
        self.setup_indexes().await;

        info!("Phase 3: Provisioning sharding");
        self.setup_sharding().await;

        info!("Phase 4: Loading entities");
        let mut outcomes = Vec::with_capacity(Entity::ALL.len());
        for entity in Entity::ALL {
            let result = match entity {
                Entity::Players => self.load_players().await,
                Entity::Clubs => self.load_clubs().await,
                Entity::Competitions => self.load_competitions().await,
                Entity::GameSummaries => self.load_game_summaries().await,
                Entity::GameEvents => self.load_game_events().await,
            };

            outcomes.push(match result {
                Ok(inserted) => {
                    info!(entity = entity.as_str(), inserted, "Entity loaded");
                    EntityOutcome {
                        entity,
                        inserted,
                        error: None,
                    }
                },
                Err(e) => {
                    error!(
                        entity = entity.as_str(),
                        error = %e,
                        "Entity load failed, continuing with remaining entities"
                    );
                    EntityOutcome {
                        entity,
                        inserted: 0,
                        error: Some(e.to_string()),
                    }
                },
            });
        }

        let report = PipelineReport { outcomes };
        info!("Pipeline finished: {}", report.summary());
        Ok(report)
    }

    /// Create every index in the plan.
    ///
    /// Failures are per-collection warnings: uniqueness is already
    /// enforced in-transform, the unique indexes are a backstop.
    async fn setup_indexes(&self) {
        for (collection, indexes) in index_plan() {
            match self.create_collection_indexes(collection, indexes).await {
                Ok(()) => info!(collection, "Indexes created"),
                Err(e) => warn!(collection, error = %e, "Skipping remaining indexes for collection"),
            }
        }
    }

    async fn create_collection_indexes(
        &self,
        collection: &str,
        indexes: Vec<(Document, bool)>,
    ) -> Result<()> {
        for (keys, unique) in indexes {
            self.store.create_index(collection, keys, unique).await?;
        }
        Ok(())
    }

    /// Best-effort sharding.
    ///
    /// A single replica set rejects `enableSharding`; that is the expected
    /// outcome on non-sharded deployments and the load proceeds unsharded.
    async fn setup_sharding(&self) {
        if let Err(e) = self.store.enable_sharding().await {
            warn!(error = %e, "Sharding unavailable, loading unsharded");
            return;
        }
        info!("Sharding enabled for database");

        for (collection, key) in shard_plan() {
            match self.store.shard_collection(collection, key.clone()).await {
                Ok(()) => info!(collection, key = %key, "Sharded collection"),
                Err(e) => warn!(collection, error = %e, "Could not shard collection"),
            }
        }
    }

    async fn load_players(&self) -> Result<usize> {
        let players = self.sources.players()?;
        let valuations = self.sources.valuations()?;
        let appearances = self.sources.appearances()?;

        let build = entities::players::build(&players, &valuations, &appearances);
        if build.duplicates_dropped > 0 {
            info!(
                dropped = build.duplicates_dropped,
                "Dropped duplicate players to keep (surname, name, birthdate) unique"
            );
        }

        self.store
            .insert_many(PlayerDoc::COLLECTION, &build.docs)
            .await
    }

    async fn load_clubs(&self) -> Result<usize> {
        let clubs = self.sources.clubs()?;
        let games = self.sources.games()?;
        let players = self.sources.players()?;
        let valuations = self.sources.valuations()?;

        let docs = entities::clubs::build(&clubs, &games, &players, &valuations);
        self.store.insert_many(ClubDoc::COLLECTION, &docs).await
    }

    async fn load_competitions(&self) -> Result<usize> {
        let competitions = self.sources.competitions()?;
        let games = self.sources.games()?;

        let docs = entities::competitions::build(&competitions, &games);
        self.store
            .insert_many(CompetitionDoc::COLLECTION, &docs)
            .await
    }

    async fn load_game_summaries(&self) -> Result<usize> {
        let games = self.sources.games()?;
        let clubs = self.sources.clubs()?;
        // competitions.csv must be present even though only the id column
        // already on each game row is carried through
        self.sources.competitions()?;

        let docs = entities::game_summaries::build(&games, &clubs);
        self.store
            .insert_many(GameSummaryDoc::COLLECTION, &docs)
            .await
    }

    async fn load_game_events(&self) -> Result<usize> {
        let games = self.sources.games()?;
        let events = self.sources.game_events()?;

        let docs = entities::game_events::build(&games, &events);
        self.store
            .insert_many(GameEventsDoc::COLLECTION, &docs)
            .await
    }
}

/// Index plan: collection → (keys, unique) pairs, created before any load
fn index_plan() -> Vec<(&'static str, Vec<(Document, bool)>)> {
    vec![
        (
            PlayerDoc::COLLECTION,
            vec![
                (doc! { "surname": 1, "name": 1 }, false),
                (doc! { "surname": 1, "name": 1, "birthdate": 1 }, true),
                (doc! { "plays_in_competition": 1, "position": 1 }, false),
            ],
        ),
        (
            ClubDoc::COLLECTION,
            vec![
                (doc! { "name": 1 }, false),
                (doc! { "name": 1, "club_id": 1 }, true),
            ],
        ),
        (
            GameSummaryDoc::COLLECTION,
            vec![
                (doc! { "home_club_goals": 1, "competition_id": 1 }, false),
                (
                    doc! { "home_club_goals": 1, "competition_id": 1, "game_id": 1 },
                    true,
                ),
                (doc! { "stadium_name": 1, "season": 1 }, false),
            ],
        ),
        (
            GameEventsDoc::COLLECTION,
            vec![
                (doc! { "referee": 1 }, false),
                (doc! { "referee": 1, "game_id": 1 }, true),
                (doc! { "referee": 1, "game_events.type": 1 }, false),
            ],
        ),
    ]
}

/// Shard plan, applied only after `enableSharding` succeeds
fn shard_plan() -> Vec<(&'static str, Document)> {
    vec![
        (PlayerDoc::COLLECTION, doc! { "surname": 1, "name": 1 }),
        (ClubDoc::COLLECTION, doc! { "name": "hashed" }),
        (
            GameSummaryDoc::COLLECTION,
            doc! { "home_club_goals": 1, "competition_id": 1 },
        ),
        (GameEventsDoc::COLLECTION, doc! { "referee": "hashed" }),
        (CompetitionDoc::COLLECTION, doc! { "_id": "hashed" }),
    ]
}

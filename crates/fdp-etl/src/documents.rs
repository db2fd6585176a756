//! Denormalized target documents
//!
//! One struct per target collection plus the embedded sub-records. These
//! serialize directly into the bulk-insert payloads; nested lists default
//! to empty rather than absent so readers never see a missing array.

use serde::{Deserialize, Serialize};

/// Market value snapshot embedded in player and club documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationEntry {
    pub market_value: Option<i64>,
    pub date: Option<String>,
}

/// Document for the `players` collection
///
/// Unique on `(surname, name, birthdate)`; the pipeline enforces this
/// before insertion, the store's unique index is only a backstop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDoc {
    pub player_id: i64,
    pub surname: Option<String>,
    pub name: Option<String>,
    pub birthdate: Option<String>,
    pub position: Option<String>,
    pub citizenship_country_name: Option<String>,
    pub player_valuation: Vec<ValuationEntry>,
    pub plays_in_competition: Vec<String>,
}

impl PlayerDoc {
    pub const COLLECTION: &'static str = "players";
}

/// Player record embedded in a club document
///
/// Carries the same valuation history that the player document holds, so
/// club reads never join back to the players collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedPlayer {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub player_valuation: Vec<ValuationEntry>,
}

/// Document for the `clubs` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubDoc {
    pub club_id: i64,
    pub name: String,
    pub stadium_name: Option<String>,
    /// Distinct stadiums where the club played as the away side, in
    /// first-seen order
    pub away_stadium_name: Vec<String>,
    pub players: Vec<EmbeddedPlayer>,
}

impl ClubDoc {
    pub const COLLECTION: &'static str = "clubs";
}

/// Document for the `competitions` collection
///
/// The natural key is the primary key: `_id` carries the source
/// competition id, never a generated surrogate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionDoc {
    #[serde(rename = "_id")]
    pub competition_id: String,
    pub name: String,
    pub stadiums: Vec<String>,
}

impl CompetitionDoc {
    pub const COLLECTION: &'static str = "competitions";
}

/// Document for the `games1` collection (per-game summaries)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummaryDoc {
    pub game_id: i64,
    pub home_club_goals: Option<i64>,
    pub competition_id: String,
    pub date: Option<String>,
    pub season: Option<i64>,
    pub home_club_name: Option<String>,
    pub away_club_name: Option<String>,
    pub stadium_name: Option<String>,
}

impl GameSummaryDoc {
    pub const COLLECTION: &'static str = "games1";
}

/// Document for the `games2` collection (per-game event lists)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEventsDoc {
    pub game_id: i64,
    pub referee: Option<String>,
    /// Event-type codes in source order, not deduplicated, not sorted
    pub game_events: Vec<String>,
}

impl GameEventsDoc {
    pub const COLLECTION: &'static str = "games2";
}

/// All target collections, in load order.
pub const TARGET_COLLECTIONS: [&str; 5] = [
    PlayerDoc::COLLECTION,
    ClubDoc::COLLECTION,
    CompetitionDoc::COLLECTION,
    GameSummaryDoc::COLLECTION,
    GameEventsDoc::COLLECTION,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competition_id_serializes_as_natural_key() {
        let doc = CompetitionDoc {
            competition_id: "GB1".to_string(),
            name: "premier-league".to_string(),
            stadiums: vec![],
        };
        let bson = mongodb::bson::to_document(&doc).unwrap();
        assert_eq!(bson.get_str("_id").unwrap(), "GB1");
        assert!(bson.get("competition_id").is_none());
    }

    #[test]
    fn test_target_collections_are_distinct() {
        let mut names = TARGET_COLLECTIONS.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TARGET_COLLECTIONS.len());
    }
}

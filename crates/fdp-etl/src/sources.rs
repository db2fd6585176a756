//! CSV source tables
//!
//! Each named source file is loaded fully into memory as a vector of typed
//! rows. The header row drives deserialization: columns not modeled here
//! are ignored, and empty fields map to `None`. A missing file is fatal
//! for every builder that needs it, but not for the run as a whole.

use fdp_common::{EtlError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

pub const PLAYERS_CSV: &str = "players.csv";
pub const VALUATIONS_CSV: &str = "player_valuations.csv";
pub const APPEARANCES_CSV: &str = "appearances.csv";
pub const CLUBS_CSV: &str = "clubs.csv";
pub const GAMES_CSV: &str = "games.csv";
pub const COMPETITIONS_CSV: &str = "competitions.csv";
pub const GAME_EVENTS_CSV: &str = "game_events.csv";

/// One row of `players.csv`
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRecord {
    pub player_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub position: Option<String>,
    pub country_of_citizenship: Option<String>,
    pub current_club_id: Option<i64>,
}

/// One row of `player_valuations.csv`
#[derive(Debug, Clone, Deserialize)]
pub struct ValuationRecord {
    pub player_id: i64,
    pub market_value_in_eur: Option<i64>,
    pub date: Option<String>,
}

/// One row of `appearances.csv`; only the player/competition pair is used
#[derive(Debug, Clone, Deserialize)]
pub struct AppearanceRecord {
    pub player_id: i64,
    pub competition_id: String,
}

/// One row of `clubs.csv`
#[derive(Debug, Clone, Deserialize)]
pub struct ClubRecord {
    pub club_id: i64,
    pub name: String,
    pub stadium_name: Option<String>,
}

/// One row of `games.csv`
#[derive(Debug, Clone, Deserialize)]
pub struct GameRecord {
    pub game_id: i64,
    pub home_club_id: Option<i64>,
    pub away_club_id: Option<i64>,
    pub home_club_goals: Option<i64>,
    pub competition_id: String,
    pub date: Option<String>,
    pub season: Option<i64>,
    pub stadium: Option<String>,
    pub referee: Option<String>,
}

/// One row of `competitions.csv`
#[derive(Debug, Clone, Deserialize)]
pub struct CompetitionRecord {
    pub competition_id: String,
    pub name: String,
}

/// One row of `game_events.csv`, in source (chronological) order
#[derive(Debug, Clone, Deserialize)]
pub struct GameEventRecord {
    pub game_id: i64,
    #[serde(rename = "type")]
    pub event_type: String,
}

/// Reader over a directory of CSV source files
#[derive(Debug, Clone)]
pub struct SourceDir {
    dir: PathBuf,
}

impl SourceDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn players(&self) -> Result<Vec<PlayerRecord>> {
        self.load(PLAYERS_CSV)
    }

    pub fn valuations(&self) -> Result<Vec<ValuationRecord>> {
        self.load(VALUATIONS_CSV)
    }

    pub fn appearances(&self) -> Result<Vec<AppearanceRecord>> {
        self.load(APPEARANCES_CSV)
    }

    pub fn clubs(&self) -> Result<Vec<ClubRecord>> {
        self.load(CLUBS_CSV)
    }

    pub fn games(&self) -> Result<Vec<GameRecord>> {
        self.load(GAMES_CSV)
    }

    pub fn competitions(&self) -> Result<Vec<CompetitionRecord>> {
        self.load(COMPETITIONS_CSV)
    }

    pub fn game_events(&self) -> Result<Vec<GameEventRecord>> {
        self.load(GAME_EVENTS_CSV)
    }

    /// Load one CSV file into typed rows, preserving file order
    fn load<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Err(EtlError::SourceNotFound(path));
        }

        let mut reader = csv::Reader::from_path(&path)?;
        let mut rows = Vec::new();
        for record in reader.deserialize() {
            rows.push(record?);
        }

        debug!(file = %path.display(), rows = rows.len(), "Loaded source table");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn dataset(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    #[test]
    fn test_missing_file_is_source_not_found() {
        let dir = dataset(&[]);
        let sources = SourceDir::new(dir.path());
        let err = sources.players().unwrap_err();
        assert!(matches!(err, EtlError::SourceNotFound(_)));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let dir = dataset(&[(
            COMPETITIONS_CSV,
            "competition_id,name,sub_type,country_name\nGB1,premier-league,first_tier,England\n",
        )]);
        let sources = SourceDir::new(dir.path());
        let rows = sources.competitions().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].competition_id, "GB1");
        assert_eq!(rows[0].name, "premier-league");
    }

    #[test]
    fn test_empty_fields_become_none() {
        let dir = dataset(&[(
            GAMES_CSV,
            "game_id,home_club_id,away_club_id,home_club_goals,competition_id,date,season,stadium,referee\n\
             1,,5,2,GB1,2012-08-01,2012,,\n",
        )]);
        let sources = SourceDir::new(dir.path());
        let rows = sources.games().unwrap();
        assert_eq!(rows[0].home_club_id, None);
        assert_eq!(rows[0].away_club_id, Some(5));
        assert_eq!(rows[0].stadium, None);
        assert_eq!(rows[0].referee, None);
    }

    #[test]
    fn test_event_type_column_is_renamed() {
        let dir = dataset(&[(
            GAME_EVENTS_CSV,
            "game_event_id,game_id,minute,type,player_id\ne1,42,12,Goals,10\n",
        )]);
        let sources = SourceDir::new(dir.path());
        let rows = sources.game_events().unwrap();
        assert_eq!(rows[0].game_id, 42);
        assert_eq!(rows[0].event_type, "Goals");
    }

    #[test]
    fn test_rows_keep_file_order() {
        let dir = dataset(&[(
            VALUATIONS_CSV,
            "player_id,market_value_in_eur,date\n7,100,2020-01-01\n7,200,2020-06-01\n3,50,2020-02-01\n",
        )]);
        let sources = SourceDir::new(dir.path());
        let rows = sources.valuations().unwrap();
        let values: Vec<_> = rows.iter().map(|v| v.market_value_in_eur).collect();
        assert_eq!(values, vec![Some(100), Some(200), Some(50)]);
    }
}

//! Game summary collection builder
//!
//! Projects each game into a fixed summary document, resolving club ids to
//! names through a lookup built once from the club table. Lookups that
//! miss stay absent rather than erroring.

use std::collections::HashMap;

use crate::documents::GameSummaryDoc;
use crate::sources::{ClubRecord, GameRecord};

/// Build one summary document per game.
pub fn build(games: &[GameRecord], clubs: &[ClubRecord]) -> Vec<GameSummaryDoc> {
    let club_names: HashMap<i64, &str> = clubs
        .iter()
        .map(|c| (c.club_id, c.name.as_str()))
        .collect();
    let resolve =
        |id: Option<i64>| id.and_then(|id| club_names.get(&id).map(|name| name.to_string()));

    games
        .iter()
        .map(|g| GameSummaryDoc {
            game_id: g.game_id,
            home_club_goals: g.home_club_goals,
            competition_id: g.competition_id.clone(),
            date: g.date.clone(),
            season: g.season,
            home_club_name: resolve(g.home_club_id),
            away_club_name: resolve(g.away_club_id),
            stadium_name: g.stadium.clone(),
        })
        .collect()
}

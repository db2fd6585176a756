//! Competition collection builder
//!
//! Attaches the distinct set of stadiums a competition was played in to
//! each competition row, keyed by the natural competition id.

use crate::documents::CompetitionDoc;
use crate::sources::{CompetitionRecord, GameRecord};
use crate::table::{distinct_by, group_collect, left_join};

/// Build one document per competition, with `_id` set to the source id.
pub fn build(competitions: &[CompetitionRecord], games: &[GameRecord]) -> Vec<CompetitionDoc> {
    let pairs: Vec<(String, String)> = games
        .iter()
        .filter_map(|g| {
            g.stadium
                .as_ref()
                .map(|s| (g.competition_id.clone(), s.clone()))
        })
        .collect();
    let pairs = distinct_by(&pairs, |pair| pair.clone());
    let stadiums = group_collect(&pairs, |(c, _)| c.clone(), |(_, s)| s.clone());

    left_join(
        competitions,
        &stadiums,
        |c| c.competition_id.clone(),
        |g| g.key.clone(),
    )
    .into_iter()
    .map(|(comp, group)| CompetitionDoc {
        competition_id: comp.competition_id.clone(),
        name: comp.name.clone(),
        stadiums: group.map(|g| g.items.clone()).unwrap_or_default(),
    })
    .collect()
}

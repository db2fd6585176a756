//! Player collection builder
//!
//! Denormalizes the player base table with its valuation history and the
//! distinct list of competitions the player appeared in, then enforces
//! `(surname, name, birthdate)` uniqueness before insertion.

use std::collections::HashSet;

use crate::documents::PlayerDoc;
use crate::sources::{AppearanceRecord, PlayerRecord, ValuationRecord};
use crate::table::{distinct_by, group_collect, left_join};

use super::valuation_groups;

/// Result of building the players collection
#[derive(Debug, Clone)]
pub struct PlayerBuild {
    pub docs: Vec<PlayerDoc>,
    /// Rows dropped to keep `(surname, name, birthdate)` unique; first
    /// occurrence wins
    pub duplicates_dropped: usize,
}

/// Build one document per unique player.
pub fn build(
    players: &[PlayerRecord],
    valuations: &[ValuationRecord],
    appearances: &[AppearanceRecord],
) -> PlayerBuild {
    let valuations = valuation_groups(valuations);

    let appearances = distinct_by(appearances, |a| (a.player_id, a.competition_id.clone()));
    let competitions = group_collect(&appearances, |a| a.player_id, |a| a.competition_id.clone());

    let with_valuations = left_join(players, &valuations, |p| p.player_id, |g| g.key);
    let joined = left_join(
        &with_valuations,
        &competitions,
        |(p, _)| p.player_id,
        |g| g.key,
    );

    let mut docs = Vec::with_capacity(players.len());
    let mut seen = HashSet::new();
    let mut duplicates_dropped = 0;

    for (pv, comps) in joined {
        let (player, vals) = *pv;
        let identity = (
            player.last_name.clone(),
            player.first_name.clone(),
            player.date_of_birth.clone(),
        );
        if !seen.insert(identity) {
            duplicates_dropped += 1;
            continue;
        }

        docs.push(PlayerDoc {
            player_id: player.player_id,
            surname: player.last_name.clone(),
            name: player.first_name.clone(),
            birthdate: player.date_of_birth.clone(),
            position: player.position.clone(),
            citizenship_country_name: player.country_of_citizenship.clone(),
            player_valuation: vals.map(|g| g.items.clone()).unwrap_or_default(),
            plays_in_competition: comps.map(|g| g.items.clone()).unwrap_or_default(),
        });
    }

    PlayerBuild {
        docs,
        duplicates_dropped,
    }
}

//! Club collection builder
//!
//! Denormalizes clubs with the distinct set of stadiums they visited as
//! the away side and the current squad, each embedded player carrying its
//! own valuation history.

use crate::documents::{ClubDoc, EmbeddedPlayer};
use crate::sources::{ClubRecord, GameRecord, PlayerRecord, ValuationRecord};
use crate::table::{distinct_by, group_collect, left_join};

use super::valuation_groups;

/// Build one document per club.
pub fn build(
    clubs: &[ClubRecord],
    games: &[GameRecord],
    players: &[PlayerRecord],
    valuations: &[ValuationRecord],
) -> Vec<ClubDoc> {
    // Distinct (away club, stadium) pairs; games missing either field are
    // ignored
    let away: Vec<(i64, String)> = games
        .iter()
        .filter_map(|g| match (g.away_club_id, g.stadium.as_ref()) {
            (Some(club), Some(stadium)) => Some((club, stadium.clone())),
            _ => None,
        })
        .collect();
    let away = distinct_by(&away, |pair| pair.clone());
    let away_stadiums = group_collect(&away, |(club, _)| *club, |(_, stadium)| stadium.clone());

    // Players with no current club are embedded nowhere
    let valuations = valuation_groups(valuations);
    let squad_rows: Vec<(i64, EmbeddedPlayer)> =
        left_join(players, &valuations, |p| p.player_id, |g| g.key)
            .into_iter()
            .filter_map(|(p, vals)| {
                let club = p.current_club_id?;
                Some((
                    club,
                    EmbeddedPlayer {
                        name: p.first_name.clone(),
                        surname: p.last_name.clone(),
                        player_valuation: vals.map(|g| g.items.clone()).unwrap_or_default(),
                    },
                ))
            })
            .collect();
    let squads = group_collect(&squad_rows, |(club, _)| *club, |(_, player)| player.clone());

    let with_away = left_join(clubs, &away_stadiums, |c| c.club_id, |g| g.key);
    let joined = left_join(&with_away, &squads, |(c, _)| c.club_id, |g| g.key);

    joined
        .into_iter()
        .map(|(ca, squad)| {
            let (club, away) = *ca;
            ClubDoc {
                club_id: club.club_id,
                name: club.name.clone(),
                stadium_name: club.stadium_name.clone(),
                away_stadium_name: away.map(|g| g.items.clone()).unwrap_or_default(),
                players: squad.map(|g| g.items.clone()).unwrap_or_default(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn club(id: i64, name: &str, stadium: &str) -> ClubRecord {
        ClubRecord {
            club_id: id,
            name: name.to_string(),
            stadium_name: Some(stadium.to_string()),
        }
    }

    fn away_game(game_id: i64, away_club_id: Option<i64>, stadium: Option<&str>) -> GameRecord {
        GameRecord {
            game_id,
            home_club_id: Some(99),
            away_club_id,
            home_club_goals: Some(1),
            competition_id: "GB1".to_string(),
            date: Some("2012-08-01".to_string()),
            season: Some(2012),
            stadium: stadium.map(str::to_string),
            referee: Some("M. Dean".to_string()),
        }
    }

    fn player(id: i64, first: &str, last: &str, club: Option<i64>) -> PlayerRecord {
        PlayerRecord {
            player_id: id,
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            date_of_birth: Some("1990-01-01".to_string()),
            position: Some("Defender".to_string()),
            country_of_citizenship: Some("Wales".to_string()),
            current_club_id: club,
        }
    }

    #[test]
    fn test_away_stadiums_distinct_in_first_seen_order() {
        let clubs = [club(7, "arsenal", "Emirates")];
        let games = [
            away_game(1, Some(7), Some("A")),
            away_game(2, Some(7), Some("B")),
            away_game(3, Some(7), Some("A")),
        ];
        let docs = build(&clubs, &games, &[], &[]);

        assert_eq!(docs[0].away_stadium_name, vec!["A", "B"]);
    }

    #[test]
    fn test_games_with_missing_stadium_are_ignored() {
        let clubs = [club(7, "arsenal", "Emirates")];
        let games = [
            away_game(1, Some(7), None),
            away_game(2, Some(7), Some("B")),
        ];
        let docs = build(&clubs, &games, &[], &[]);

        assert_eq!(docs[0].away_stadium_name, vec!["B"]);
    }

    #[test]
    fn test_squad_groups_players_by_current_club() {
        let clubs = [club(7, "arsenal", "Emirates"), club(8, "chelsea", "Stamford Bridge")];
        let players = [
            player(1, "Aaron", "Ramsey", Some(7)),
            player(2, "Eden", "Hazard", Some(8)),
            player(3, "Theo", "Walcott", Some(7)),
        ];
        let docs = build(&clubs, &[], &players, &[]);

        let arsenal: Vec<_> = docs[0]
            .players
            .iter()
            .map(|p| p.surname.as_deref().unwrap())
            .collect();
        assert_eq!(arsenal, vec!["Ramsey", "Walcott"]);
        assert_eq!(docs[1].players.len(), 1);
    }

    #[test]
    fn test_player_without_club_is_embedded_nowhere() {
        let clubs = [club(7, "arsenal", "Emirates")];
        let players = [player(1, "Free", "Agent", None)];
        let docs = build(&clubs, &[], &players, &[]);

        assert!(docs[0].players.is_empty());
    }

    #[test]
    fn test_embedded_players_carry_valuation_history() {
        let clubs = [club(7, "arsenal", "Emirates")];
        let players = [player(1, "Aaron", "Ramsey", Some(7))];
        let valuations = [ValuationRecord {
            player_id: 1,
            market_value_in_eur: Some(5_000_000),
            date: Some("2013-01-01".to_string()),
        }];
        let docs = build(&clubs, &[], &players, &valuations);

        let embedded = &docs[0].players[0];
        assert_eq!(embedded.player_valuation.len(), 1);
        assert_eq!(embedded.player_valuation[0].market_value, Some(5_000_000));
    }

    #[test]
    fn test_club_without_away_games_or_squad_gets_empty_lists() {
        let clubs = [club(7, "arsenal", "Emirates")];
        let docs = build(&clubs, &[], &[], &[]);

        assert!(docs[0].away_stadium_name.is_empty());
        assert!(docs[0].players.is_empty());
        assert_eq!(docs[0].stadium_name.as_deref(), Some("Emirates"));
    }
}

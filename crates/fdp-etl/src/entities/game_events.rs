//! Game events collection builder
//!
//! Collapses the per-event rows into one ordered list of event-type codes
//! per game, attached to the game's referee.

use crate::documents::GameEventsDoc;
use crate::sources::{GameEventRecord, GameRecord};
use crate::table::{group_collect, left_join};

/// Build one document per game, with events in source order.
pub fn build(games: &[GameRecord], events: &[GameEventRecord]) -> Vec<GameEventsDoc> {
    let grouped = group_collect(events, |e| e.game_id, |e| e.event_type.clone());

    left_join(games, &grouped, |g| g.game_id, |grp| grp.key)
        .into_iter()
        .map(|(game, group)| GameEventsDoc {
            game_id: game.game_id,
            referee: game.referee.clone(),
            game_events: group.map(|g| g.items.clone()).unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(game_id: i64, referee: Option<&str>) -> GameRecord {
        GameRecord {
            game_id,
            home_club_id: Some(1),
            away_club_id: Some(2),
            home_club_goals: Some(1),
            competition_id: "GB1".to_string(),
            date: None,
            season: None,
            stadium: None,
            referee: referee.map(str::to_string),
        }
    }

    fn event(game_id: i64, event_type: &str) -> GameEventRecord {
        GameEventRecord {
            game_id,
            event_type: event_type.to_string(),
        }
    }

    #[test]
    fn test_events_keep_source_order_with_repeats() {
        let games = [game(42, Some("M. Dean"))];
        let events = [event(42, "goal"), event(42, "card"), event(42, "goal")];
        let docs = build(&games, &events);

        assert_eq!(docs[0].game_events, vec!["goal", "card", "goal"]);
        assert_eq!(docs[0].referee.as_deref(), Some("M. Dean"));
    }

    #[test]
    fn test_game_without_events_gets_empty_list() {
        let games = [game(1, Some("M. Dean")), game(2, None)];
        let events = [event(1, "goal")];
        let docs = build(&games, &events);

        assert_eq!(docs[0].game_events, vec!["goal"]);
        assert!(docs[1].game_events.is_empty());
    }

    #[test]
    fn test_events_for_unknown_games_are_not_invented() {
        let games = [game(1, None)];
        let events = [event(99, "goal")];
        let docs = build(&games, &events);

        assert_eq!(docs.len(), 1);
        assert!(docs[0].game_events.is_empty());
    }
}

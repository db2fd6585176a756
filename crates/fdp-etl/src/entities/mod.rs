//! Entity builders
//!
//! One module per target collection. Builders are pure functions from
//! loaded source tables to document vectors; all I/O stays in the
//! orchestrator, which is what makes the five loads independently
//! failure-isolated.

pub mod clubs;
pub mod competitions;
pub mod game_events;
pub mod game_summaries;
pub mod players;

use crate::documents::ValuationEntry;
use crate::sources::ValuationRecord;
use crate::table::{group_collect, Group};

/// Group valuations per player, in source row order.
///
/// Shared by the player and club builders; both embed the same valuation
/// history shape.
pub fn valuation_groups(valuations: &[ValuationRecord]) -> Vec<Group<i64, ValuationEntry>> {
    group_collect(
        valuations,
        |v| v.player_id,
        |v| ValuationEntry {
            market_value: v.market_value_in_eur,
            date: v.date.clone(),
        },
    )
}

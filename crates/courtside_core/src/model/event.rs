//! Event and score-entry records.
//!
//! # Responsibility
//! - Define [`SportEvent`] and its append-only [`ScoreEntry`] log.
//! - Provide derived totals/ranking accessors for display layers.
//!
//! # Invariants
//! - `team_ids` is duplicate-free; insertion order is display order.
//! - `entries` is append-only; undo pops the most recent entry only.
//! - Every entry's `team_id` is a member of `team_ids` while the team
//!   stays in the event (removal cascades, see the reducer).

use super::{new_id, now_epoch_ms, Id};
use serde::{Deserialize, Serialize};

/// One point award for one team inside one event.
///
/// Immutable once created; the only removal path is undo of the most
/// recent entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub id: Id,
    pub team_id: Id,
    pub points: i64,
    /// Creation instant, epoch milliseconds.
    pub timestamp: i64,
}

impl ScoreEntry {
    /// Creates an entry with a generated id, stamped now.
    pub fn new(team_id: Id, points: i64) -> Self {
        Self {
            id: new_id(),
            team_id,
            points,
            timestamp: now_epoch_ms(),
        }
    }
}

/// A dated occasion grouping teams and the scores recorded during it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SportEvent {
    pub id: Id,
    pub label: String,
    /// Calendar date as entered, e.g. `2024-01-01`.
    pub date: String,
    pub team_ids: Vec<Id>,
    pub entries: Vec<ScoreEntry>,
    /// Creation instant, epoch milliseconds.
    pub created_at: i64,
}

impl SportEvent {
    /// Creates an event with a caller-supplied id and no entries.
    pub fn new(id: Id, label: impl Into<String>, date: impl Into<String>, team_ids: Vec<Id>) -> Self {
        Self {
            id,
            label: label.into(),
            date: date.into(),
            team_ids,
            entries: Vec::new(),
            created_at: now_epoch_ms(),
        }
    }

    /// Sum of points awarded to one team in this event.
    pub fn total_for(&self, team_id: &str) -> i64 {
        self.entries
            .iter()
            .filter(|entry| entry.team_id == team_id)
            .map(|entry| entry.points)
            .sum()
    }

    /// Team ids ordered by descending event total.
    ///
    /// Ties keep insertion order (display order), so the sort is stable.
    /// This is the derived view ordering used when auto-sort is on; it
    /// never mutates the stored `team_ids`.
    pub fn ranked_team_ids(&self) -> Vec<Id> {
        let mut ranked = self.team_ids.clone();
        ranked.sort_by_key(|team_id| std::cmp::Reverse(self.total_for(team_id)));
        ranked
    }
}

//! Whole-application state document.
//!
//! # Responsibility
//! - Define [`AppState`], the single persisted document.
//! - Provide lookup helpers shared by the reducer and display layers.
//!
//! # Invariants
//! - `teams` and `events` are unique by id.
//! - `point_values` is non-empty, ascending and duplicate-free.
//! - Mutation happens only through the reducer; everything else reads.

use super::event::SportEvent;
use super::team::Team;
use serde::{Deserialize, Serialize};

/// The entire application state, constructed once at startup and
/// persisted after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub teams: Vec<Team>,
    pub events: Vec<SportEvent>,
    /// Quick-score increments offered by the UI, ascending and unique.
    pub point_values: Vec<i64>,
    /// Display-only ranking toggle; stored order is never rewritten.
    pub auto_sort: bool,
}

impl AppState {
    pub fn team(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == team_id)
    }

    pub fn event(&self, event_id: &str) -> Option<&SportEvent> {
        self.events.iter().find(|event| event.id == event_id)
    }

    /// Whether a team name is already taken, case-insensitively.
    ///
    /// `exclude_id` skips one team, so renaming a team to its own name
    /// (with different casing) is not treated as a collision.
    pub fn name_taken(&self, name: &str, exclude_id: Option<&str>) -> bool {
        self.teams.iter().any(|team| {
            exclude_id != Some(team.id.as_str()) && team.name.eq_ignore_ascii_case(name)
        })
    }
}

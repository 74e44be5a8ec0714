//! The closed set of state transitions.
//!
//! # Responsibility
//! - Name every mutation the store accepts, one variant per operation.
//!
//! # Invariants
//! - Adding a variant requires a matching reducer arm; the match in
//!   [`crate::reducer::reduce`] is exhaustive, so the compiler enforces
//!   this.
//! - Event ids for `CreateEvent` are caller-supplied so the caller can
//!   navigate to the event it just created; all other ids are generated
//!   inside the reducer's model constructors.

use crate::model::Id;

/// A single dispatched state transition.
///
/// Every variant is total: inapplicable input (unknown ids, duplicate
/// names) reduces to the unchanged state rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add a team; color comes from the preset roster or the default.
    /// No-op when the name is already taken (case-insensitive).
    AddTeam { name: String },
    /// Rename a team. No-op when another team already has the name.
    RenameTeam { team_id: Id, name: String },
    /// Set a team's display color. No-op when the team is unknown.
    SetTeamColor { team_id: Id, color: String },
    /// Create an event with no entries, prepended (newest first).
    CreateEvent {
        id: Id,
        label: String,
        date: String,
        team_ids: Vec<Id>,
    },
    /// Overwrite an event's label and date. No-op when unknown.
    EditEvent {
        event_id: Id,
        label: String,
        date: String,
    },
    /// Remove an event and everything recorded in it.
    DeleteEvent { event_id: Id },
    /// Append a team to an event's roster. No-op when the team is
    /// already in the event, unknown to the state, or the event is
    /// unknown.
    AddTeamToEvent { event_id: Id, team_id: Id },
    /// Detach a team from an event, cascading deletion of that team's
    /// entries in this event only.
    RemoveTeamFromEvent { event_id: Id, team_id: Id },
    /// Append a score entry (generated id, stamped now).
    AddScore {
        event_id: Id,
        team_id: Id,
        points: i64,
    },
    /// Pop the event's most recent entry. No-op when empty.
    UndoScore { event_id: Id },
    /// Insert a quick-score value, kept ascending. No-op on duplicates.
    AddPointValue { value: i64 },
    /// Remove a quick-score value. Refused when it would empty the set.
    RemovePointValue { value: i64 },
    /// Flip the display-only auto-sort ranking toggle.
    ToggleAutoSort,
}

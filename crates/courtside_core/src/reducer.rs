//! The single state transition function.
//!
//! # Responsibility
//! - Map `(state, action)` to the next state, enforcing every domain
//!   invariant in one place.
//!
//! # Invariants
//! - Never panics; inapplicable actions return the input unchanged.
//! - No I/O. The only non-determinism is id/timestamp generation inside
//!   the model constructors for `AddTeam`, `CreateEvent` and `AddScore`.
//! - Consumes and returns the state by value; callers observe a pure
//!   `state -> state` function.

use crate::action::Action;
use crate::model::event::{ScoreEntry, SportEvent};
use crate::model::state::AppState;
use crate::model::team::Team;

/// Applies one action to the state.
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::AddTeam { name } => {
            if state.name_taken(&name, None) {
                return state;
            }
            state.teams.push(Team::with_preset_color(name));
            state
        }

        Action::RenameTeam { team_id, name } => {
            if state.name_taken(&name, Some(&team_id)) {
                return state;
            }
            if let Some(team) = state.teams.iter_mut().find(|team| team.id == team_id) {
                team.name = name;
            }
            state
        }

        Action::SetTeamColor { team_id, color } => {
            if let Some(team) = state.teams.iter_mut().find(|team| team.id == team_id) {
                team.color = color;
            }
            state
        }

        Action::CreateEvent {
            id,
            label,
            date,
            team_ids,
        } => {
            // Newest first: the event list renders in creation order,
            // most recent on top.
            state
                .events
                .insert(0, SportEvent::new(id, label, date, team_ids));
            state
        }

        Action::EditEvent {
            event_id,
            label,
            date,
        } => {
            if let Some(event) = state.events.iter_mut().find(|event| event.id == event_id) {
                event.label = label;
                event.date = date;
            }
            state
        }

        Action::DeleteEvent { event_id } => {
            state.events.retain(|event| event.id != event_id);
            state
        }

        Action::AddTeamToEvent { event_id, team_id } => {
            if state.team(&team_id).is_none() {
                return state;
            }
            if let Some(event) = state.events.iter_mut().find(|event| event.id == event_id) {
                if !event.team_ids.contains(&team_id) {
                    event.team_ids.push(team_id);
                }
            }
            state
        }

        Action::RemoveTeamFromEvent { event_id, team_id } => {
            if let Some(event) = state.events.iter_mut().find(|event| event.id == event_id) {
                event.team_ids.retain(|id| *id != team_id);
                // Cascade: this event's entries for the team go with it.
                // The team itself and its entries elsewhere are untouched.
                event.entries.retain(|entry| entry.team_id != team_id);
            }
            state
        }

        Action::AddScore {
            event_id,
            team_id,
            points,
        } => {
            if let Some(event) = state.events.iter_mut().find(|event| event.id == event_id) {
                event.entries.push(ScoreEntry::new(team_id, points));
            }
            state
        }

        Action::UndoScore { event_id } => {
            if let Some(event) = state.events.iter_mut().find(|event| event.id == event_id) {
                event.entries.pop();
            }
            state
        }

        Action::AddPointValue { value } => {
            if !state.point_values.contains(&value) {
                state.point_values.push(value);
                state.point_values.sort_unstable();
            }
            state
        }

        Action::RemovePointValue { value } => {
            if state.point_values.len() > 1 {
                state.point_values.retain(|existing| *existing != value);
            }
            state
        }

        Action::ToggleAutoSort => {
            state.auto_sort = !state.auto_sort;
            state
        }
    }
}

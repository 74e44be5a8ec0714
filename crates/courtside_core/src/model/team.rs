//! Team record and the preset roster.
//!
//! # Responsibility
//! - Define the [`Team`] record and its creation path.
//! - Own the preset name→color roster shared by the reducer's `AddTeam`
//!   color pick and the codec's default/seed state.
//!
//! # Invariants
//! - Team names are unique case-insensitively across the whole state;
//!   enforcement lives in the reducer, the helper here only answers the
//!   lookup.
//! - `color` is always a `#rrggbb` hex string.

use super::{new_id, Id};
use serde::{Deserialize, Serialize};

/// Color assigned when a team name matches no preset.
pub const DEFAULT_TEAM_COLOR: &str = "#1a73e8";

/// Fixed roster used for the default state and the preset-seed migration.
///
/// Order matters: it is the display order of a freshly initialized state.
pub const PRESET_TEAMS: &[(&str, &str)] = &[
    ("Blue", "#1a73e8"),
    ("Red", "#d93025"),
    ("Pink", "#e91e8c"),
    ("Green", "#1e8e3e"),
    ("Yellow", "#f9ab00"),
    ("White", "#ffffff"),
];

/// A scoring team, shared across events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: Id,
    pub name: String,
    pub color: String,
}

impl Team {
    /// Creates a team with a generated id and an explicit color.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            color: color.into(),
        }
    }

    /// Creates a team with its preset color, or [`DEFAULT_TEAM_COLOR`]
    /// when the name matches no preset.
    pub fn with_preset_color(name: impl Into<String>) -> Self {
        let name = name.into();
        let color = preset_color(&name).unwrap_or(DEFAULT_TEAM_COLOR);
        Self::new(name, color)
    }
}

/// Resolves a team name to its preset color, case-insensitively.
pub fn preset_color(name: &str) -> Option<&'static str> {
    PRESET_TEAMS
        .iter()
        .find(|(preset, _)| preset.eq_ignore_ascii_case(name))
        .map(|(_, color)| *color)
}

#[cfg(test)]
mod tests {
    use super::{preset_color, Team, DEFAULT_TEAM_COLOR};

    #[test]
    fn preset_lookup_is_case_insensitive() {
        assert_eq!(preset_color("blue"), Some("#1a73e8"));
        assert_eq!(preset_color("YELLOW"), Some("#f9ab00"));
        assert_eq!(preset_color("Mauve"), None);
    }

    #[test]
    fn unknown_name_falls_back_to_default_color() {
        let team = Team::with_preset_color("Strikers");
        assert_eq!(team.color, DEFAULT_TEAM_COLOR);
        assert_eq!(team.name, "Strikers");
    }

    #[test]
    fn preset_name_keeps_preset_color() {
        let team = Team::with_preset_color("green");
        assert_eq!(team.color, "#1e8e3e");
    }
}

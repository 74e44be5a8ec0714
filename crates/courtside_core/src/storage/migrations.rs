//! Schema migration registry for the persisted state document.
//!
//! # Responsibility
//! - Register document migrations in strictly increasing version order.
//! - Bring any older persisted document up to [`CURRENT_VERSION`].
//!
//! # Invariants
//! - `version` values must remain monotonic; new migrations append only.
//! - Each transform is gated on `stored_version < version`, is total on
//!   arbitrary JSON, and is idempotent when replayed on migrated data.
//! - Transforms reshape the raw document; they never fabricate entries
//!   or score data.

use crate::model::new_id;
use crate::model::team::{DEFAULT_TEAM_COLOR, PRESET_TEAMS};
use serde_json::{json, Map, Value};

/// Latest document schema version written by this binary.
pub const CURRENT_VERSION: u32 = 5;

struct Migration {
    version: u32,
    apply: fn(&mut Map<String, Value>),
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 2,
        apply: backfill_team_colors,
    },
    Migration {
        version: 3,
        apply: seed_preset_teams,
    },
    Migration {
        version: 4,
        apply: backfill_auto_sort,
    },
    Migration {
        version: 5,
        apply: drop_preset_colors,
    },
];

/// Applies all migrations newer than `stored_version` to the raw
/// document, in ascending order.
pub fn apply_migrations(stored_version: u32, data: &mut Map<String, Value>) {
    for migration in MIGRATIONS {
        if stored_version < migration.version {
            (migration.apply)(data);
        }
    }
}

/// v1 -> v2: teams written before colors existed get the default color.
fn backfill_team_colors(data: &mut Map<String, Value>) {
    let Some(teams) = data.get_mut("teams").and_then(Value::as_array_mut) else {
        return;
    };
    for team in teams.iter_mut().filter_map(Value::as_object_mut) {
        let missing = match team.get("color") {
            None | Some(Value::Null) => true,
            Some(Value::String(color)) => color.is_empty(),
            Some(_) => true,
        };
        if missing {
            team.insert("color".to_string(), json!(DEFAULT_TEAM_COLOR));
        }
    }
}

/// v2 -> v3: inject preset teams whose names are not already present.
///
/// Name comparison is case-insensitive, so a user-renamed "BLUE" blocks
/// the preset "Blue" from being injected twice.
fn seed_preset_teams(data: &mut Map<String, Value>) {
    let Some(teams) = data.get_mut("teams").and_then(Value::as_array_mut) else {
        return;
    };
    let existing: Vec<String> = teams
        .iter()
        .filter_map(|team| team.get("name").and_then(Value::as_str))
        .map(str::to_ascii_lowercase)
        .collect();
    for (name, color) in PRESET_TEAMS {
        if !existing.iter().any(|taken| taken == &name.to_ascii_lowercase()) {
            teams.push(json!({ "id": new_id(), "name": name, "color": color }));
        }
    }
}

/// v3 -> v4: documents written before the auto-sort toggle default to off.
fn backfill_auto_sort(data: &mut Map<String, Value>) {
    if !data.contains_key("autoSort") {
        data.insert("autoSort".to_string(), json!(false));
    }
}

/// v4 -> v5: `presetColors` left the schema; stale copies are dropped.
fn drop_preset_colors(data: &mut Map<String, Value>) {
    data.remove("presetColors");
}

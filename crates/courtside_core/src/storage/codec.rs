//! (De)serialization of the persisted state document.
//!
//! # Responsibility
//! - Encode `AppState` with its schema version tag and write it through
//!   a storage backend.
//! - Decode stored documents, running migrations before handing the
//!   state to the store.
//!
//! # Invariants
//! - `load` never fails: absent, corrupt or unsupported documents all
//!   degrade to [`default_state`], logged but not surfaced.
//! - `save` writes `{"version": CURRENT_VERSION, "data": ...}` and
//!   nothing else under the storage key.

use super::migrations::{apply_migrations, CURRENT_VERSION};
use super::{StorageBackend, StorageError};
use crate::model::state::AppState;
use crate::model::team::{Team, PRESET_TEAMS};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// On-disk envelope around the state document.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedState {
    version: u32,
    data: Value,
}

/// Failure to encode, decode or transport the persisted document.
#[derive(Debug)]
pub enum CodecError {
    Storage(StorageError),
    Malformed(serde_json::Error),
    InvalidDocument(String),
    /// The document was written by a newer binary than this one.
    UnsupportedVersion { stored: u32, latest: u32 },
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Malformed(err) => write!(f, "malformed persisted document: {err}"),
            Self::InvalidDocument(message) => write!(f, "invalid persisted document: {message}"),
            Self::UnsupportedVersion { stored, latest } => write!(
                f,
                "persisted document version {stored} is newer than supported {latest}"
            ),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Malformed(err) => Some(err),
            Self::InvalidDocument(_) => None,
            Self::UnsupportedVersion { .. } => None,
        }
    }
}

impl From<StorageError> for CodecError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}

/// The state a fresh install starts from: the preset six-team roster,
/// quick-score values 1 and 3, auto-sort off, no events.
pub fn default_state() -> AppState {
    AppState {
        teams: PRESET_TEAMS
            .iter()
            .map(|(name, color)| Team::new(*name, *color))
            .collect(),
        events: Vec::new(),
        point_values: vec![1, 3],
        auto_sort: false,
    }
}

/// Loads the state from storage, falling back to [`default_state`].
///
/// Any failure mode — missing blob, unreadable JSON, wrong document
/// shape, newer schema version — degrades to the default state with a
/// structured warning; the caller never sees an error.
pub fn load(backend: &impl StorageBackend) -> AppState {
    match try_load(backend) {
        Ok(Some(state)) => {
            info!(
                "event=state_load module=codec status=ok source=storage teams={} events={}",
                state.teams.len(),
                state.events.len()
            );
            state
        }
        Ok(None) => {
            info!("event=state_load module=codec status=ok source=default");
            default_state()
        }
        Err(err) => {
            warn!(
                "event=state_load module=codec status=error error_code=state_load_failed fallback=default error={err}"
            );
            default_state()
        }
    }
}

/// Writes the state tagged with the current schema version.
///
/// Callers treat failure as best-effort; the store logs it and keeps
/// the in-memory state as the source of truth.
pub fn save(backend: &impl StorageBackend, state: &AppState) -> Result<(), CodecError> {
    let persisted = PersistedState {
        version: CURRENT_VERSION,
        data: serde_json::to_value(state)?,
    };
    let raw = serde_json::to_string(&persisted)?;
    backend.write(&raw)?;
    Ok(())
}

fn try_load(backend: &impl StorageBackend) -> Result<Option<AppState>, CodecError> {
    let Some(raw) = backend.read()? else {
        return Ok(None);
    };
    let persisted: PersistedState = serde_json::from_str(&raw)?;
    if persisted.version > CURRENT_VERSION {
        return Err(CodecError::UnsupportedVersion {
            stored: persisted.version,
            latest: CURRENT_VERSION,
        });
    }

    let mut data = match persisted.data {
        Value::Object(map) => map,
        other => {
            return Err(CodecError::InvalidDocument(format!(
                "expected an object under `data`, got {other}"
            )))
        }
    };
    apply_migrations(persisted.version, &mut data);
    let state = serde_json::from_value(Value::Object(data))?;
    Ok(Some(state))
}

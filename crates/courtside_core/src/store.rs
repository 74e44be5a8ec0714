//! Application store: the single writer over the application state.
//!
//! # Responsibility
//! - Own the current `AppState` for the process lifetime.
//! - Wire the reducer to the codec: load on open, save after every
//!   dispatch.
//!
//! # Invariants
//! - Exactly one writer path: `dispatch` -> reducer -> save. Consumers
//!   only read snapshots.
//! - Dispatch runs to completion synchronously; no partial application
//!   of an action is ever observable.
//! - A failed save is logged and swallowed; the in-memory state stays
//!   the source of truth until the next full reload.

use crate::action::Action;
use crate::model::state::AppState;
use crate::reducer::reduce;
use crate::storage::{codec, StorageBackend};
use log::{info, warn};

/// Holder of the current state, generic over the storage seam so tests
/// can run against in-memory backends.
pub struct AppStore<B: StorageBackend> {
    state: AppState,
    backend: B,
}

impl<B: StorageBackend> AppStore<B> {
    /// Opens the store, loading persisted state or the default.
    pub fn open(backend: B) -> Self {
        let state = codec::load(&backend);
        info!(
            "event=store_open module=store status=ok teams={} events={}",
            state.teams.len(),
            state.events.len()
        );
        Self { state, backend }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies one action and persists the result best-effort.
    pub fn dispatch(&mut self, action: Action) {
        self.state = reduce(self.state.clone(), action);
        if let Err(err) = codec::save(&self.backend, &self.state) {
            // Deliberately non-fatal: the session keeps running on the
            // in-memory state, only durability of this write is lost.
            warn!(
                "event=state_save module=store status=error error_code=state_save_failed error={err}"
            );
        }
    }
}

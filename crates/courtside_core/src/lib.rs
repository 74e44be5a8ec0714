//! Core domain logic for Courtside, a local-first points tracker.
//! This crate is the single source of truth for business invariants.

pub mod action;
pub mod logging;
pub mod model;
pub mod reducer;
pub mod storage;
pub mod store;

pub use action::Action;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{ScoreEntry, SportEvent};
pub use model::state::AppState;
pub use model::team::{preset_color, Team, DEFAULT_TEAM_COLOR, PRESET_TEAMS};
pub use model::{new_id, now_epoch_ms, Id};
pub use reducer::reduce;
pub use storage::codec::{default_state, CodecError};
pub use storage::migrations::CURRENT_VERSION;
pub use storage::{MemoryStorage, SqliteStorage, StorageBackend, StorageError};
pub use store::AppStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

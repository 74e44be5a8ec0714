//! Domain model for the points tracker.
//!
//! # Responsibility
//! - Define the canonical data structures held by the application store.
//! - Keep wire names stable so persisted documents stay readable across
//!   releases.
//!
//! # Invariants
//! - Every domain object is identified by a stable [`Id`], assigned at
//!   creation and never reused.
//! - Collection ordering is meaningful: `SportEvent::team_ids` is display
//!   order, `SportEvent::entries` is chronological append order.

pub mod event;
pub mod state;
pub mod team;

use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for teams, events and score entries.
///
/// Kept as a string alias rather than a `Uuid` newtype: generated ids are
/// UUID v4 strings, but event ids are caller-supplied and persisted blobs
/// written by earlier schema versions may carry arbitrary strings.
pub type Id = String;

/// Generates a fresh globally unique id.
pub fn new_id() -> Id {
    Uuid::new_v4().to_string()
}

/// Current instant as Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}

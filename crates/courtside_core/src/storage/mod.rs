//! Durable single-key storage for the persisted state document.
//!
//! # Responsibility
//! - Define the [`StorageBackend`] seam the codec writes through.
//! - Provide the SQLite-backed durable implementation and an in-memory
//!   one for tests.
//!
//! # Invariants
//! - The store holds exactly one document, under [`STORAGE_KEY`].
//! - Returned SQLite connections have the `kv` table bootstrapped before
//!   any read or write.

pub mod codec;
pub mod migrations;

use log::{error, info};
use rusqlite::{Connection, OptionalExtension};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::{Duration, Instant};

/// Fixed key the state document is stored under.
pub const STORAGE_KEY: &str = "sports-points-data";

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport-level storage failure.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Injectable durable key-value seam.
///
/// The codec is the only caller; consumers go through the store.
pub trait StorageBackend {
    /// Reads the stored document, `None` when nothing was ever written.
    fn read(&self) -> StorageResult<Option<String>>;
    /// Replaces the stored document.
    fn write(&self, raw: &str) -> StorageResult<()>;
}

/// SQLite-backed durable storage: one row in a `kv` table.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens (creating if needed) a storage file and bootstraps it.
    ///
    /// # Side effects
    /// - Emits `kv_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let started_at = Instant::now();
        info!("event=kv_open module=storage status=start mode=file");

        let conn = match Connection::open(path) {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=kv_open module=storage status=error mode=file duration_ms={} error_code=kv_open_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        match bootstrap_connection(&conn) {
            Ok(()) => {
                info!(
                    "event=kv_open module=storage status=ok mode=file duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(Self { conn })
            }
            Err(err) => {
                error!(
                    "event=kv_open module=storage status=error mode=file duration_ms={} error_code=kv_bootstrap_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Opens an in-memory storage, for ephemeral runs and tests.
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        bootstrap_connection(&conn)?;
        info!("event=kv_open module=storage status=ok mode=memory");
        Ok(Self { conn })
    }
}

fn bootstrap_connection(conn: &Connection) -> StorageResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );",
    )?;
    Ok(())
}

impl StorageBackend for SqliteStorage {
    fn read(&self) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1;",
                [STORAGE_KEY],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, raw: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            [STORAGE_KEY, raw],
        )?;
        Ok(())
    }
}

/// Volatile storage for tests; never fails.
#[derive(Default)]
pub struct MemoryStorage {
    cell: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds the stored document, for migration fixtures.
    pub fn seeded(raw: impl Into<String>) -> Self {
        Self {
            cell: RefCell::new(Some(raw.into())),
        }
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self) -> StorageResult<Option<String>> {
        Ok(self.cell.borrow().clone())
    }

    fn write(&self, raw: &str) -> StorageResult<()> {
        *self.cell.borrow_mut() = Some(raw.to_string());
        Ok(())
    }
}

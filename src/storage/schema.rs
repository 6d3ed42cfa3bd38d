//! Database schema and connection management

use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

use crate::Result;

/// Device-local store that lets a scoring session survive a crash or restart.
pub struct RecoveryStore {
    pub(crate) conn: Connection,
}

impl RecoveryStore {
    /// Open (or create) the store at `path` and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the data directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        debug!("Opening recovery store at {}", path.display());
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Store that lives only as long as the value, for tests and dry runs
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    pub(crate) fn initialize_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS recovery_state (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;
        Ok(())
    }
}

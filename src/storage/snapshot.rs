//! Snapshot persistence under one fixed key

use rusqlite::{params, OptionalExtension};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

use super::schema::RecoveryStore;
use crate::session::SessionSnapshot;
use crate::{Result, TeamId};

/// Only one in-progress session is tracked per device.
pub const SNAPSHOT_KEY: &str = "scorekeeper.session";

impl RecoveryStore {
    /// Overwrite the stored snapshot.
    pub fn save(&self, snapshot: &SessionSnapshot) -> Result<()> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let value = serde_json::to_string(snapshot)?;

        self.conn.execute(
            "INSERT OR REPLACE INTO recovery_state (key, value, updated_at)
             VALUES (?, ?, ?)",
            params![SNAPSHOT_KEY, value, now as i64],
        )?;
        Ok(())
    }

    /// Read the stored snapshot.
    ///
    /// A missing row, an unreadable row and an undecodable value all come back
    /// as `None`; a damaged snapshot must never block a fresh session.
    pub fn load(&self) -> Option<SessionSnapshot> {
        let raw: Option<String> = match self
            .conn
            .query_row(
                "SELECT value FROM recovery_state WHERE key = ?",
                params![SNAPSHOT_KEY],
                |row| row.get(0),
            )
            .optional()
        {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Could not read recovery snapshot: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw?) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!("Discarding unreadable recovery snapshot: {}", e);
                None
            }
        }
    }

    /// Purge the snapshot if it belongs to `team`.
    ///
    /// Another team's in-progress snapshot is left untouched. An undecodable
    /// value has no owner and is purged.
    pub fn clear_for(&self, team: &TeamId) -> Result<()> {
        match self.load() {
            Some(snapshot) if &snapshot.team_id != team => {
                debug!(
                    "Keeping recovery snapshot for team {} while clearing team {}",
                    snapshot.team_id, team
                );
                Ok(())
            }
            _ => self.clear(),
        }
    }

    pub fn clear(&self) -> Result<()> {
        self.conn.execute(
            "DELETE FROM recovery_state WHERE key = ?",
            params![SNAPSHOT_KEY],
        )?;
        Ok(())
    }
}

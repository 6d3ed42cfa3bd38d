//! In-memory scoring session for one team.
//!
//! `StatSession` owns the per-player counters and the running team score.
//! It performs no I/O: persistence is layered on top by
//! [`crate::scorekeeper::ScoreKeeper`]. Every operation is total. Edge cases
//! such as a missing selection, a counter already at zero or an unknown player
//! resolve to a no-op instead of an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::types::PlayerIdentity;
use crate::cli::types::stat::{Direction, StatKind};
use crate::{PlayerId, TeamId};

#[cfg(test)]
mod tests;

/// Counters for one player, indexed by [`StatKind::index`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatRecord {
    counts: [u32; StatKind::ALL.len()],
}

impl PlayerStatRecord {
    pub fn get(&self, kind: StatKind) -> u32 {
        self.counts[kind.index()]
    }

    /// Points this record contributes to the team score, saturating at
    /// `u32::MAX` for counters no game can reach.
    pub fn points(&self) -> u32 {
        StatKind::ALL.iter().fold(0u32, |acc, kind| {
            acc.saturating_add(self.get(*kind).saturating_mul(kind.weight()))
        })
    }

    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|c| *c == 0)
    }

    fn increment(&mut self, kind: StatKind) {
        let slot = &mut self.counts[kind.index()];
        *slot = slot.saturating_add(1);
    }

    /// Returns false when the counter is already at zero.
    fn decrement(&mut self, kind: StatKind) -> bool {
        let slot = &mut self.counts[kind.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }
}

/// Persisted copy of a session, written after every scoring change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub team_id: TeamId,
    pub records: BTreeMap<PlayerId, PlayerStatRecord>,
    pub total_score: u32,
}

#[derive(Debug, Clone)]
pub struct StatSession {
    team_id: TeamId,
    roster: Vec<PlayerIdentity>,
    records: BTreeMap<PlayerId, PlayerStatRecord>,
    active_player: Option<PlayerId>,
    total_score: u32,
}

impl StatSession {
    /// Zeroed session covering exactly `roster`.
    ///
    /// A player id listed more than once keeps only its first entry.
    pub fn new(team_id: TeamId, roster: Vec<PlayerIdentity>) -> Self {
        let mut records = BTreeMap::new();
        let mut unique = Vec::with_capacity(roster.len());
        for player in roster {
            if records.contains_key(&player.id) {
                warn!(
                    "Ignoring duplicate roster entry for player {} (#{})",
                    player.id, player.number
                );
                continue;
            }
            records.insert(player.id.clone(), PlayerStatRecord::default());
            unique.push(player);
        }
        let roster = unique;

        Self {
            team_id,
            roster,
            records,
            active_player: None,
            total_score: 0,
        }
    }

    /// Build a session for `team_id`, merging `snapshot` onto the roster.
    ///
    /// The snapshot is only used when it belongs to the same team. Players it
    /// mentions that are no longer on the roster are dropped, and new roster
    /// players start at zero. The score is derived from the merged records.
    pub fn restore(
        team_id: TeamId,
        roster: Vec<PlayerIdentity>,
        snapshot: Option<&SessionSnapshot>,
    ) -> Self {
        let mut session = Self::new(team_id, roster);

        let Some(snapshot) = snapshot else {
            return session;
        };
        if snapshot.team_id != session.team_id {
            debug!(
                "Ignoring snapshot for team {} while scoring team {}",
                snapshot.team_id, session.team_id
            );
            return session;
        }

        for (id, record) in session.records.iter_mut() {
            if let Some(saved) = snapshot.records.get(id) {
                *record = *saved;
            }
        }
        let dropped = snapshot
            .records
            .keys()
            .filter(|id| !session.records.contains_key(*id))
            .count();
        if dropped > 0 {
            debug!("Dropped {} snapshot records not on the current roster", dropped);
        }

        session.total_score = session.recomputed_score();
        session
    }

    pub fn team_id(&self) -> &TeamId {
        &self.team_id
    }

    pub fn roster(&self) -> &[PlayerIdentity] {
        &self.roster
    }

    pub fn records(&self) -> &BTreeMap<PlayerId, PlayerStatRecord> {
        &self.records
    }

    pub fn record(&self, id: &PlayerId) -> Option<&PlayerStatRecord> {
        self.records.get(id)
    }

    pub fn active_player(&self) -> Option<&PlayerId> {
        self.active_player.as_ref()
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Score derived from scratch; always equal to [`Self::total_score`].
    pub fn recomputed_score(&self) -> u32 {
        self.records
            .values()
            .map(PlayerStatRecord::points)
            .fold(0, u32::saturating_add)
    }

    pub fn player_points(&self, id: &PlayerId) -> u32 {
        self.records.get(id).map(PlayerStatRecord::points).unwrap_or(0)
    }

    /// Resolve a jersey number (with or without a leading `#`) to a roster id.
    pub fn player_by_number(&self, number: &str) -> Option<&PlayerId> {
        let number = number.trim().trim_start_matches('#');
        self.roster
            .iter()
            .find(|p| p.number == number)
            .map(|p| &p.id)
    }

    /// Select a player, or clear the selection.
    ///
    /// Selecting the active player again deselects it, and an id that is not
    /// on the roster leaves nothing selected.
    pub fn select_player(&mut self, player: Option<&PlayerId>) {
        self.active_player = match player {
            Some(id) if self.active_player.as_ref() == Some(id) => None,
            Some(id) if self.records.contains_key(id) => Some(id.clone()),
            Some(id) => {
                debug!("Ignoring selection of unknown player {}", id);
                None
            }
            None => None,
        };
    }

    /// Apply one stat event to the active player.
    ///
    /// Returns whether any counter changed. Without an active player, or when
    /// decrementing a counter already at zero, nothing happens.
    pub fn apply_stat(&mut self, kind: StatKind, direction: Direction) -> bool {
        let Some(active) = self.active_player.as_ref() else {
            return false;
        };
        let Some(record) = self.records.get_mut(active) else {
            return false;
        };

        let weight = kind.weight();
        match direction {
            Direction::Increment => {
                record.increment(kind);
                self.total_score = self.total_score.saturating_add(weight);
            }
            Direction::Decrement => {
                if !record.decrement(kind) {
                    return false;
                }
                self.total_score = self.total_score.saturating_sub(weight);
            }
        }
        true
    }

    /// Count of `kind` for the active player, or 0 with no selection.
    pub fn current_count(&self, kind: StatKind) -> u32 {
        self.active_player
            .as_ref()
            .and_then(|id| self.records.get(id))
            .map(|r| r.get(kind))
            .unwrap_or(0)
    }

    /// Zero every record, drop the selection and reset the score.
    pub fn clear(&mut self) {
        for record in self.records.values_mut() {
            *record = PlayerStatRecord::default();
        }
        self.active_player = None;
        self.total_score = 0;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            team_id: self.team_id.clone(),
            records: self.records.clone(),
            total_score: self.total_score,
        }
    }
}

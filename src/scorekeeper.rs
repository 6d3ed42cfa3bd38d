//! Scoring session bound to its recovery store.
//!
//! [`ScoreKeeper`] wraps a pure [`StatSession`] and performs the storage side
//! effects: every scoring change is followed by a snapshot write, and a clear
//! or a successful submission purges the snapshot. Store failures are logged
//! and never interrupt scoring.

use tracing::{info, warn};

use crate::api::http::submit_stats;
use crate::api::types::{PlayerIdentity, StatsSubmission};
use crate::cli::types::stat::{Direction, StatKind};
use crate::config::Config;
use crate::session::StatSession;
use crate::storage::RecoveryStore;
use crate::{LeagueError, PlayerId, Result, ScheduleId, TeamId, UserId};


pub struct ScoreKeeper {
    session: StatSession,
    store: RecoveryStore,
}

impl ScoreKeeper {
    /// Start scoring `team_id` against a freshly loaded roster, resuming a
    /// matching in-progress snapshot if the store holds one.
    ///
    /// An empty roster is refused: a session with no players cannot record
    /// anything.
    pub fn open(team_id: TeamId, roster: Vec<PlayerIdentity>, store: RecoveryStore) -> Result<Self> {
        if roster.is_empty() {
            return Err(LeagueError::EmptyRoster {
                team: team_id.to_string(),
            });
        }

        let snapshot = store.load();
        let session = StatSession::restore(team_id, roster, snapshot.as_ref());
        if snapshot
            .as_ref()
            .is_some_and(|s| &s.team_id == session.team_id())
        {
            info!(
                "Resumed in-progress session for team {} at {} points",
                session.team_id(),
                session.total_score()
            );
        }

        Ok(Self { session, store })
    }

    pub fn session(&self) -> &StatSession {
        &self.session
    }

    pub fn select_player(&mut self, player: Option<&PlayerId>) {
        self.session.select_player(player);
    }

    /// Apply one stat event to the active player and persist the result.
    pub fn apply_stat(&mut self, kind: StatKind, direction: Direction) -> bool {
        let changed = self.session.apply_stat(kind, direction);
        if changed {
            self.persist();
        }
        changed
    }

    pub fn current_count(&self, kind: StatKind) -> u32 {
        self.session.current_count(kind)
    }

    /// Reset the session and drop its snapshot. A snapshot left by another
    /// team stays in the store.
    pub fn clear(&mut self) {
        self.session.clear();
        if let Err(e) = self.store.clear_for(self.session.team_id()) {
            warn!("Failed to purge recovery snapshot: {}", e);
        }
    }

    /// Build the payload the stats endpoint expects for the current session.
    pub fn submission(&self, scorer: UserId, schedule: ScheduleId) -> StatsSubmission {
        StatsSubmission::from_session(&self.session, scorer, schedule)
    }

    /// Reconcile the session with the backend.
    ///
    /// On success the session is cleared; on any failure it is left intact so
    /// the submission can be retried.
    pub async fn submit(&mut self, config: &Config, schedule: ScheduleId) -> Result<()> {
        let scorer = config
            .user_id
            .clone()
            .ok_or_else(|| LeagueError::MissingCredential {
                env_var: crate::config::USER_ID_ENV_VAR.to_string(),
            })?;
        let submission = self.submission(scorer, schedule);

        submit_stats(config, &submission).await?;

        self.clear();
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.session.snapshot()) {
            warn!("Failed to write recovery snapshot: {}", e);
        }
    }
}

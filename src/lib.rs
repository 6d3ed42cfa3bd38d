//! Summer League Scorekeeper Library
//!
//! Live basketball scorekeeping for the Summer League backend: track
//! per-player stats during a game, keep a crash-safe local copy of the
//! session, and submit the final box score as the official record.
//!
//! ## Features
//!
//! - **Scoring Session**: Per-player counters with a running team score that
//!   never goes negative
//! - **Crash Recovery**: Every change is snapshotted to a local SQLite store
//!   and resumed when the same team is opened again
//! - **Roster Lookup**: Players are loaded from the backend before scoring starts
//! - **Reconciliation**: The finished session is submitted to `POST /stats`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use summer_league::{
//!     api::http::fetch_roster, config::load_config, scorekeeper::ScoreKeeper,
//!     storage::RecoveryStore, Direction, ScheduleId, StatKind, TeamId,
//! };
//!
//! # async fn example() -> summer_league::Result<()> {
//! let config = load_config()?;
//! let team = TeamId::new("team-42");
//! let roster = fetch_roster(&config, &team).await?;
//! let store = RecoveryStore::open(&config.recovery_db_path())?;
//!
//! let mut keeper = ScoreKeeper::open(team, roster.clone(), store)?;
//! keeper.select_player(Some(&roster[0].id));
//! keeper.apply_stat(StatKind::ThreePoints, Direction::Increment);
//!
//! keeper.submit(&config, ScheduleId::new("game-7")).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export SUMMER_LEAGUE_API_URL=https://league.example.com/api
//! export SUMMER_LEAGUE_TOKEN=...
//! export SUMMER_LEAGUE_USER_ID=...
//! export SUMMER_LEAGUE_TEAM_ID=...
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod scorekeeper;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use api::types::PlayerIdentity;
pub use cli::types::ids::{PlayerId, ScheduleId, TeamId, UserId};
pub use cli::types::stat::{Direction, StatKind};
pub use error::{LeagueError, Result};
pub use session::{PlayerStatRecord, SessionSnapshot, StatSession};

pub const TEAM_ID_ENV_VAR: &str = "SUMMER_LEAGUE_TEAM_ID";

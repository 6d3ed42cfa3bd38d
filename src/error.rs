//! Error types for the Summer League scorekeeper

use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Recovery store error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Team ID not provided and {env_var} environment variable not set")]
    MissingTeamId { env_var: String },

    #[error("No credential configured (set {env_var} or `token` in config.toml)")]
    MissingCredential { env_var: String },

    #[error("Roster unavailable: {reason}")]
    RosterUnavailable { reason: String },

    #[error("Roster for team {team} is empty")]
    EmptyRoster { team: String },

    #[error("Stats submission rejected with HTTP status {status}")]
    SubmitRejected { status: u16 },

    #[error("Unknown stat: {stat}")]
    UnknownStat { stat: String },

    #[error("Player not on roster: {player}")]
    UnknownPlayer { player: String },
}

impl LeagueError {
    /// Wrap any failure while loading the roster into `RosterUnavailable`.
    pub fn roster_unavailable(reason: impl std::fmt::Display) -> Self {
        LeagueError::RosterUnavailable {
            reason: reason.to_string(),
        }
    }
}

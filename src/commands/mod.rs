//! Command implementations for the Summer League scorekeeper

pub mod common;
pub mod live;
pub mod roster;
pub mod scoring;
pub mod submit;

use crate::{LeagueError, Result, TeamId, TEAM_ID_ENV_VAR};

/// Use the explicit team, falling back to `SUMMER_LEAGUE_TEAM_ID`.
pub fn resolve_team_id(team: Option<TeamId>) -> Result<TeamId> {
    team.or_else(|| {
        std::env::var(TEAM_ID_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .and_then(|s| s.parse::<TeamId>().ok())
    })
    .ok_or_else(|| LeagueError::MissingTeamId {
        env_var: TEAM_ID_ENV_VAR.to_string(),
    })
}

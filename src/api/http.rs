use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, warn};

use crate::api::types::{PlayerIdentity, StatsSubmission};
use crate::config::{Config, TOKEN_ENV_VAR};
use crate::core::auth_header_map;
use crate::{LeagueError, Result, TeamId};


const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

fn http_client() -> Result<Client> {
    Ok(Client::builder()
        .user_agent(concat!("summer-league/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT)
        .build()?)
}

/// Fetch the players eligible to be scored for `team`.
///
/// Every failure, including a missing credential, surfaces as
/// [`LeagueError::RosterUnavailable`] so callers never start a session on a
/// partial roster.
pub async fn fetch_roster(config: &Config, team: &TeamId) -> Result<Vec<PlayerIdentity>> {
    fetch_roster_with_base_url(&config.api_url, config.token.as_deref(), team).await
}

pub(crate) async fn fetch_roster_with_base_url(
    base_url: &str,
    token: Option<&str>,
    team: &TeamId,
) -> Result<Vec<PlayerIdentity>> {
    let Some(token) = token else {
        return Err(LeagueError::roster_unavailable(format!(
            "no credential configured (set {TOKEN_ENV_VAR})"
        )));
    };

    let url = format!("{}/teams/{}/players", base_url, team);
    debug!("Fetching roster from {}", url);

    let headers = auth_header_map(Some(token))?;
    let response = http_client()?
        .get(&url)
        .headers(headers)
        .send()
        .await
        .map_err(LeagueError::roster_unavailable)?;

    let status = response.status();
    if !status.is_success() {
        warn!("Roster request for team {} returned {}", team, status);
        return Err(LeagueError::roster_unavailable(format!("HTTP {}", status)));
    }

    let roster = response
        .json::<Vec<PlayerIdentity>>()
        .await
        .map_err(LeagueError::roster_unavailable)?;

    info!("Loaded {} players for team {}", roster.len(), team);
    Ok(roster)
}

/// Submit a finished session to `POST /stats`.
///
/// Only a 2xx response counts as success.
pub async fn submit_stats(config: &Config, submission: &StatsSubmission) -> Result<()> {
    submit_stats_with_base_url(&config.api_url, config.token.as_deref(), submission).await
}

pub(crate) async fn submit_stats_with_base_url(
    base_url: &str,
    token: Option<&str>,
    submission: &StatsSubmission,
) -> Result<()> {
    let Some(token) = token else {
        return Err(LeagueError::MissingCredential {
            env_var: TOKEN_ENV_VAR.to_string(),
        });
    };

    let url = format!("{}/stats", base_url);
    debug!(
        "Submitting {} player lines for team {} (schedule {})",
        submission.players.len(),
        submission.team,
        submission.schedule
    );

    let response = http_client()?
        .post(&url)
        .headers(auth_header_map(Some(token))?)
        .json(submission)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        warn!("Stats submission for team {} returned {}", submission.team, status);
        return Err(LeagueError::SubmitRejected {
            status: status.as_u16(),
        });
    }

    info!(
        "Stats for team {} (schedule {}) accepted",
        submission.team, submission.schedule
    );
    Ok(())
}

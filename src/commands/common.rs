//! Shared setup and rendering for the scoring commands.

use serde::Serialize;
use tracing::debug;

use crate::{
    api::{http::fetch_roster, types::PlayerStatLine},
    cli::types::stat::StatKind,
    config::{load_config, Config},
    scorekeeper::ScoreKeeper,
    session::StatSession,
    storage::RecoveryStore,
    PlayerId, Result, TeamId,
};

use super::resolve_team_id;

/// Resources every scoring command needs
pub struct CommandContext {
    pub config: Config,
    pub keeper: ScoreKeeper,
}

impl CommandContext {
    /// Load config, fetch the roster and resume the team's session.
    ///
    /// Fails before touching local state if the roster cannot be loaded.
    pub async fn open(team: Option<TeamId>) -> Result<Self> {
        let team_id = resolve_team_id(team)?;
        let config = load_config()?;

        let roster = fetch_roster(&config, &team_id).await?;
        debug!("Roster for team {} has {} players", team_id, roster.len());

        let store = RecoveryStore::open(&config.recovery_db_path())?;
        let keeper = ScoreKeeper::open(team_id, roster, store)?;

        Ok(Self { config, keeper })
    }
}

/// Resolve a `--player` argument: `#23` is a jersey number, anything else is
/// tried as an id first and then as a bare jersey number.
pub fn resolve_player(session: &StatSession, arg: &str) -> Option<PlayerId> {
    let arg = arg.trim();
    if arg.starts_with('#') {
        return session.player_by_number(arg).cloned();
    }

    let as_id = PlayerId::new(arg);
    if session.record(&as_id).is_some() {
        return Some(as_id);
    }
    session.player_by_number(arg).cloned()
}

#[derive(Debug, Serialize)]
pub struct BoxScoreRow {
    pub number: String,
    pub points: u32,
    pub active: bool,
    #[serde(flatten)]
    pub line: PlayerStatLine,
}

/// JSON view of a session
#[derive(Debug, Serialize)]
pub struct BoxScore {
    pub team: TeamId,
    pub total_score: u32,
    pub players: Vec<BoxScoreRow>,
}

impl BoxScore {
    pub fn from_session(session: &StatSession) -> Self {
        let players = session
            .roster()
            .iter()
            .map(|p| BoxScoreRow {
                number: p.number.clone(),
                points: session.player_points(&p.id),
                active: session.active_player() == Some(&p.id),
                line: PlayerStatLine::from_record(
                    p.id.clone(),
                    &session.record(&p.id).copied().unwrap_or_default(),
                ),
            })
            .collect();

        Self {
            team: session.team_id().clone(),
            total_score: session.total_score(),
            players,
        }
    }
}

/// Plain-text box score, one row per roster player.
pub fn render_box_score(session: &StatSession) -> String {
    let mut out = format!(
        "Team {}  total {}\n",
        session.team_id(),
        session.total_score()
    );

    out.push_str("   #    ");
    for kind in StatKind::ALL {
        out.push_str(&format!("{:>4}", kind.abbreviation()));
    }
    out.push_str("   PTS  PLAYER\n");

    for player in session.roster() {
        let marker = if session.active_player() == Some(&player.id) {
            '*'
        } else {
            ' '
        };
        out.push_str(&format!(" {} {:<5}", marker, player.number));
        let record = session.record(&player.id).copied().unwrap_or_default();
        for kind in StatKind::ALL {
            out.push_str(&format!("{:>4}", record.get(kind)));
        }
        out.push_str(&format!(
            "  {:>4}  {}\n",
            session.player_points(&player.id),
            player.id
        ));
    }

    out
}

/// One-line summary of the active player's counters.
pub fn render_active_line(session: &StatSession) -> String {
    let Some(active) = session.active_player() else {
        return format!("No player selected | Team {}", session.total_score());
    };
    let number = session
        .roster()
        .iter()
        .find(|p| &p.id == active)
        .map(|p| p.number.as_str())
        .unwrap_or("?");

    let counts: Vec<String> = StatKind::ALL
        .iter()
        .map(|k| format!("{}={}", k.abbreviation(), session.current_count(*k)))
        .collect();

    format!(
        "#{} {} | Team {}",
        number,
        counts.join(" "),
        session.total_score()
    )
}

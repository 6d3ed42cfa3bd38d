//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::{
    ids::{ScheduleId, TeamId},
    stat::StatKind,
};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the players eligible to be scored for a team.
    Roster {
        /// Team ID (or set `SUMMER_LEAGUE_TEAM_ID` env var).
        #[clap(long, short)]
        team: Option<TeamId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Record one stat event for a player.
    ///
    /// Resumes the in-progress session for the team, applies the event and
    /// saves the session locally.
    Stat {
        /// Team ID (or set `SUMMER_LEAGUE_TEAM_ID` env var).
        #[clap(long, short)]
        team: Option<TeamId>,

        /// Player ID, or jersey number prefixed with `#` (e.g. `#23`).
        #[clap(long, short)]
        player: String,

        /// Stat to record: 3pt, 2pt, ft, ast, reb, to, blk, stl, pf.
        #[clap(long, short)]
        stat: StatKind,

        /// Remove one occurrence instead of adding one.
        #[clap(long)]
        undo: bool,
    },

    /// Show the in-progress box score for a team.
    Show {
        /// Team ID (or set `SUMMER_LEAGUE_TEAM_ID` env var).
        #[clap(long, short)]
        team: Option<TeamId>,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// Discard the in-progress session and start over.
    Clear {
        /// Team ID (or set `SUMMER_LEAGUE_TEAM_ID` env var).
        #[clap(long, short)]
        team: Option<TeamId>,
    },

    /// Submit the in-progress session as the official game record.
    Submit {
        /// Team ID (or set `SUMMER_LEAGUE_TEAM_ID` env var).
        #[clap(long, short)]
        team: Option<TeamId>,

        /// Schedule (game) ID the stats belong to.
        #[clap(long)]
        schedule: ScheduleId,
    },

    /// Score a game interactively from the terminal.
    ///
    /// Reads commands from stdin: `p #23` selects a player (again to
    /// deselect), `+ 3pt` / `- 3pt` record or undo a stat, `show`, `clear`,
    /// `save` and `quit`.
    Live {
        /// Team ID (or set `SUMMER_LEAGUE_TEAM_ID` env var).
        #[clap(long, short)]
        team: Option<TeamId>,

        /// Schedule (game) ID used when saving.
        #[clap(long)]
        schedule: ScheduleId,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "summer-league", about = "Summer League scorekeeper")]
pub struct SummerLeague {
    #[clap(subcommand)]
    pub command: Commands,
}

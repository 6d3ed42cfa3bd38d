//! Interactive scoring loop.
//!
//! Each input line is one command. Scoring never stops on bad input: an
//! unrecognised line prints a hint and the loop carries on.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::info;

use crate::{
    cli::types::stat::{Direction, StatKind},
    config::Config,
    scorekeeper::ScoreKeeper,
    PlayerId, Result, ScheduleId, TeamId,
};

use super::common::{render_active_line, render_box_score, resolve_player, CommandContext};

const HELP: &str = "commands: p <#num|id> | + <stat> | - <stat> | show | clear | save | quit
stats: 3pt 2pt ft ast reb to blk stl pf";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveCommand {
    Select(String),
    Record(StatKind, Direction),
    Show,
    Clear,
    Save,
    Quit,
    Help,
}

impl LiveCommand {
    /// Parse one input line. Blank or unrecognised lines give `None`, as do
    /// lines with trailing tokens after the command's argument.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let mut parts = line.split_whitespace();
        let head = parts.next()?;
        let arg = parts.next();
        if parts.next().is_some() {
            return None;
        }

        match (head.to_lowercase().as_str(), arg) {
            ("p" | "player", Some(player)) => Some(LiveCommand::Select(player.to_string())),
            ("+", Some(stat)) => stat
                .parse()
                .ok()
                .map(|k| LiveCommand::Record(k, Direction::Increment)),
            ("-", Some(stat)) => stat
                .parse()
                .ok()
                .map(|k| LiveCommand::Record(k, Direction::Decrement)),
            ("show", None) => Some(LiveCommand::Show),
            ("clear", None) => Some(LiveCommand::Clear),
            ("save", None) => Some(LiveCommand::Save),
            ("quit" | "q" | "exit", None) => Some(LiveCommand::Quit),
            ("help" | "?", None) => Some(LiveCommand::Help),
            // Compact form: `+3pt`, `-ast`
            (compact, None) => {
                let (direction, stat) = if let Some(stat) = compact.strip_prefix('+') {
                    (Direction::Increment, stat)
                } else {
                    (Direction::Decrement, compact.strip_prefix('-')?)
                };
                if stat.is_empty() {
                    return None;
                }
                stat.parse().ok().map(|k| LiveCommand::Record(k, direction))
            }
            _ => None,
        }
    }
}

/// Handle the live command against stdin/stdout
pub async fn handle_live(team: Option<TeamId>, schedule: ScheduleId) -> Result<()> {
    let mut ctx = CommandContext::open(team).await?;
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    run_live(&mut ctx.keeper, &ctx.config, &schedule, stdin, &mut stdout).await
}

/// Drive a scoring session from `input` until `quit` or end of input.
pub async fn run_live<R, W>(
    keeper: &mut ScoreKeeper,
    config: &Config,
    schedule: &ScheduleId,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}", render_box_score(keeper.session()))?;
    writeln!(out, "{}", HELP)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = LiveCommand::parse(&line) else {
            writeln!(out, "? unrecognised `{}` (type `help`)", line.trim())?;
            continue;
        };

        match command {
            LiveCommand::Select(arg) => {
                // Unknown players fall through to a no-selection state.
                let id = resolve_player(keeper.session(), &arg)
                    .unwrap_or_else(|| PlayerId::new(arg.as_str()));
                keeper.select_player(Some(&id));
                writeln!(out, "{}", render_active_line(keeper.session()))?;
            }
            LiveCommand::Record(kind, direction) => {
                keeper.apply_stat(kind, direction);
                writeln!(out, "{}", render_active_line(keeper.session()))?;
            }
            LiveCommand::Show => write!(out, "{}", render_box_score(keeper.session()))?,
            LiveCommand::Clear => {
                keeper.clear();
                writeln!(out, "session cleared")?;
            }
            LiveCommand::Save => match keeper.submit(config, schedule.clone()).await {
                Ok(()) => {
                    info!("Live session for schedule {} saved", schedule);
                    writeln!(out, "saved; session cleared")?;
                }
                Err(e) => writeln!(out, "save failed: {}; session kept, try `save` again", e)?,
            },
            LiveCommand::Quit => break,
            LiveCommand::Help => writeln!(out, "{}", HELP)?,
        }
    }

    Ok(())
}

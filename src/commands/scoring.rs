//! Single-event scoring commands: stat, show and clear.

use crate::{
    cli::types::stat::{Direction, StatKind},
    LeagueError, Result, TeamId,
};

use super::common::{render_active_line, render_box_score, resolve_player, BoxScore, CommandContext};

/// Handle the stat command
pub async fn handle_stat(
    team: Option<TeamId>,
    player: &str,
    stat: StatKind,
    undo: bool,
) -> Result<()> {
    let mut ctx = CommandContext::open(team).await?;

    let player_id = resolve_player(ctx.keeper.session(), player).ok_or_else(|| {
        LeagueError::UnknownPlayer {
            player: player.to_string(),
        }
    })?;

    let direction = if undo {
        Direction::Decrement
    } else {
        Direction::Increment
    };

    ctx.keeper.select_player(Some(&player_id));
    if !ctx.keeper.apply_stat(stat, direction) {
        println!("{} already at 0 for {}; nothing to undo", stat, player);
    }

    println!("{}", render_active_line(ctx.keeper.session()));
    Ok(())
}

/// Handle the show command
pub async fn handle_show(team: Option<TeamId>, as_json: bool) -> Result<()> {
    let ctx = CommandContext::open(team).await?;
    let session = ctx.keeper.session();

    if as_json {
        let box_score = BoxScore::from_session(session);
        println!("{}", serde_json::to_string_pretty(&box_score)?); // tarpaulin::skip
    } else {
        print!("{}", render_box_score(session)); // tarpaulin::skip
    }

    Ok(())
}

/// Handle the clear command
pub async fn handle_clear(team: Option<TeamId>) -> Result<()> {
    let mut ctx = CommandContext::open(team).await?;
    let discarded = ctx.keeper.session().total_score();

    ctx.keeper.clear();

    println!(
        "✓ Session for team {} cleared ({} points discarded)",
        ctx.keeper.session().team_id(),
        discarded
    );
    Ok(())
}

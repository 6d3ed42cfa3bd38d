//! Submit command implementation

use crate::{Result, ScheduleId, TeamId};

use super::common::CommandContext;

/// Handle the submit command
///
/// A failed submission leaves the local session untouched, so the command can
/// simply be run again.
pub async fn handle_submit(team: Option<TeamId>, schedule: ScheduleId) -> Result<()> {
    let mut ctx = CommandContext::open(team).await?;
    let total = ctx.keeper.session().total_score();

    println!(
        "Submitting team {} ({} points) for schedule {}...",
        ctx.keeper.session().team_id(),
        total,
        schedule
    );

    if let Err(e) = ctx.keeper.submit(&ctx.config, schedule).await {
        println!("⚠ Submission failed; local session kept for retry");
        return Err(e);
    }

    println!("✓ Stats saved and local session cleared");
    Ok(())
}

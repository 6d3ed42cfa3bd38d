//! Roster command implementation

use crate::{api::http::fetch_roster, config::load_config, Result, TeamId};

use super::resolve_team_id;

/// Handle the roster command
pub async fn handle_roster(team: Option<TeamId>, as_json: bool) -> Result<()> {
    let team_id = resolve_team_id(team)?;
    let config = load_config()?;

    if !as_json {
        println!("Fetching roster for team {}...", team_id);
    }
    let roster = fetch_roster(&config, &team_id).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&roster)?); // tarpaulin::skip
    } else {
        println!("✓ {} players", roster.len());
        for player in &roster {
            println!("  #{:<4} {}", player.number, player.id); // tarpaulin::skip
        }
    }

    Ok(())
}

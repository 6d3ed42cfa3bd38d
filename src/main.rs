//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use summer_league::{
    cli::{Commands, SummerLeague},
    commands::{
        live::handle_live,
        roster::handle_roster,
        scoring::{handle_clear, handle_show, handle_stat},
        submit::handle_submit,
    },
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let app = SummerLeague::parse();

    match app.command {
        Commands::Roster { team, json } => handle_roster(team, json)
            .await
            .context("failed to load roster")?,

        Commands::Stat {
            team,
            player,
            stat,
            undo,
        } => handle_stat(team, &player, stat, undo)
            .await
            .context("failed to record stat")?,

        Commands::Show { team, json } => handle_show(team, json)
            .await
            .context("failed to show session")?,

        Commands::Clear { team } => handle_clear(team)
            .await
            .context("failed to clear session")?,

        Commands::Submit { team, schedule } => handle_submit(team, schedule)
            .await
            .context("failed to submit stats")?,

        Commands::Live { team, schedule } => handle_live(team, schedule)
            .await
            .context("live scoring stopped")?,
    }

    Ok(())
}

/// Diagnostics go to stderr so stdout stays clean for `--json` output.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("summer_league=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}

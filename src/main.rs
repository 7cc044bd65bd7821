// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_update, runs_teams_export};
use nhl_stats::config::Config;
use nhl_stats::error::AppError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Pure computation, no config or network needed
    if let Some(date) = args.split {
        return commands::handle_split_command(date);
    }

    if args.list_config {
        return Config::display().await;
    }

    if is_config_update(&args) {
        return commands::handle_config_update_command(&args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    let (log_file_path, _guard) = logging::setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if let Some(tri_code) = &args.seasons {
        commands::handle_seasons_command(&config, tri_code).await?;
    }

    if let Some(team) = &args.roster {
        let path = commands::handle_roster_command(&config, team).await?;
        println!("Wrote roster for {team} to {}", path.display());
    }

    if let Some(game_id) = args.game_story {
        let path = commands::handle_game_story_command(&config, game_id).await?;
        println!("Wrote game story {game_id} to {}", path.display());
    }

    if runs_teams_export(&args) {
        commands::handle_teams_command(&args, &config).await?;
    }

    Ok(())
}

use crate::cli::Args;
use nhl_stats::config::Config;
use nhl_stats::constants::DEFAULT_RAW_DIR;
use nhl_stats::data_fetcher::api::create_http_client;
use nhl_stats::data_fetcher::{
    RosterApi, TeamsApi, TeamsCache, TeamsSource, split_season_list, split_season_years,
};
use nhl_stats::error::AppError;
use nhl_stats::export::{write_csv, write_raw_json};
use reqwest::Client;
use std::path::{Path, PathBuf};
use tracing::info;

fn build_client(config: &Config) -> Result<Client, AppError> {
    create_http_client(config.http_timeout_seconds)
        .map_err(|e| AppError::config_error(format!("Failed to build HTTP client: {e}")))
}

/// Handles configuration update commands.
///
/// Starts from the stored config file (defaults when absent, without env
/// overrides) and saves the changed values. A malformed file is an error.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load_stored().await?;

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = new_domain.clone();
    }

    if let Some(new_domain) = &args.new_stats_api_domain {
        config.stats_api_domain = new_domain.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}

/// Handles `--split`: prints the start and end years of a season id.
pub fn handle_split_command(date: i64) -> Result<(), AppError> {
    let season = split_season_years(date)?;
    println!("{}", season.start);
    println!("{}", season.end);
    Ok(())
}

/// Handles `--seasons`: prints every season a team has played.
pub async fn handle_seasons_command(config: &Config, tri_code: &str) -> Result<(), AppError> {
    let api = TeamsApi::from_config(build_client(config)?, config);
    let seasons = api.fetch_team_seasons(tri_code).await?;

    for (id, range) in seasons.iter().zip(split_season_list(&seasons)?) {
        println!("{id}  {range}");
    }
    Ok(())
}

/// Handles `--roster`: saves the current roster of a team.
pub async fn handle_roster_command(config: &Config, team: &str) -> Result<PathBuf, AppError> {
    let api = RosterApi::from_config(build_client(config)?, config);
    let roster = api.fetch_current_roster(team).await?;

    let path = Path::new(DEFAULT_RAW_DIR).join(format!("roster_{team}.json"));
    write_raw_json(&roster, &path)?;
    Ok(path)
}

/// Handles `--game-story`: saves the story of one game.
pub async fn handle_game_story_command(config: &Config, game_id: i64) -> Result<PathBuf, AppError> {
    let api = RosterApi::from_config(build_client(config)?, config);
    let story = api.fetch_game_story(game_id).await?;

    let path = Path::new(DEFAULT_RAW_DIR).join(format!("game_story_{game_id}.json"));
    write_raw_json(&story, &path)?;
    Ok(path)
}

/// Default command: fetches the team list once and writes the CSV, plus the
/// raw snapshot when `--raw` was given.
pub async fn handle_teams_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let api = TeamsApi::from_config(build_client(config)?, config);
    let mut teams = TeamsCache::new(api);

    let table = if args.with_seasons {
        teams.table_with_seasons().await?
    } else {
        teams.table().await?
    };
    write_csv(&table, &args.output)?;
    println!("Wrote {} teams to {}", table.len(), args.output.display());

    if let Some(raw_path) = &args.raw {
        let response = teams.get(false).await?;
        write_raw_json(response, raw_path)?;
        println!("Wrote raw team list to {}", raw_path.display());
    }

    info!("Teams export finished");
    Ok(())
}

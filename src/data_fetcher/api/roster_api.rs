//! Roster and game story lookups on the web API

use reqwest::Client;
use serde_json::Value;
use tracing::info;

use super::fetch_utils::{fetch_json, require_keys};
use super::urls::{build_game_story_url, build_roster_url};
use crate::config::Config;
use crate::constants::required_keys;
use crate::error::AppError;

/// Client for per-team rosters and per-game stories.
///
/// Both payloads are large and loosely structured, so they are returned as
/// raw JSON and only persisted, never projected.
#[derive(Debug, Clone)]
pub struct RosterApi {
    client: Client,
    api_domain: String,
}

impl RosterApi {
    pub fn new(client: Client, api_domain: impl Into<String>) -> Self {
        Self {
            client,
            api_domain: api_domain.into(),
        }
    }

    pub fn from_config(client: Client, config: &Config) -> Self {
        Self::new(client, &config.api_domain)
    }

    /// Fetches the current roster of `team` (a triCode).
    ///
    /// # Errors
    /// `AppError::Validation` when any of `forwards`, `defensemen` or
    /// `goalies` is missing, besides the usual fetch failures.
    pub async fn fetch_current_roster(&self, team: &str) -> Result<Value, AppError> {
        let url = build_roster_url(&self.api_domain, team);
        info!("Pulling roster for team {team}");

        let body = fetch_json(&self.client, &url).await?;
        require_keys(&body, required_keys::ROSTER, &url)?;

        info!("Data pulled for team {team}");
        Ok(body)
    }

    /// Fetches the game story of `game_id` as-is.
    pub async fn fetch_game_story(&self, game_id: i64) -> Result<Value, AppError> {
        let url = build_game_story_url(&self.api_domain, game_id);
        fetch_json(&self.client, &url).await
    }
}

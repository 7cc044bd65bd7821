//! Team list and team season lookups

use reqwest::Client;
use tracing::{debug, info};

use super::fetch_utils::{decode, fetch_json, require_keys};
use super::urls::{build_team_seasons_url, build_teams_url};
use crate::config::Config;
use crate::constants::required_keys;
use crate::data_fetcher::models::TeamsResponse;
use crate::error::AppError;

/// Anything that can answer the two team queries.
///
/// `TeamsApi` talks to the network; tests substitute an in-memory source.
#[allow(async_fn_in_trait)]
pub trait TeamsSource {
    /// Fetches the full team list. The envelope must carry `data`.
    async fn fetch_teams(&self) -> Result<TeamsResponse, AppError>;

    /// Fetches the season ids (`YYYYYYYY`) a team has played, as returned.
    async fn fetch_team_seasons(&self, tri_code: &str) -> Result<Vec<i64>, AppError>;
}

/// HTTP implementation of [`TeamsSource`].
#[derive(Debug, Clone)]
pub struct TeamsApi {
    client: Client,
    stats_api_domain: String,
    api_domain: String,
}

impl TeamsApi {
    /// Creates a client against explicit base URLs.
    ///
    /// # Arguments
    /// * `stats_api_domain` - base of the team list endpoint
    /// * `api_domain` - base of the team season endpoint
    pub fn new(
        client: Client,
        stats_api_domain: impl Into<String>,
        api_domain: impl Into<String>,
    ) -> Self {
        Self {
            client,
            stats_api_domain: stats_api_domain.into(),
            api_domain: api_domain.into(),
        }
    }

    pub fn from_config(client: Client, config: &Config) -> Self {
        Self::new(client, &config.stats_api_domain, &config.api_domain)
    }
}

impl TeamsSource for TeamsApi {
    async fn fetch_teams(&self) -> Result<TeamsResponse, AppError> {
        let url = build_teams_url(&self.stats_api_domain);
        let body = fetch_json(&self.client, &url).await?;
        require_keys(&body, required_keys::TEAMS, &url)?;

        let response: TeamsResponse = decode(body, &url)?;
        info!("Fetched {} teams", response.len());
        Ok(response)
    }

    async fn fetch_team_seasons(&self, tri_code: &str) -> Result<Vec<i64>, AppError> {
        let url = build_team_seasons_url(&self.api_domain, tri_code);
        let body = fetch_json(&self.client, &url).await?;

        let seasons: Vec<i64> = decode(body, &url)?;
        debug!("Team {} has played {} seasons", tri_code, seasons.len());
        Ok(seasons)
    }
}

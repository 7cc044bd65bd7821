//! Single-slot cache in front of a [`TeamsSource`]

use tracing::{debug, info};

use crate::data_fetcher::api::TeamsSource;
use crate::data_fetcher::models::TeamsResponse;
use crate::error::AppError;
use crate::export::{TeamsTable, to_table};

/// Holds the most recent team list until explicitly refreshed.
///
/// The slot is replaced whole on every fetch and is never partially
/// updated. Mutation needs `&mut self`, so sharing a cache across tasks
/// requires an external lock around it.
#[derive(Debug)]
pub struct TeamsCache<S> {
    source: S,
    teams: Option<TeamsResponse>,
}

impl<S: TeamsSource> TeamsCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            teams: None,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The cached response, without fetching.
    pub fn cached(&self) -> Option<&TeamsResponse> {
        self.teams.as_ref()
    }

    /// Returns the cached team list, fetching it when the slot is empty or
    /// `force_refresh` is set. A failed refresh leaves the previous value.
    pub async fn get(&mut self, force_refresh: bool) -> Result<&TeamsResponse, AppError> {
        let teams = match self.teams.take() {
            Some(teams) if !force_refresh => {
                debug!("Using cached team list ({} teams)", teams.len());
                teams
            }
            previous => {
                info!("Fetching team list (force_refresh={force_refresh})");
                match self.source.fetch_teams().await {
                    Ok(fresh) => fresh,
                    Err(e) => {
                        self.teams = previous;
                        return Err(e);
                    }
                }
            }
        };

        Ok(self.teams.insert(teams))
    }

    /// Projects the cached team list into a table.
    pub async fn table(&mut self) -> Result<TeamsTable, AppError> {
        let teams = self.get(false).await?;
        to_table(teams)
    }

    /// Projects the team list and attaches every team's season ids.
    ///
    /// Season lookups run one at a time in table order; the first failure
    /// aborts the whole enrichment.
    pub async fn table_with_seasons(&mut self) -> Result<TeamsTable, AppError> {
        let mut table = self.table().await?;

        for row in table.rows_mut() {
            let seasons = self.source.fetch_team_seasons(&row.team.tri_code).await?;
            row.seasons = Some(seasons);
        }

        info!("Attached seasons to {} teams", table.len());
        Ok(table)
    }
}

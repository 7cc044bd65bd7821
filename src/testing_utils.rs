//! Fixtures and a fake teams source for tests

use crate::data_fetcher::api::TeamsSource;
use crate::data_fetcher::models::TeamsResponse;
use crate::error::AppError;
use serde_json::{Map, Value, json};
use std::cell::Cell;
use std::collections::HashMap;

/// Test utilities for building API payloads
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// A team object as the stats API sends it
    pub fn team_json(id: i64, tri_code: &str, full_name: &str) -> Value {
        json!({
            "id": id,
            "franchiseId": id + 100,
            "fullName": full_name,
            "leagueId": 133,
            "rawTricode": tri_code,
            "triCode": tri_code,
        })
    }

    /// Four well-formed teams
    pub fn four_teams() -> Vec<Value> {
        vec![
            Self::team_json(1, "NJD", "New Jersey Devils"),
            Self::team_json(2, "NYI", "New York Islanders"),
            Self::team_json(3, "NYR", "New York Rangers"),
            Self::team_json(4, "PHI", "Philadelphia Flyers"),
        ]
    }

    /// The team list envelope, with `total` set like the live API does
    pub fn teams_body(teams: Vec<Value>) -> Value {
        json!({ "data": teams.clone(), "total": teams.len() })
    }

    pub fn teams_response(teams: Vec<Value>) -> TeamsResponse {
        let mut extra = Map::new();
        extra.insert("total".to_string(), json!(teams.len()));
        TeamsResponse { data: teams, extra }
    }

    /// A roster body carrying every required position group
    pub fn roster_body() -> Value {
        json!({
            "forwards": [{ "id": 8478550, "sweaterNumber": 10 }],
            "defensemen": [{ "id": 8476885, "sweaterNumber": 8 }],
            "goalies": [{ "id": 8478048, "sweaterNumber": 31 }],
        })
    }
}

/// In-memory `TeamsSource` that counts how often it is asked for data.
pub struct FakeTeamsSource {
    response: TeamsResponse,
    seasons: HashMap<String, Vec<i64>>,
    teams_calls: Cell<usize>,
    season_calls: Cell<usize>,
    fail_next: Cell<bool>,
}

impl FakeTeamsSource {
    pub fn new(response: TeamsResponse) -> Self {
        Self {
            response,
            seasons: HashMap::new(),
            teams_calls: Cell::new(0),
            season_calls: Cell::new(0),
            fail_next: Cell::new(false),
        }
    }

    pub fn with_seasons(mut self, tri_code: &str, seasons: Vec<i64>) -> Self {
        self.seasons.insert(tri_code.to_string(), seasons);
        self
    }

    /// Makes the next `fetch_teams` call fail with a validation error.
    pub fn fail_next_fetch(&self) {
        self.fail_next.set(true);
    }

    pub fn teams_calls(&self) -> usize {
        self.teams_calls.get()
    }

    pub fn season_calls(&self) -> usize {
        self.season_calls.get()
    }
}

impl TeamsSource for FakeTeamsSource {
    async fn fetch_teams(&self) -> Result<TeamsResponse, AppError> {
        self.teams_calls.set(self.teams_calls.get() + 1);
        if self.fail_next.replace(false) {
            return Err(AppError::validation("data", "memory://teams"));
        }
        Ok(self.response.clone())
    }

    async fn fetch_team_seasons(&self, tri_code: &str) -> Result<Vec<i64>, AppError> {
        self.season_calls.set(self.season_calls.get() + 1);
        Ok(self.seasons.get(tri_code).cloned().unwrap_or_default())
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One franchise entry from the stats API team list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    /// `null` for some historical clubs; the key itself is always sent.
    #[serde(rename = "franchiseId")]
    pub franchise_id: Option<i64>,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "leagueId")]
    pub league_id: i64,
    #[serde(rename = "rawTricode")]
    pub raw_tricode: String,
    #[serde(rename = "triCode")]
    pub tri_code: String,
}

/// The `{ "data": [...] }` envelope returned by the team list endpoint.
///
/// Rows stay as raw JSON until projected into a table so that a malformed
/// row is reported with its index instead of failing the whole fetch.
/// Keys other than `data` (e.g. `total`) are kept for the raw snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamsResponse {
    pub data: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TeamsResponse {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Start and end calendar years of one season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeasonRange {
    pub start: i64,
    pub end: i64,
}

impl std::fmt::Display for SeasonRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

//! Application-wide constants and default values

/// Default domain of the web API (rosters, seasons, game stories)
pub const DEFAULT_API_DOMAIN: &str = "https://api-web.nhle.com";

/// Default domain of the stats REST API (team list)
pub const DEFAULT_STATS_API_DOMAIN: &str = "https://api.nhle.com";

/// Default CSV destination for the teams table
pub const DEFAULT_TEAMS_CSV_PATH: &str = "./data/teams.csv";

/// Default destination for the raw teams snapshot
pub const DEFAULT_TEAMS_JSON_PATH: &str = "./raw/teams.json";

/// Directory for raw roster and game-story snapshots
pub const DEFAULT_RAW_DIR: &str = "./raw";

/// Application directory name under the platform config dir
pub const APP_DIR_NAME: &str = "nhl_stats";

/// Log file name used when no custom path is configured
pub const DEFAULT_LOG_FILE_NAME: &str = "nhl_stats.log";

/// API endpoint paths, relative to their domain
pub mod endpoints {
    /// All teams, served by the stats API
    pub const TEAMS: &str = "stats/rest/en/team";

    /// Seasons played by one team, followed by the triCode
    pub const ROSTER_SEASON: &str = "v1/roster-season";

    /// Current roster, as `v1/roster/{team}/current`
    pub const ROSTER: &str = "v1/roster";

    /// Game story, followed by the game id
    pub const GAME_STORY: &str = "v1/wsc/game-story";
}

/// Keys a response must carry to be accepted
pub mod required_keys {
    pub const TEAMS: &[&str] = &["data"];

    pub const ROSTER: &[&str] = &["forwards", "defensemen", "goalies"];
}

/// Team columns in export order
pub const TEAM_COLUMNS: [&str; 6] = [
    "id",
    "franchiseId",
    "fullName",
    "leagueId",
    "rawTricode",
    "triCode",
];

/// Extra columns appended when season lists are attached
pub const SEASON_COLUMNS: [&str; 2] = ["seasons", "seasonRanges"];

//! URL building utilities for API endpoints

use crate::constants::endpoints;

fn join(domain: &str, path: &str) -> String {
    format!("{}/{}", domain.trim_end_matches('/'), path)
}

/// Builds the team list URL on the stats API.
///
/// # Example
/// ```
/// use nhl_stats::data_fetcher::api::build_teams_url;
///
/// let url = build_teams_url("https://api.nhle.com/");
/// assert_eq!(url, "https://api.nhle.com/stats/rest/en/team");
/// ```
pub fn build_teams_url(stats_api_domain: &str) -> String {
    join(stats_api_domain, endpoints::TEAMS)
}

/// Builds the URL listing the seasons a team has played.
///
/// # Example
/// ```
/// use nhl_stats::data_fetcher::api::build_team_seasons_url;
///
/// let url = build_team_seasons_url("https://api-web.nhle.com", "NYR");
/// assert_eq!(url, "https://api-web.nhle.com/v1/roster-season/NYR");
/// ```
pub fn build_team_seasons_url(api_domain: &str, tri_code: &str) -> String {
    join(
        api_domain,
        &format!("{}/{tri_code}", endpoints::ROSTER_SEASON),
    )
}

/// Builds the current roster URL for a team.
///
/// # Example
/// ```
/// use nhl_stats::data_fetcher::api::build_roster_url;
///
/// let url = build_roster_url("https://api-web.nhle.com", "NYR");
/// assert_eq!(url, "https://api-web.nhle.com/v1/roster/NYR/current");
/// ```
pub fn build_roster_url(api_domain: &str, team: &str) -> String {
    join(api_domain, &format!("{}/{team}/current", endpoints::ROSTER))
}

/// Builds the game story URL for a game id.
///
/// # Example
/// ```
/// use nhl_stats::data_fetcher::api::build_game_story_url;
///
/// let url = build_game_story_url("https://api-web.nhle.com", 2024020586);
/// assert_eq!(url, "https://api-web.nhle.com/v1/wsc/game-story/2024020586");
/// ```
pub fn build_game_story_url(api_domain: &str, game_id: i64) -> String {
    join(api_domain, &format!("{}/{game_id}", endpoints::GAME_STORY))
}

use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use nhl_stats::constants::{DEFAULT_TEAMS_CSV_PATH, DEFAULT_TEAMS_JSON_PATH};
use std::path::PathBuf;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Team codes end up in URL paths and file names, so only ASCII letters
/// and digits are accepted.
fn parse_team_code(s: &str) -> Result<String, String> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(format!(
            "'{s}' is not a team code; use letters and digits only, e.g. NYR"
        ));
    }
    Ok(s.to_string())
}

/// True when any configuration update flag is present
pub fn is_config_update(args: &Args) -> bool {
    args.new_api_domain.is_some()
        || args.new_stats_api_domain.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// The teams export runs unless another lookup was asked for
pub fn runs_teams_export(args: &Args) -> bool {
    args.seasons.is_none()
        && args.split.is_none()
        && args.roster.is_none()
        && args.game_story.is_none()
}

/// NHL statistics fetcher
///
/// Without lookup flags, fetches every team and writes them to a CSV file.
/// Other flags print a team's seasons, split a season id, or save a roster
/// or game story as raw JSON.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Where to write the teams CSV.
    #[arg(
        short,
        long,
        value_name = "PATH",
        default_value = DEFAULT_TEAMS_CSV_PATH,
        help_heading = "Teams"
    )]
    pub output: PathBuf,

    /// Also save the raw team list as JSON, optionally at PATH.
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = DEFAULT_TEAMS_JSON_PATH,
        help_heading = "Teams"
    )]
    pub raw: Option<PathBuf>,

    /// Look up every team's seasons and add them as CSV columns.
    /// Issues one extra request per team.
    #[arg(long = "with-seasons", help_heading = "Teams")]
    pub with_seasons: bool,

    /// Print the seasons played by a team, e.g. NYR.
    #[arg(
        long,
        value_name = "TRICODE",
        value_parser = parse_team_code,
        help_heading = "Lookups"
    )]
    pub seasons: Option<String>,

    /// Split a season id such as 20202021 into start and end years.
    #[arg(
        long,
        value_name = "YYYYYYYY",
        allow_negative_numbers = true,
        help_heading = "Lookups"
    )]
    pub split: Option<i64>,

    /// Save a team's current roster as raw JSON.
    #[arg(
        long,
        value_name = "TEAM",
        value_parser = parse_team_code,
        help_heading = "Lookups"
    )]
    pub roster: Option<String>,

    /// Save a game story as raw JSON.
    #[arg(long = "game-story", value_name = "GAME_ID", help_heading = "Lookups")]
    pub game_story: Option<i64>,

    /// Update the web API domain in config.
    #[arg(long = "set-api-domain", help_heading = "Configuration")]
    pub new_api_domain: Option<String>,

    /// Update the stats API domain in config.
    #[arg(long = "set-stats-api-domain", help_heading = "Configuration")]
    pub new_stats_api_domain: Option<String>,

    /// Update log file path in config.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Echo logs to stdout in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path for this run.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_run_teams_export() {
        let args = Args::try_parse_from(["nhl_stats"]).unwrap();
        assert!(runs_teams_export(&args));
        assert!(!is_config_update(&args));
        assert_eq!(args.output, PathBuf::from("./data/teams.csv"));
        assert_eq!(args.raw, None);
    }

    #[test]
    fn test_raw_flag_without_value_uses_default_path() {
        let args = Args::try_parse_from(["nhl_stats", "--raw"]).unwrap();
        assert_eq!(args.raw, Some(PathBuf::from("./raw/teams.json")));
    }

    #[test]
    fn test_lookup_flags_skip_teams_export() {
        let args = Args::try_parse_from(["nhl_stats", "--split", "20202021"]).unwrap();
        assert_eq!(args.split, Some(20202021));
        assert!(!runs_teams_export(&args));

        let args = Args::try_parse_from(["nhl_stats", "--roster", "NYR"]).unwrap();
        assert!(!runs_teams_export(&args));
    }

    #[test]
    fn test_team_codes_must_be_alphanumeric() {
        let args = Args::try_parse_from(["nhl_stats", "--roster", "NYR"]).unwrap();
        assert_eq!(args.roster.as_deref(), Some("NYR"));
        let args = Args::try_parse_from(["nhl_stats", "--seasons", "njd"]).unwrap();
        assert_eq!(args.seasons.as_deref(), Some("njd"));

        for bad in ["../x", "A/B", "NY R", "", "NYR?x=1"] {
            assert!(Args::try_parse_from(["nhl_stats", "--roster", bad]).is_err());
            assert!(Args::try_parse_from(["nhl_stats", "--seasons", bad]).is_err());
        }
    }

    #[test]
    fn test_config_update_detection() {
        let args = Args::try_parse_from(["nhl_stats", "--clear-log-file"]).unwrap();
        assert!(is_config_update(&args));
    }
}

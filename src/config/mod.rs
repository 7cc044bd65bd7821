use crate::constants::{DEFAULT_API_DOMAIN, DEFAULT_LOG_FILE_NAME, DEFAULT_STATS_API_DOMAIN};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Domain of the web API serving rosters, team seasons and game stories.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// Domain of the stats REST API serving the team list.
    #[serde(default = "default_stats_api_domain")]
    pub stats_api_domain: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds. When unset the transport default applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_timeout_seconds: Option<u64>,
}

fn default_api_domain() -> String {
    DEFAULT_API_DOMAIN.to_string()
}

fn default_stats_api_domain() -> String {
    DEFAULT_STATS_API_DOMAIN.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: default_api_domain(),
            stats_api_domain: default_stats_api_domain(),
            log_file_path: None,
            http_timeout_seconds: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing file yields the defaults. Environment variables override file values.
    ///
    /// # Environment Variables
    /// - `NHL_API_DOMAIN` - Override web API domain
    /// - `NHL_STATS_API_DOMAIN` - Override stats API domain
    /// - `NHL_LOG_FILE` - Override log file path
    /// - `NHL_HTTP_TIMEOUT` - Set HTTP timeout in seconds
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads the stored configuration only, for editing and saving back.
    ///
    /// Environment overrides are not applied, so they never end up on disk.
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// an error.
    pub async fn load_stored() -> Result<Self, AppError> {
        Self::load_stored_at(&get_config_path()).await
    }

    /// Like [`Config::load_stored`], from an explicit path.
    pub async fn load_stored_at(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            Self::load_from_path(path).await
        } else {
            Ok(Config::default())
        }
    }

    /// Applies `NHL_*` environment overrides on top of the current values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_domain) = std::env::var("NHL_API_DOMAIN") {
            self.api_domain = api_domain;
        }

        if let Ok(stats_api_domain) = std::env::var("NHL_STATS_API_DOMAIN") {
            self.stats_api_domain = stats_api_domain;
        }

        if let Ok(log_file_path) = std::env::var("NHL_LOG_FILE") {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var("NHL_HTTP_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = Some(timeout);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_domain,
            &self.stats_api_domain,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path} (not created, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("API Domain:");
        println!("{}", config.api_domain);
        println!("────────────────────────────────────");
        println!("Stats API Domain:");
        println!("{}", config.stats_api_domain);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        match config.http_timeout_seconds {
            Some(seconds) => println!("{seconds} seconds"),
            None => println!("transport default"),
        }
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{DEFAULT_LOG_FILE_NAME}");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if needed and forces an `https://` prefix
    /// on both API domains.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(&Config {
            api_domain: with_https_prefix(&self.api_domain),
            stats_api_domain: with_https_prefix(&self.stats_api_domain),
            log_file_path: self.log_file_path.clone(),
            http_timeout_seconds: self.http_timeout_seconds,
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

fn with_https_prefix(domain: &str) -> String {
    if domain.starts_with("https://") {
        domain.to_string()
    } else {
        format!("https://{}", domain.trim_start_matches("http://"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
api_domain = "https://web.example.com"
stats_api_domain = "https://stats.example.com"
log_file_path = "/custom/log/path"
http_timeout_seconds = 12
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.api_domain, "https://web.example.com");
        assert_eq!(config.stats_api_domain, "https://stats.example.com");
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(config.http_timeout_seconds, Some(12));
    }

    #[tokio::test]
    async fn test_config_missing_fields_use_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.api_domain, "https://api-web.nhle.com");
        assert_eq!(config.stats_api_domain, "https://api.nhle.com");
        assert_eq!(config.http_timeout_seconds, None);
    }

    #[tokio::test]
    async fn test_config_save_adds_https_prefix() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let config = Config {
            api_domain: "http://web.example.com".to_string(),
            stats_api_domain: "stats.example.com".to_string(),
            log_file_path: None,
            http_timeout_seconds: None,
        };

        config.save_to_path(&config_path_str).await.unwrap();
        assert!(config_path.exists());

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded.api_domain, "https://web.example.com");
        assert_eq!(loaded.stats_api_domain, "https://stats.example.com");
        assert_eq!(loaded.log_file_path, None);
    }

    #[tokio::test]
    async fn test_config_malformed_toml_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "api_domain = [unterminated")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[tokio::test]
    async fn test_config_load_from_nonexistent_path() {
        let result = Config::load_from_path("/nonexistent/nhl_stats/config.toml").await;
        assert!(matches!(result.unwrap_err(), AppError::Io(_)));
    }

    #[test]
    fn test_config_path_generation() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("nhl_stats"));
        assert!(config_path.ends_with("config.toml"));

        let log_dir = Config::get_log_dir_path();
        assert!(log_dir.contains("nhl_stats"));
        assert!(log_dir.ends_with("logs"));
    }

    #[test]
    #[serial]
    fn test_environment_variable_override() {
        unsafe {
            std::env::set_var("NHL_API_DOMAIN", "https://env-web.example.com");
            std::env::set_var("NHL_STATS_API_DOMAIN", "https://env-stats.example.com");
            std::env::set_var("NHL_HTTP_TIMEOUT", "7");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.api_domain, "https://env-web.example.com");
        assert_eq!(config.stats_api_domain, "https://env-stats.example.com");
        assert_eq!(config.http_timeout_seconds, Some(7));
        assert_eq!(config.log_file_path, None);

        unsafe {
            std::env::remove_var("NHL_API_DOMAIN");
            std::env::remove_var("NHL_STATS_API_DOMAIN");
            std::env::remove_var("NHL_HTTP_TIMEOUT");
        }
    }

    #[tokio::test]
    async fn test_load_stored_missing_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config = Config::load_stored_at(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_load_stored_malformed_file_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let original = "api_domain = \"https://mine.example.com\"\nhttp_timeout_seconds = [oops\n";
        tokio::fs::write(&config_path, original).await.unwrap();

        let result = Config::load_stored_at(&config_path.to_string_lossy()).await;

        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
        let on_disk = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert_eq!(on_disk, original);
    }

    #[tokio::test]
    #[serial]
    async fn test_load_stored_ignores_env_overrides() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        tokio::fs::write(&config_path, "api_domain = \"https://mine.example.com\"\n")
            .await
            .unwrap();

        unsafe {
            std::env::set_var("NHL_STATS_API_DOMAIN", "https://temporary-env.example.com");
        }

        let mut config = Config::load_stored_at(&config_path_str).await.unwrap();
        config.log_file_path = None;
        config.save_to_path(&config_path_str).await.unwrap();

        unsafe {
            std::env::remove_var("NHL_STATS_API_DOMAIN");
        }

        let saved = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(saved.api_domain, "https://mine.example.com");
        assert_eq!(saved.stats_api_domain, "https://api.nhle.com");
    }

    #[test]
    #[serial]
    fn test_unparsable_timeout_is_ignored() {
        unsafe {
            std::env::set_var("NHL_HTTP_TIMEOUT", "soon");
        }

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.http_timeout_seconds, None);

        unsafe {
            std::env::remove_var("NHL_HTTP_TIMEOUT");
        }
    }
}

//! NHL statistics fetcher
//!
//! Pulls the team list, team seasons, rosters and game stories from the
//! NHL web APIs and persists them as raw JSON or CSV.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nhl_stats::data_fetcher::{TeamsApi, TeamsCache};
//! use nhl_stats::data_fetcher::api::create_http_client;
//! use nhl_stats::export::write_csv;
//! use nhl_stats::{AppError, Config};
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::default();
//!     let client = create_http_client(config.http_timeout_seconds)
//!         .map_err(|e| AppError::config_error(e.to_string()))?;
//!
//!     let mut teams = TeamsCache::new(TeamsApi::from_config(client, &config));
//!     let table = teams.table().await?;
//!     write_csv(&table, Path::new("./data/teams.csv"))?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod export;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{TeamsApi, TeamsCache, TeamsSource, split_season_years};
pub use error::AppError;
pub use export::{TeamsTable, to_table, write_csv, write_raw_json};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

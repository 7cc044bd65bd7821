pub mod http_client;
pub mod roster_api;
pub mod teams_api;
pub mod urls;
mod fetch_utils;

// Re-export URL utilities
pub use urls::*;
pub use http_client::create_http_client;
pub use roster_api::RosterApi;
pub use teams_api::{TeamsApi, TeamsSource};

pub mod api;
pub mod cache;
pub mod models;
pub mod season_utils;

pub use api::{RosterApi, TeamsApi, TeamsSource};
pub use cache::TeamsCache;
pub use models::{SeasonRange, Team, TeamsResponse};
pub use season_utils::{split_season_list, split_season_years};

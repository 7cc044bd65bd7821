pub mod teams;

pub use teams::{SeasonRange, Team, TeamsResponse};

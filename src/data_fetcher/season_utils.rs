//! Season id decomposition
//!
//! The API identifies a season by its two calendar years concatenated into
//! one integer, e.g. `20202021` for the 2020-21 season.

use crate::data_fetcher::models::SeasonRange;
use crate::error::AppError;

const SEASON_ID_MIN: i64 = 10_000_000;
const SEASON_ID_MAX: i64 = 99_999_999;

/// Splits an eight-digit season id into its start and end years.
///
/// # Errors
/// `AppError::Format` when `date` is negative or does not have exactly
/// eight decimal digits.
///
/// # Example
/// ```
/// use nhl_stats::data_fetcher::season_utils::split_season_years;
///
/// let season = split_season_years(20202021).unwrap();
/// assert_eq!((season.start, season.end), (2020, 2021));
/// ```
pub fn split_season_years(date: i64) -> Result<SeasonRange, AppError> {
    if date < 0 {
        return Err(AppError::format_error(date, "season id cannot be negative"));
    }
    if !(SEASON_ID_MIN..=SEASON_ID_MAX).contains(&date) {
        return Err(AppError::format_error(
            date,
            "expected two years concatenated as YYYYYYYY",
        ));
    }

    Ok(SeasonRange {
        start: date / 10_000,
        end: date % 10_000,
    })
}

/// Splits every season id in `dates`, failing on the first malformed one.
pub fn split_season_list(dates: &[i64]) -> Result<Vec<SeasonRange>, AppError> {
    dates.iter().map(|&date| split_season_years(date)).collect()
}

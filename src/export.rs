//! Tabular projection of the team list and file writers
//!
//! Files are written synchronously; each writer creates missing parent
//! directories and closes its file before returning. A failed write leaves
//! whatever reached the disk in place, so callers should treat the file as
//! not persisted.

use std::fs::{self, File};
use std::path::Path;

use serde::Serialize;
use tracing::{error, info};

use crate::constants::{SEASON_COLUMNS, TEAM_COLUMNS};
use crate::data_fetcher::models::{Team, TeamsResponse};
use crate::data_fetcher::season_utils::split_season_list;
use crate::error::AppError;

/// A team plus, once enriched, the seasons it has played.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRow {
    pub team: Team,
    pub seasons: Option<Vec<i64>>,
}

/// Row-per-team view of a [`TeamsResponse`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamsTable {
    rows: Vec<TeamRow>,
}

impl TeamsTable {
    pub fn rows(&self) -> &[TeamRow] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [TeamRow] {
        &mut self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True once any row carries a season list.
    pub fn has_seasons(&self) -> bool {
        self.rows.iter().any(|row| row.seasons.is_some())
    }

    /// Column names in output order.
    pub fn headers(&self) -> Vec<&'static str> {
        let mut headers = TEAM_COLUMNS.to_vec();
        if self.has_seasons() {
            headers.extend(SEASON_COLUMNS);
        }
        headers
    }

    /// Renders every row as CSV cells, matching [`TeamsTable::headers`].
    ///
    /// # Errors
    /// `AppError::Format` if an attached season id is malformed.
    pub fn records(&self) -> Result<Vec<Vec<String>>, AppError> {
        let with_seasons = self.has_seasons();
        self.rows
            .iter()
            .map(|row| {
                let team = &row.team;
                let mut record = vec![
                    team.id.to_string(),
                    team.franchise_id.map(|id| id.to_string()).unwrap_or_default(),
                    team.full_name.clone(),
                    team.league_id.to_string(),
                    team.raw_tricode.clone(),
                    team.tri_code.clone(),
                ];
                if with_seasons {
                    let seasons = row.seasons.as_deref().unwrap_or_default();
                    let ranges = split_season_list(seasons)?;
                    record.push(join(seasons));
                    record.push(join(&ranges));
                }
                Ok(record)
            })
            .collect()
    }
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(";")
}

/// Projects `response.data` into one row per team.
///
/// # Errors
/// `AppError::Shape` naming the first row that is not an object, lacks a
/// team field, or has a field of the wrong type.
pub fn to_table(response: &TeamsResponse) -> Result<TeamsTable, AppError> {
    let rows = response
        .data
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let object = value
                .as_object()
                .ok_or_else(|| AppError::shape_error(index, "expected a JSON object"))?;

            if let Some(missing) = TEAM_COLUMNS
                .iter()
                .find(|column| !object.contains_key(**column))
            {
                return Err(AppError::shape_error(
                    index,
                    format!("missing field '{missing}'"),
                ));
            }

            let team: Team = serde_json::from_value(value.clone())
                .map_err(|e| AppError::shape_error(index, e.to_string()))?;
            Ok(TeamRow {
                team,
                seasons: None,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()
        .inspect_err(|e| error!("Cannot build teams table: {e}"))?;

    Ok(TeamsTable { rows })
}

fn ensure_parent_dir(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| AppError::write_error(path, e))?;
    }
    Ok(())
}

/// Writes `table` as comma-separated values with a header row.
pub fn write_csv(table: &TeamsTable, path: &Path) -> Result<(), AppError> {
    // Render first so a bad season id never leaves a half-written file
    let records = table.records()?;

    info!("Writing csv file {}", path.display());
    ensure_parent_dir(path)?;

    let file = File::create(path).map_err(|e| AppError::write_error(path, e))?;
    let mut writer = csv::Writer::from_writer(file);

    let write_err = |e: csv::Error| {
        error!("Error writing {}: {}", path.display(), e);
        AppError::write_error(path, e.into())
    };

    writer.write_record(table.headers()).map_err(write_err)?;
    for record in &records {
        writer.write_record(record).map_err(write_err)?;
    }
    writer
        .flush()
        .map_err(|e| AppError::write_error(path, e))?;

    info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

/// Serializes `value` as pretty-printed JSON into `path`.
pub fn write_raw_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), AppError> {
    info!("Writing raw data to {}", path.display());

    let content =
        serde_json::to_string_pretty(value).map_err(|e| AppError::write_error(path, e.into()))?;

    ensure_parent_dir(path)?;
    fs::write(path, content).map_err(|e| {
        error!("Error writing {}: {}", path.display(), e);
        AppError::write_error(path, e)
    })?;

    info!("Finished writing {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;
    use serde_json::json;
    use tempfile::tempdir;

    fn four_team_table() -> TeamsTable {
        to_table(&TestDataBuilder::teams_response(TestDataBuilder::four_teams())).unwrap()
    }

    #[test]
    fn test_to_table_keeps_order() {
        let table = four_team_table();

        assert_eq!(table.len(), 4);
        let codes: Vec<&str> = table
            .rows()
            .iter()
            .map(|row| row.team.tri_code.as_str())
            .collect();
        assert_eq!(codes, vec!["NJD", "NYI", "NYR", "PHI"]);
        assert!(!table.has_seasons());
    }

    #[test]
    fn test_to_table_rejects_missing_field() {
        let mut teams = TestDataBuilder::four_teams();
        teams[2].as_object_mut().unwrap().remove("triCode");

        let result = to_table(&TestDataBuilder::teams_response(teams));

        match result {
            Err(AppError::Shape { row, message }) => {
                assert_eq!(row, 2);
                assert!(message.contains("triCode"));
            }
            other => panic!("Expected Shape error, got {other:?}"),
        }
    }

    #[test]
    fn test_to_table_rejects_wrong_type() {
        let mut teams = TestDataBuilder::four_teams();
        teams[0]["id"] = json!("one");

        let result = to_table(&TestDataBuilder::teams_response(teams));
        assert!(matches!(result, Err(AppError::Shape { row: 0, .. })));
    }

    #[test]
    fn test_to_table_rejects_non_object_row() {
        let result = to_table(&TestDataBuilder::teams_response(vec![json!(42)]));
        assert!(matches!(result, Err(AppError::Shape { row: 0, .. })));
    }

    #[test]
    fn test_to_table_empty_response() {
        let table = to_table(&TestDataBuilder::teams_response(vec![])).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_write_csv_header_and_rows() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("data").join("teams.csv");

        write_csv(&four_team_table(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "id,franchiseId,fullName,leagueId,rawTricode,triCode");
        assert_eq!(lines[3], "3,103,New York Rangers,133,NYR,NYR");
    }

    #[test]
    fn test_write_csv_quotes_and_null_franchise() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("teams.csv");
        let mut team = TestDataBuilder::team_json(9, "MTL", "Montréal Canadiens, Club de hockey");
        team["franchiseId"] = json!(null);

        let table = to_table(&TestDataBuilder::teams_response(vec![team])).unwrap();
        write_csv(&table, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content.lines().nth(1),
            Some("9,,\"Montréal Canadiens, Club de hockey\",133,MTL,MTL")
        );
    }

    #[test]
    fn test_write_csv_with_seasons() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("teams.csv");
        let mut table = four_team_table();
        table.rows_mut()[2].seasons = Some(vec![20222023, 20232024]);

        write_csv(&table, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines[0],
            "id,franchiseId,fullName,leagueId,rawTricode,triCode,seasons,seasonRanges"
        );
        assert_eq!(lines[1], "1,101,New Jersey Devils,133,NJD,NJD,,");
        assert_eq!(
            lines[3],
            "3,103,New York Rangers,133,NYR,NYR,20222023;20232024,2022-2023;2023-2024"
        );
    }

    #[test]
    fn test_write_csv_bad_season_writes_nothing() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("teams.csv");
        let mut table = four_team_table();
        table.rows_mut()[0].seasons = Some(vec![2023]);

        let result = write_csv(&table, &path);

        assert!(matches!(result, Err(AppError::Format { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_csv_unwritable_path() {
        let temp_dir = tempdir().unwrap();
        let blocker = temp_dir.path().join("not_a_dir");
        std::fs::write(&blocker, "file").unwrap();

        let result = write_csv(&four_team_table(), &blocker.join("teams.csv"));
        assert!(matches!(result, Err(AppError::Write { .. })));
    }

    #[test]
    fn test_write_raw_json_keeps_envelope() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("raw").join("teams.json");
        let response = TestDataBuilder::teams_response(TestDataBuilder::four_teams());

        write_raw_json(&response, &path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["total"], 4);
        assert_eq!(written["data"].as_array().unwrap().len(), 4);
    }
}

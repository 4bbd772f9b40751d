//! Player roster: parsing `commonallplayers` and the on-disk roster cache.

use crate::cli::types::PlayerId;
use crate::core::{roster_cache_path, try_read_to_string, write_string};
use crate::nba::types::PlayerIdentity;
use crate::stats::{Cell, RawTableSet, Table};

const PERSON_ID: &str = "PERSON_ID";
const DISPLAY_FIRST_LAST: &str = "DISPLAY_FIRST_LAST";
const DISPLAY_LAST_COMMA_FIRST: &str = "DISPLAY_LAST_COMMA_FIRST";
const ROSTER_STATUS: &str = "ROSTERSTATUS";
const TEAM_ABBREVIATION: &str = "TEAM_ABBREVIATION";

/// Read the cached roster for `season`, unless `refresh` is set or the
/// cache is missing or unreadable.
pub fn load_cached_roster(season: &str, refresh: bool) -> Option<Vec<PlayerIdentity>> {
    if refresh {
        return None;
    }
    let s = try_read_to_string(&roster_cache_path(season))?;
    serde_json::from_str(&s).ok()
}

/// Best-effort write of the roster cache.
pub fn store_cached_roster(season: &str, roster: &[PlayerIdentity]) {
    let path = roster_cache_path(season);
    match serde_json::to_string(roster) {
        Ok(json) => {
            if let Err(e) = write_string(&path, &json) {
                tracing::warn!(path = %path.display(), error = %e, "could not write roster cache");
            }
        }
        Err(e) => tracing::warn!(error = %e, "could not serialize roster"),
    }
}

/// Extract identities from a `commonallplayers` response.
///
/// Uses the first table that has both a person id and a display name; rows
/// missing either are skipped.
pub fn parse_roster(tables: &RawTableSet) -> Vec<PlayerIdentity> {
    tables
        .tables
        .iter()
        .find(|t| t.column_index(PERSON_ID).is_some() && t.column_index(DISPLAY_FIRST_LAST).is_some())
        .map(parse_roster_table)
        .unwrap_or_default()
}

fn parse_roster_table(table: &Table) -> Vec<PlayerIdentity> {
    let col = |label| table.column_index(label);
    let (Some(id_col), Some(name_col)) = (col(PERSON_ID), col(DISPLAY_FIRST_LAST)) else {
        return Vec::new();
    };
    let comma_col = col(DISPLAY_LAST_COMMA_FIRST);
    let status_col = col(ROSTER_STATUS);
    let team_col = col(TEAM_ABBREVIATION);

    (0..table.rows.len())
        .filter_map(|row| {
            let id = table.cell(row, id_col).to_number()?;
            let full_name = table.cell(row, name_col).to_text()?;
            if id < 0.0 || full_name.trim().is_empty() {
                return None;
            }

            let mut identity = PlayerIdentity::new(PlayerId::new(id as u64), full_name.trim());
            if let Some((last, first)) = comma_col
                .and_then(|c| table.cell(row, c).to_text())
                .as_deref()
                .and_then(|s| s.split_once(", "))
            {
                identity.first_name = first.to_string();
                identity.last_name = last.to_string();
            }
            identity.is_active = status_col
                .and_then(|c| table.cell(row, c).to_number())
                .is_some_and(|s| s == 1.0);
            identity.team_abbreviation = team_col
                .map(|c| table.cell(row, c))
                .and_then(|cell| match cell {
                    Cell::Text(s) if !s.is_empty() => Some(s.clone()),
                    _ => None,
                });
            Some(identity)
        })
        .collect()
}

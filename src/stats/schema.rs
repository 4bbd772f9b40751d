//! Versioned mapping from provider column labels to canonical fields.
//!
//! Labels named here are tried first, in order. When none is present the
//! substring heuristics in the season and metric modules take over.

use super::record::SeasonRecord;
use super::table::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaMapping {
    pub version: &'static str,
    pub season: &'static [&'static str],
    pub points: &'static [&'static str],
    pub games: &'static [&'static str],
}

impl SchemaMapping {
    /// `playercareerstats` totals as served by stats.nba.com.
    pub const STATS_NBA_V1: SchemaMapping = SchemaMapping {
        version: "stats.nba.com/playercareerstats/v1",
        season: &["season_id"],
        points: &["pts", "points"],
        games: &["gp", "g", "games", "games_played"],
    };

    /// No explicit labels: heuristics only.
    pub const HEURISTIC_ONLY: SchemaMapping = SchemaMapping {
        version: "heuristic",
        season: &[],
        points: &[],
        games: &[],
    };

    /// Column index of the first mapped season label present in `table`.
    pub fn season_column(&self, table: &Table) -> Option<usize> {
        self.season.iter().find_map(|label| table.column_index(label))
    }

    pub fn points_label<'a>(&self, record: &'a SeasonRecord) -> Option<&'a str> {
        first_present(self.points, record)
    }

    pub fn games_label<'a>(&self, record: &'a SeasonRecord) -> Option<&'a str> {
        first_present(self.games, record)
    }
}

impl Default for SchemaMapping {
    fn default() -> Self {
        Self::STATS_NBA_V1
    }
}

fn first_present<'a>(labels: &[&str], record: &'a SeasonRecord) -> Option<&'a str> {
    labels
        .iter()
        .find_map(|wanted| record.labels().find(|label| label == wanted))
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cli::types::PlayerId;
use crate::stats::{Cell, RawTableSet, Table};


/// Canonical identity of one player known to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlayerIdentity {
    pub id: PlayerId,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub team_abbreviation: Option<String>,
}

impl PlayerIdentity {
    /// Build an identity, splitting `full_name` on its first space.
    pub fn new(id: PlayerId, full_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        let (first_name, last_name) = match full_name.split_once(' ') {
            Some((first, last)) => (first.to_string(), last.to_string()),
            None => (String::new(), full_name.clone()),
        };
        Self {
            id,
            full_name,
            first_name,
            last_name,
            is_active: false,
            team_abbreviation: None,
        }
    }
}

/// One `resultSets` entry: a header row plus positional rows.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultSet {
    #[serde(default)]
    pub name: Option<String>,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub row_set: Vec<Vec<Value>>,
}

impl From<ResultSet> for Table {
    fn from(set: ResultSet) -> Self {
        let rows = set
            .row_set
            .iter()
            .map(|row| row.iter().map(Cell::from).collect())
            .collect();
        Table {
            name: set.name,
            columns: set.headers,
            rows,
        }
    }
}

/// stats.nba.com answers with `resultSets` (a list) on most endpoints and
/// `resultSet` (a single object) on a few.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ResultSets {
    Many(Vec<ResultSet>),
    One(ResultSet),
}

/// Top-level envelope of a stats.nba.com response
#[derive(Debug, Deserialize)]
pub struct StatsEnvelope {
    #[serde(rename = "resultSets", alias = "resultSet")]
    result_sets: ResultSets,
}

impl StatsEnvelope {
    pub fn into_table_set(self) -> RawTableSet {
        let sets = match self.result_sets {
            ResultSets::Many(sets) => sets,
            ResultSets::One(set) => vec![set],
        };
        RawTableSet::new(sets.into_iter().map(Table::from).collect())
    }
}

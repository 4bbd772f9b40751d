//! Provider tables and location of the season-by-season table.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::value::Cell;


/// Substring that marks a column as carrying a season identifier.
pub const SEASON_MARKER: &str = "season";

/// One provider table. Rows are positionally aligned with `columns`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub name: Option<String>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: None,
            columns,
            rows,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Cell at `row`/`col`; short rows read as absent.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        static ABSENT: Cell = Cell::Absent;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&ABSENT)
    }

    /// Index of the first column labelled exactly `label`.
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == label)
    }

    /// True when any label, case-insensitively, contains `"season"`.
    pub fn has_season_column(&self) -> bool {
        self.columns
            .iter()
            .any(|c| c.to_lowercase().contains(SEASON_MARKER))
    }

    /// Copy of this table with every column label lower-cased.
    pub fn with_lowercase_columns(&self) -> Table {
        Table {
            name: self.name.clone(),
            columns: self.columns.iter().map(|c| c.to_lowercase()).collect(),
            rows: self.rows.clone(),
        }
    }

    /// Iterate rows as `(label, cell)` pairs.
    pub fn row_pairs(&self, row: usize) -> impl Iterator<Item = (&str, &Cell)> {
        self.columns
            .iter()
            .enumerate()
            .map(move |(col, label)| (label.as_str(), self.cell(row, col)))
    }
}

impl Serialize for Table {
    /// Serializes as a list of `{label: value}` records.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in 0..self.rows.len() {
            seq.serialize_element(&RowRecord { table: self, row })?;
        }
        seq.end()
    }
}

struct RowRecord<'a> {
    table: &'a Table,
    row: usize,
}

impl Serialize for RowRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.table.columns.len()))?;
        for (label, cell) in self.table.row_pairs(self.row) {
            map.serialize_entry(label, cell)?;
        }
        map.end()
    }
}

/// Ordered set of tables returned by one stats fetch.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
#[serde(transparent)]
pub struct RawTableSet {
    pub tables: Vec<Table>,
}

impl RawTableSet {
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }
}

/// Select the first table, in provider order, that carries a season column.
pub fn locate(tables: &RawTableSet) -> Option<&Table> {
    tables.tables.iter().find(|t| t.has_season_column())
}

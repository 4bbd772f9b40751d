//! Normalized single-row records.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::value::Cell;

/// Marker key emitted on career-aggregated records.
pub const CAREER_AGGREGATED: &str = "career_aggregated";

/// One season's row, or a career aggregate, keyed by lower-cased label.
///
/// Field order follows the source table's column order; the column
/// heuristics in [`crate::stats::metrics`] depend on it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeasonRecord {
    fields: Vec<(String, Cell)>,
    pub career_aggregated: bool,
}

impl SeasonRecord {
    pub fn new(fields: Vec<(String, Cell)>) -> Self {
        Self {
            fields,
            career_aggregated: false,
        }
    }

    pub fn career(fields: Vec<(String, Cell)>) -> Self {
        Self {
            fields,
            career_aggregated: true,
        }
    }

    pub fn get(&self, label: &str) -> Option<&Cell> {
        self.fields
            .iter()
            .find_map(|(k, v)| (k == label).then_some(v))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

}

impl Serialize for SeasonRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = usize::from(self.career_aggregated);
        let mut map = serializer.serialize_map(Some(self.fields.len() + extra))?;
        for (label, cell) in &self.fields {
            map.serialize_entry(label, cell)?;
        }
        if self.career_aggregated {
            map.serialize_entry(CAREER_AGGREGATED, &true)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_and_labels() {
        let record = SeasonRecord::new(vec![
            ("season_id".into(), Cell::from("2023-24")),
            ("pts".into(), Cell::from(1800_i64)),
        ]);

        assert_eq!(record.get("pts"), Some(&Cell::Number(1800.0)));
        assert_eq!(record.get("gp"), None);
        assert_eq!(record.labels().collect::<Vec<_>>(), vec!["season_id", "pts"]);
    }

    #[test]
    fn test_serialize_season_row_has_no_marker() {
        let record = SeasonRecord::new(vec![("pts".into(), Cell::from(10_i64))]);
        assert_eq!(serde_json::to_value(&record).unwrap(), json!({"pts": 10}));
    }

    #[test]
    fn test_serialize_career_marker() {
        let record = SeasonRecord::career(vec![("pts".into(), Cell::from(30_i64))]);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"pts": 30, "career_aggregated": true})
        );
    }
}

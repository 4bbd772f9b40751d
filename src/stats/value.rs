//! Cell values as delivered by the provider's tables.

use serde::{Serialize, Serializer};
use serde_json::Value;

/// One table cell, typed once at ingestion.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Absent,
}

impl Cell {
    /// Text rendering used for substring matching. Absent cells have none.
    ///
    /// Integral numbers render without a fractional part, so a season stored
    /// as `2024` matches `"2024"`.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                Some(format!("{}", *n as i64))
            }
            Cell::Number(n) => Some(n.to_string()),
            Cell::Text(s) => Some(s.clone()),
            Cell::Absent => None,
        }
    }

    /// Numeric value, accepting text that parses as a finite float.
    pub fn to_number(&self) -> Option<f64> {
        let n = match self {
            Cell::Number(n) => *n,
            Cell::Text(s) => s.trim().parse::<f64>().ok()?,
            Cell::Absent => return None,
        };
        n.is_finite().then_some(n)
    }
}

impl From<&Value> for Cell {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Cell::Absent,
            Value::Number(n) => n.as_f64().map(Cell::Number).unwrap_or(Cell::Absent),
            Value::String(s) => Cell::Text(s.clone()),
            Value::Bool(b) => Cell::Text(b.to_string()),
            other => Cell::Text(other.to_string()),
        }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Number(n as f64)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                serializer.serialize_i64(*n as i64)
            }
            Cell::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            Cell::Number(_) | Cell::Absent => serializer.serialize_none(),
            Cell::Text(s) => serializer.serialize_str(s),
        }
    }
}

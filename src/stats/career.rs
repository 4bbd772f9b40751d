//! Career totals across every row of the located table.

use super::record::SeasonRecord;
use super::table::Table;
use super::value::Cell;

/// Sum every numeric column over all rows.
///
/// A column is numeric when it holds at least one number and no text;
/// absent cells are skipped. Other columns are dropped. The result always
/// carries the career marker.
pub fn aggregate(table: &Table) -> SeasonRecord {
    let fields = table
        .columns
        .iter()
        .enumerate()
        .filter_map(|(col, label)| {
            column_sum(table, col).map(|sum| (label.clone(), Cell::Number(sum)))
        })
        .collect();
    SeasonRecord::career(fields)
}

fn column_sum(table: &Table, col: usize) -> Option<f64> {
    let mut sum = 0.0;
    let mut seen_number = false;
    for row in 0..table.rows.len() {
        match table.cell(row, col) {
            Cell::Number(n) => {
                sum += n;
                seen_number = true;
            }
            Cell::Text(_) => return None,
            Cell::Absent => {}
        }
    }
    seen_number.then_some(sum)
}

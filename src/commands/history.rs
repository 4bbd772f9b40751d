//! History command implementation

use serde::Serialize;

use crate::{
    storage::{Comparison, HistoryDatabase},
    Result,
};

#[derive(Debug, Serialize)]
struct HistoryResponse<'a> {
    count: usize,
    total: u64,
    results: &'a [Comparison],
}

/// Handle the history command: list the most recent comparisons, or wipe
/// the history when `clear` is set.
pub fn handle_history(
    db: &mut HistoryDatabase,
    limit: usize,
    clear: bool,
    as_json: bool,
) -> Result<()> {
    if clear {
        let removed = db.comparison_count()?;
        db.clear_history()?;
        tracing::info!(removed, "comparison history cleared");
        if as_json {
            println!("{}", serde_json::json!({ "removed": removed })); // tarpaulin::skip
        } else {
            println!("Removed {removed} comparisons."); // tarpaulin::skip
        }
        return Ok(());
    }

    let rows = db.recent_comparisons(limit)?;
    let total = db.comparison_count()?;

    if as_json {
        let response = HistoryResponse {
            count: rows.len(),
            total,
            results: &rows,
        };
        println!("{}", serde_json::to_string_pretty(&response)?); // tarpaulin::skip
        return Ok(());
    }

    if rows.is_empty() {
        println!("No comparisons recorded yet."); // tarpaulin::skip
        return Ok(());
    }
    for row in &rows {
        let season = row.season1.as_deref().unwrap_or("career");
        let playoff = if row.is_playoff { " (playoffs)" } else { "" };
        println!(
            "#{:<4} {} vs {}, {}{}",
            row.id, row.player1, row.player2, season, playoff
        ); // tarpaulin::skip
    }
    println!("Showing {} of {total} comparisons.", rows.len()); // tarpaulin::skip

    Ok(())
}

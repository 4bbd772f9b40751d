//! Comparison history queries

use super::{models::*, schema::HistoryDatabase};
use crate::PlayerId;
use anyhow::Result;
use rusqlite::{params, Row};
use std::time::{SystemTime, UNIX_EPOCH};

/// Upper bound accepted by [`HistoryDatabase::recent_comparisons`]
pub const MAX_HISTORY_LIMIT: usize = 200;

impl HistoryDatabase {
    /// Record one comparison and return it with its id and timestamp
    pub fn insert_comparison(&mut self, comparison: &NewComparison) -> Result<Comparison> {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();

        self.conn.execute(
            "INSERT INTO comparisons
             (player1, player1_id, season1, player2, player2_id, season2, is_playoff, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                comparison.player1,
                comparison.player1_id.as_u64(),
                comparison.season1,
                comparison.player2,
                comparison.player2_id.as_u64(),
                comparison.season2,
                comparison.is_playoff,
                now
            ],
        )?;

        Ok(Comparison {
            id: self.conn.last_insert_rowid(),
            player1: comparison.player1.clone(),
            player1_id: Some(comparison.player1_id),
            season1: comparison.season1.clone(),
            player2: comparison.player2.clone(),
            player2_id: Some(comparison.player2_id),
            season2: comparison.season2.clone(),
            is_playoff: comparison.is_playoff,
            created_at: now,
        })
    }

    /// Most recent comparisons first, at most `limit` (clamped to 1..=200)
    pub fn recent_comparisons(&self, limit: usize) -> Result<Vec<Comparison>> {
        let limit = limit.clamp(1, MAX_HISTORY_LIMIT);
        let mut stmt = self.conn.prepare(
            "SELECT id, player1, player1_id, season1, player2, player2_id, season2,
                    is_playoff, created_at
             FROM comparisons
             ORDER BY created_at DESC, id DESC
             LIMIT ?",
        )?;

        let rows = stmt.query_map(params![limit as i64], row_to_comparison)?;

        let mut comparisons = Vec::new();
        for row in rows {
            comparisons.push(row?);
        }
        Ok(comparisons)
    }

    /// Number of stored comparisons
    pub fn comparison_count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM comparisons", [], |row| row.get(0))?;
        Ok(count.max(0) as u64)
    }

    /// Delete all history
    pub fn clear_history(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM comparisons", [])?;
        Ok(())
    }
}

fn row_to_comparison(row: &Row) -> rusqlite::Result<Comparison> {
    Ok(Comparison {
        id: row.get(0)?,
        player1: row.get(1)?,
        player1_id: row.get::<_, Option<u64>>(2)?.map(PlayerId::new),
        season1: row.get(3)?,
        player2: row.get(4)?,
        player2_id: row.get::<_, Option<u64>>(5)?.map(PlayerId::new),
        season2: row.get(6)?,
        is_playoff: row.get(7)?,
        created_at: row.get(8)?,
    })
}

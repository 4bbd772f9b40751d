//! Database schema and connection management

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

use crate::core::history_db_path;

/// Database connection manager for comparison history
pub struct HistoryDatabase {
    pub(crate) conn: Connection,
}

impl HistoryDatabase {
    /// Open the database at the configured path and ensure tables exist
    pub fn new() -> Result<Self> {
        Self::open(&history_db_path())
    }

    /// Open (or create) a database file at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database, used by tests
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS comparisons (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                player1 TEXT NOT NULL,
                player1_id INTEGER,
                season1 TEXT,
                player2 TEXT NOT NULL,
                player2_id INTEGER,
                season2 TEXT,
                is_playoff INTEGER NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_comparisons_created
             ON comparisons(created_at)",
            [],
        )?;

        Ok(())
    }
}

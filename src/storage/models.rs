//! Data models for the storage layer

use crate::cli::types::PlayerId;
use serde::{Deserialize, Serialize};

/// A comparison about to be recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComparison {
    pub player1: String,
    pub player1_id: PlayerId,
    pub season1: Option<String>,
    pub player2: String,
    pub player2_id: PlayerId,
    pub season2: Option<String>,
    pub is_playoff: bool,
}

/// A stored comparison, as listed by `history`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub id: i64,
    pub player1: String,
    pub player1_id: Option<PlayerId>,
    pub season1: Option<String>,
    pub player2: String,
    pub player2_id: Option<PlayerId>,
    pub season2: Option<String>,
    pub is_playoff: bool,
    /// Seconds since the Unix epoch
    pub created_at: u64,
}

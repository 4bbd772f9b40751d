//! Error types for the NBA player comparison CLI

use thiserror::Error;

use crate::cli::types::PlayerId;


pub type Result<T> = std::result::Result<T, NbaError>;

#[derive(Error, Debug)]
pub enum NbaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse player ID: {0}")]
    InvalidPlayerId(#[from] std::num::ParseIntError),

    #[error("Invalid configuration: {message}")]
    Config { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error("Could not fetch stats for player: {name} ({reason})")]
    StatsUnavailable { name: String, reason: NotFound },
}

impl From<anyhow::Error> for NbaError {
    fn from(err: anyhow::Error) -> Self {
        NbaError::Storage {
            message: err.to_string(),
        }
    }
}

/// A failed call to the stats provider: network error, bad status, or a
/// payload that could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{operation} failed: {detail}")]
pub struct ProviderFault {
    pub operation: String,
    pub detail: String,
}

impl ProviderFault {
    pub fn new(operation: impl Into<String>, detail: impl ToString) -> Self {
        Self {
            operation: operation.into(),
            detail: detail.to_string(),
        }
    }

    /// Fault raised while fetching career stats for one player.
    pub fn career_stats(player_id: PlayerId, detail: impl ToString) -> Self {
        Self::new(format!("playercareerstats for player {player_id}"), detail)
    }
}

/// Explicit absence returned by the lookup and normalization pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFound {
    #[error("Player not found: {name}")]
    Player { name: String },

    #[error("No row matches season {season}")]
    Season { season: String },

    #[error("Season table has no season column")]
    SeasonColumn,

    #[error("Provider fault: {0}")]
    Provider(#[from] ProviderFault),
}

impl NotFound {
    /// The provider fault behind this absence, if any.
    pub fn fault(&self) -> Option<&ProviderFault> {
        match self {
            NotFound::Provider(fault) => Some(fault),
            _ => None,
        }
    }
}

//! NBA Player Comparison Library
//!
//! Resolves free-text player names to stats.nba.com identities and turns the
//! provider's loosely shaped career tables into one normalized record per
//! player: a single season's row, or career totals, plus points per game.
//!
//! ## Features
//!
//! - **Name Resolution**: exact match, provider ranking, then roster substring
//! - **Season Matching**: `"2023-24"`, `"2024"` and `"24"` all find the same row
//! - **Career Totals**: numeric columns summed across seasons
//! - **PPG Derivation**: versioned column mapping with heuristic fallback
//! - **Comparison History**: local SQLite record of past comparisons
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_compare::{core::ClientConfig, nba::NbaStatsClient, stats::*};
//!
//! # async fn example() -> nba_compare::Result<()> {
//! let provider = NbaStatsClient::new(ClientConfig::from_env()?)?;
//! let player = resolve_identity(&provider, "LeBron James").await?;
//! let stats = fetch_normalized_stats(&provider, player.id, Some("2024"), false).await?;
//! println!("{:?}", stats.ppg);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export NBA_STATS_BASE_URL=https://stats.nba.com/stats
//! export NBA_STATS_TIMEOUT_SECS=30
//! export NBA_STATS_ROSTER_SEASON=2024-25
//! export NBA_COMPARE_DB=~/.cache/nba-compare/history.db
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod logging;
pub mod nba;
pub mod stats;
pub mod storage;

// Re-export commonly used types
pub use cli::types::PlayerId;
pub use error::{NbaError, NotFound, ProviderFault, Result};
pub use nba::{NbaStatsClient, PlayerIdentity, StatsProvider};
pub use stats::{fetch_normalized_stats, resolve_identity, NormalizedStats, RawStats, SeasonRecord};

pub const BASE_URL_ENV_VAR: &str = "NBA_STATS_BASE_URL";
pub const TIMEOUT_ENV_VAR: &str = "NBA_STATS_TIMEOUT_SECS";
pub const ROSTER_SEASON_ENV_VAR: &str = "NBA_STATS_ROSTER_SEASON";
pub const DB_PATH_ENV_VAR: &str = "NBA_COMPARE_DB";

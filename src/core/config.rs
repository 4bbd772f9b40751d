//! Environment-driven configuration for the stats provider client.

use std::path::PathBuf;

use crate::core::cache::cache_base_dir;
use crate::error::{NbaError, Result};
use crate::{BASE_URL_ENV_VAR, DB_PATH_ENV_VAR, ROSTER_SEASON_ENV_VAR, TIMEOUT_ENV_VAR};

pub const DEFAULT_BASE_URL: &str = "https://stats.nba.com/stats";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ROSTER_SEASON: &str = "2024-25";

/// Settings for [`crate::nba::http::NbaStatsClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub roster_season: String,
    /// Ignore the on-disk roster cache and refetch.
    pub refresh_roster: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            roster_season: DEFAULT_ROSTER_SEASON.to_string(),
            refresh_roster: false,
        }
    }
}

impl ClientConfig {
    /// Read overrides from `NBA_STATS_BASE_URL`, `NBA_STATS_TIMEOUT_SECS`
    /// and `NBA_STATS_ROSTER_SEASON`; unset or empty variables keep defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_value)
    }

    /// Same as [`ClientConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(BASE_URL_ENV_VAR) {
            config.base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV_VAR) {
            config.timeout_secs = raw.parse().map_err(|_| NbaError::Config {
                message: format!("{TIMEOUT_ENV_VAR} must be a whole number of seconds, got {raw:?}"),
            })?;
        }

        if let Some(season) = lookup(ROSTER_SEASON_ENV_VAR) {
            config.roster_season = season;
        }

        Ok(config)
    }

    pub fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh_roster = refresh;
        self
    }
}

/// History database location: `NBA_COMPARE_DB`, else the cache dir.
pub fn history_db_path() -> PathBuf {
    history_db_path_from(env_value(DB_PATH_ENV_VAR))
}

fn history_db_path_from(configured: Option<String>) -> PathBuf {
    configured
        .map(PathBuf::from)
        .unwrap_or_else(|| cache_base_dir().join("history.db"))
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|v| non_empty(&v))
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

//! Helpers shared by the command handlers.

use crate::{
    core::ClientConfig,
    nba::{NbaStatsClient, PlayerIdentity, StatsProvider},
    stats::{fetch_normalized_stats, resolve_identity, NormalizedStats},
    NbaError, Result,
};

/// Build the stats.nba.com client from the environment.
pub fn build_provider(refresh: bool) -> Result<NbaStatsClient> {
    let config = ClientConfig::from_env()?.with_refresh(refresh);
    tracing::debug!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "provider configured");
    NbaStatsClient::new(config)
}

/// Resolve a name, turning absence into a command error.
pub async fn lookup_player<P>(provider: &P, name: &str) -> Result<PlayerIdentity>
where
    P: StatsProvider + ?Sized,
{
    Ok(resolve_identity(provider, name).await?)
}

/// Fetch normalized stats, turning absence into a command error that names
/// the player.
pub async fn lookup_stats<P>(
    provider: &P,
    player: &PlayerIdentity,
    season: Option<&str>,
    is_playoff: bool,
) -> Result<NormalizedStats>
where
    P: StatsProvider + ?Sized,
{
    fetch_normalized_stats(provider, player.id, season, is_playoff)
        .await
        .map_err(|reason| NbaError::StatsUnavailable {
            name: player.full_name.clone(),
            reason,
        })
}

/// Human-readable PPG.
pub fn format_ppg(ppg: Option<f64>) -> String {
    match ppg {
        Some(v) => format!("{v:.1} PPG"),
        None => "PPG unavailable".to_string(),
    }
}

/// Human-readable season scope.
pub fn season_label(season: Option<&str>) -> String {
    match season.filter(|s| !s.is_empty()) {
        Some(s) => format!("season {s}"),
        None => "career".to_string(),
    }
}

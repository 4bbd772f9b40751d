//! Seam between the normalization pipeline and the statistics provider.

use async_trait::async_trait;

use crate::cli::types::PlayerId;
use crate::error::ProviderFault;
use crate::nba::types::PlayerIdentity;
use crate::stats::RawTableSet;

/// Statistics provider, implemented by [`crate::nba::http::NbaStatsClient`]
/// and by in-memory fakes in tests.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Candidates from the provider's name index, in its own ranking order.
    async fn find_players_by_full_name(
        &self,
        name: &str,
    ) -> Result<Vec<PlayerIdentity>, ProviderFault>;

    /// Every player the provider knows, in roster order.
    async fn all_players(&self) -> Result<Vec<PlayerIdentity>, ProviderFault>;

    /// Career statistics tables for one player.
    async fn player_career_stats(&self, player_id: PlayerId)
        -> Result<RawTableSet, ProviderFault>;
}

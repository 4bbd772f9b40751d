use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use rayon::prelude::*;
use reqwest::Client;

use crate::cli::types::PlayerId;
use crate::core::{build_client, ClientConfig, MemoryCache};
use crate::error::ProviderFault;
use crate::nba::provider::StatsProvider;
use crate::nba::roster::{load_cached_roster, parse_roster, store_cached_roster};
use crate::nba::types::{PlayerIdentity, StatsEnvelope};
use crate::stats::RawTableSet;
use crate::Result;

/// NBA league id used by every stats.nba.com query.
pub const NBA_LEAGUE_ID: &str = "00";

const NAME_LOOKUP_CAPACITY: usize = 64;

/// stats.nba.com client implementing [`StatsProvider`].
pub struct NbaStatsClient {
    client: Client,
    config: ClientConfig,
    name_lookups: MemoryCache<String, Vec<PlayerIdentity>>,
    /// Set once a forced refresh has rewritten the roster cache.
    roster_refreshed: AtomicBool,
}

impl NbaStatsClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(&config)?,
            config,
            name_lookups: MemoryCache::new(NAME_LOOKUP_CAPACITY),
            roster_refreshed: AtomicBool::new(false),
        })
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.config.base_url, name)
    }

    /// GET one endpoint and decode its `resultSets` into tables.
    async fn get_tables(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> std::result::Result<RawTableSet, reqwest::Error> {
        let url = self.endpoint(endpoint);
        tracing::debug!(%url, ?params, "stats.nba.com request");

        let envelope = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<StatsEnvelope>()
            .await?;
        Ok(envelope.into_table_set())
    }

    async fn fetch_roster(&self) -> std::result::Result<Vec<PlayerIdentity>, ProviderFault> {
        let season = &self.config.roster_season;
        let params = [
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
            ("Season", season.clone()),
            ("IsOnlyCurrentSeason", "0".to_string()),
        ];

        let tables = self
            .get_tables("commonallplayers", &params)
            .await
            .map_err(|e| ProviderFault::new("commonallplayers", e))?;

        let roster = parse_roster(&tables);
        if roster.is_empty() {
            return Err(ProviderFault::new(
                "commonallplayers",
                "response contained no players",
            ));
        }
        tracing::info!(season = %season, players = roster.len(), "fetched roster");
        Ok(roster)
    }
}

/// Name-index match: every whitespace-separated token of `name` appears in
/// the candidate's full name, case-insensitively.
///
/// Any case-insensitive substring of the full name passes, so the resolver's
/// roster scan never finds a player this index missed.
pub fn matches_name_tokens(full_name: &str, name: &str) -> bool {
    let haystack = full_name.to_lowercase();
    let mut tokens = name.split_whitespace().peekable();
    tokens.peek().is_some() && tokens.all(|t| haystack.contains(&t.to_lowercase()))
}

#[async_trait]
impl StatsProvider for NbaStatsClient {
    async fn find_players_by_full_name(
        &self,
        name: &str,
    ) -> std::result::Result<Vec<PlayerIdentity>, ProviderFault> {
        let key = name.to_lowercase();
        if let Some(hit) = self.name_lookups.get(&key) {
            return Ok(hit);
        }

        let roster = self.all_players().await?;
        let candidates: Vec<PlayerIdentity> = roster
            .par_iter()
            .filter(|p| matches_name_tokens(&p.full_name, name))
            .cloned()
            .collect();

        self.name_lookups.put(key, candidates.clone());
        Ok(candidates)
    }

    async fn all_players(&self) -> std::result::Result<Vec<PlayerIdentity>, ProviderFault> {
        let season = &self.config.roster_season;
        let refresh = self.config.refresh_roster && !self.roster_refreshed.load(Ordering::Relaxed);
        if let Some(roster) = load_cached_roster(season, refresh) {
            return Ok(roster);
        }

        let roster = self.fetch_roster().await?;
        store_cached_roster(season, &roster);
        self.roster_refreshed.store(true, Ordering::Relaxed);
        Ok(roster)
    }

    async fn player_career_stats(
        &self,
        player_id: PlayerId,
    ) -> std::result::Result<RawTableSet, ProviderFault> {
        let params = [
            ("PlayerID", player_id.to_string()),
            ("PerMode", "Totals".to_string()),
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
        ];

        self.get_tables("playercareerstats", &params)
            .await
            .map_err(|e| ProviderFault::career_stats(player_id, e))
    }
}

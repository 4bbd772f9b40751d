//! In-memory provider shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use nba_compare::{
    stats::{Cell, RawTableSet, Table},
    PlayerId, PlayerIdentity, ProviderFault, StatsProvider,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const LEBRON: u64 = 2544;

/// Fixed roster and stats. The name index returns players whose full name
/// contains every query token, mirroring the stats.nba.com client.
#[derive(Default)]
pub struct InMemoryProvider {
    pub roster: Vec<PlayerIdentity>,
    pub stats: HashMap<PlayerId, RawTableSet>,
    pub index_disabled: bool,
    pub stats_calls: AtomicUsize,
}

impl InMemoryProvider {
    pub fn with_roster(names: &[(u64, &str)]) -> Self {
        Self {
            roster: names
                .iter()
                .map(|(id, name)| PlayerIdentity::new(PlayerId::new(*id), *name))
                .collect(),
            ..Self::default()
        }
    }

    pub fn with_stats(mut self, id: u64, tables: RawTableSet) -> Self {
        self.stats.insert(PlayerId::new(id), tables);
        self
    }

    /// Make the name index return nothing, forcing the roster scan.
    pub fn without_index(mut self) -> Self {
        self.index_disabled = true;
        self
    }
}

#[async_trait]
impl StatsProvider for InMemoryProvider {
    async fn find_players_by_full_name(
        &self,
        name: &str,
    ) -> Result<Vec<PlayerIdentity>, ProviderFault> {
        if self.index_disabled {
            return Ok(Vec::new());
        }
        let tokens: Vec<String> = name.split_whitespace().map(str::to_lowercase).collect();
        Ok(self
            .roster
            .iter()
            .filter(|p| {
                let full = p.full_name.to_lowercase();
                !tokens.is_empty() && tokens.iter().all(|t| full.contains(t))
            })
            .cloned()
            .collect())
    }

    async fn all_players(&self) -> Result<Vec<PlayerIdentity>, ProviderFault> {
        Ok(self.roster.clone())
    }

    async fn player_career_stats(&self, player_id: PlayerId) -> Result<RawTableSet, ProviderFault> {
        self.stats_calls.fetch_add(1, Ordering::SeqCst);
        self.stats
            .get(&player_id)
            .cloned()
            .ok_or_else(|| ProviderFault::career_stats(player_id, "connection reset by peer"))
    }
}

/// Roster with a few similar names.
pub fn league() -> InMemoryProvider {
    InMemoryProvider::with_roster(&[
        (2544, "LeBron James"),
        (1628389, "Bronny James"),
        (201939, "Stephen Curry"),
        (203076, "Anthony Davis"),
    ])
}

/// LeBron's last two regular seasons, preceded by a career table
/// without a season column.
pub fn lebron_tables() -> RawTableSet {
    RawTableSet::new(vec![
        Table::new(
            vec!["PLAYER_ID".into(), "PTS".into()],
            vec![vec![Cell::from(2544_i64), Cell::from(40474_i64)]],
        )
        .named("CareerTotalsRegularSeason"),
        Table::new(
            vec!["Season".into(), "PTS".into(), "G".into()],
            vec![
                vec![Cell::from("2022-23"), Cell::from(1590_i64), Cell::from(55_i64)],
                vec![Cell::from("2023-24"), Cell::from(1800_i64), Cell::from(60_i64)],
            ],
        )
        .named("SeasonTotalsRegularSeason"),
    ])
}

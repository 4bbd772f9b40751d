//! Unit tests for command handlers

use super::common::*;
use super::compare::*;
use super::history::handle_history;
use super::player_stats::*;
use crate::{
    cli::types::PlayerId,
    error::{NotFound, ProviderFault},
    nba::{PlayerIdentity, StatsProvider},
    stats::{Cell, RawTableSet, Table},
    storage::HistoryDatabase,
    NbaError,
};
use async_trait::async_trait;
use std::collections::HashMap;

struct FakeProvider {
    roster: Vec<PlayerIdentity>,
    stats: HashMap<PlayerId, RawTableSet>,
}

impl FakeProvider {
    fn new() -> Self {
        let roster = vec![
            PlayerIdentity::new(PlayerId::new(2544), "LeBron James"),
            PlayerIdentity::new(PlayerId::new(201939), "Stephen Curry"),
            PlayerIdentity::new(PlayerId::new(1), "Nobody Withstats"),
        ];
        let mut stats = HashMap::new();
        stats.insert(PlayerId::new(2544), season_tables(&[("2023-24", 1822, 71)]));
        stats.insert(PlayerId::new(201939), season_tables(&[("2023-24", 1956, 74)]));
        Self { roster, stats }
    }
}

fn season_tables(rows: &[(&str, i64, i64)]) -> RawTableSet {
    RawTableSet::new(vec![Table::new(
        vec!["SEASON_ID".into(), "PTS".into(), "GP".into()],
        rows.iter()
            .map(|(s, p, g)| vec![Cell::from(*s), Cell::from(*p), Cell::from(*g)])
            .collect(),
    )])
}

#[async_trait]
impl StatsProvider for FakeProvider {
    async fn find_players_by_full_name(
        &self,
        name: &str,
    ) -> Result<Vec<PlayerIdentity>, ProviderFault> {
        let wanted = name.to_lowercase();
        Ok(self
            .roster
            .iter()
            .filter(|p| p.full_name.to_lowercase() == wanted)
            .cloned()
            .collect())
    }

    async fn all_players(&self) -> Result<Vec<PlayerIdentity>, ProviderFault> {
        Ok(self.roster.clone())
    }

    async fn player_career_stats(&self, player_id: PlayerId) -> Result<RawTableSet, ProviderFault> {
        self.stats
            .get(&player_id)
            .cloned()
            .ok_or_else(|| ProviderFault::career_stats(player_id, "HTTP status 500"))
    }
}

fn params(player1: &str, player2: &str, season: Option<&str>) -> CompareParams {
    CompareParams {
        player1: player1.to_string(),
        player2: player2.to_string(),
        season: season.map(str::to_string),
        is_playoff: false,
    }
}

#[cfg(test)]
mod compare_tests {
    use super::*;

    #[tokio::test]
    async fn test_compare_records_history() {
        let provider = FakeProvider::new();
        let mut db = HistoryDatabase::new_in_memory().unwrap();

        let response = compare_players(
            &provider,
            &mut db,
            &params("lebron james", "  Stephen Curry ", Some("2024")),
        )
        .await
        .unwrap();

        assert_eq!(response.player1.full_name, "LeBron James");
        assert_eq!(response.player1.stats.ppg, Some(25.7));
        assert_eq!(response.player2.stats.ppg, Some(26.4));

        let history = db.recent_comparisons(10).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].player2, "Stephen Curry");
        assert_eq!(history[0].season1.as_deref(), Some("2024"));
    }

    #[tokio::test]
    async fn test_compare_unknown_player_records_nothing() {
        let provider = FakeProvider::new();
        let mut db = HistoryDatabase::new_in_memory().unwrap();

        let result = compare_players(&provider, &mut db, &params("LeBron James", "Zzz", None)).await;

        match result {
            Err(NbaError::NotFound(NotFound::Player { name })) => assert_eq!(name, "Zzz"),
            other => panic!("Expected player not found, got {other:?}"),
        }
        assert_eq!(db.comparison_count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_compare_stats_failure_names_player() {
        let provider = FakeProvider::new();
        let mut db = HistoryDatabase::new_in_memory().unwrap();

        let result = compare_players(
            &provider,
            &mut db,
            &params("LeBron James", "Nobody Withstats", None),
        )
        .await;

        match result {
            Err(NbaError::StatsUnavailable { name, reason }) => {
                assert_eq!(name, "Nobody Withstats");
                assert!(reason.fault().is_some());
            }
            other => panic!("Expected StatsUnavailable, got {other:?}"),
        }
        assert_eq!(db.comparison_count().unwrap(), 0);
    }
}

#[cfg(test)]
mod player_stats_tests {
    use super::*;

    #[tokio::test]
    async fn test_player_report_unmatched_season() {
        let provider = FakeProvider::new();

        let result = player_report(&provider, "LeBron James", Some("1990"), false).await;
        assert!(matches!(
            result,
            Err(NbaError::StatsUnavailable {
                reason: NotFound::Season { .. },
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_player_report_career() {
        let provider = FakeProvider::new();

        let report = player_report(&provider, "Stephen Curry", None, false)
            .await
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["full_name"], "Stephen Curry");
        assert_eq!(json["player_id"], 201939);
        assert_eq!(json["raw"]["career_aggregated"], true);
    }
}

#[cfg(test)]
mod history_tests {
    use super::*;

    #[tokio::test]
    async fn test_history_clear_removes_every_comparison() {
        let provider = FakeProvider::new();
        let mut db = HistoryDatabase::new_in_memory().unwrap();
        for _ in 0..3 {
            compare_players(
                &provider,
                &mut db,
                &params("LeBron James", "Stephen Curry", None),
            )
            .await
            .unwrap();
        }

        handle_history(&mut db, 2, false, true).unwrap();
        assert_eq!(db.comparison_count().unwrap(), 3);

        handle_history(&mut db, 2, true, false).unwrap();
        assert_eq!(db.comparison_count().unwrap(), 0);
        assert!(db.recent_comparisons(20).unwrap().is_empty());
    }
}

#[cfg(test)]
mod format_tests {
    use super::*;

    #[test]
    fn test_format_ppg() {
        assert_eq!(format_ppg(Some(30.0)), "30.0 PPG");
        assert_eq!(format_ppg(None), "PPG unavailable");
    }

    #[test]
    fn test_season_label() {
        assert_eq!(season_label(Some("2023-24")), "season 2023-24");
        assert_eq!(season_label(Some("")), "career");
        assert_eq!(season_label(None), "career");
    }
}

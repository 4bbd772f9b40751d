//! Compare command implementation

use serde::Serialize;

use crate::{
    commands::common::{format_ppg, lookup_player, lookup_stats, season_label},
    commands::player_stats::PlayerReport,
    nba::StatsProvider,
    storage::{HistoryDatabase, NewComparison},
    Result,
};

/// Result of comparing two players for the same season scope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareResponse {
    pub season: Option<String>,
    pub is_playoff: bool,
    pub player1: PlayerReport,
    pub player2: PlayerReport,
}

/// Parameters for the compare command
#[derive(Debug, Clone)]
pub struct CompareParams {
    pub player1: String,
    pub player2: String,
    pub season: Option<String>,
    pub is_playoff: bool,
}

/// Resolve both players, fetch their stats, and record the comparison.
///
/// Nothing is recorded unless both players resolve and both stats fetches
/// succeed.
pub async fn compare_players<P>(
    provider: &P,
    db: &mut HistoryDatabase,
    params: &CompareParams,
) -> Result<CompareResponse>
where
    P: StatsProvider + ?Sized,
{
    let p1 = lookup_player(provider, &params.player1).await?;
    let p2 = lookup_player(provider, &params.player2).await?;

    let season = params.season.as_deref();
    let stats1 = lookup_stats(provider, &p1, season, params.is_playoff).await?;
    let stats2 = lookup_stats(provider, &p2, season, params.is_playoff).await?;

    let stored = db.insert_comparison(&NewComparison {
        player1: p1.full_name.clone(),
        player1_id: p1.id,
        season1: params.season.clone(),
        player2: p2.full_name.clone(),
        player2_id: p2.id,
        season2: params.season.clone(),
        is_playoff: params.is_playoff,
    })?;
    tracing::info!(id = stored.id, player1 = %p1.full_name, player2 = %p2.full_name, "comparison recorded");

    Ok(CompareResponse {
        season: params.season.clone(),
        is_playoff: params.is_playoff,
        player1: PlayerReport {
            full_name: p1.full_name,
            stats: stats1,
        },
        player2: PlayerReport {
            full_name: p2.full_name,
            stats: stats2,
        },
    })
}

/// Handle the compare command
pub async fn handle_compare<P>(
    provider: &P,
    db: &mut HistoryDatabase,
    params: CompareParams,
    as_json: bool,
) -> Result<()>
where
    P: StatsProvider + ?Sized,
{
    let response = compare_players(provider, db, &params).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&response)?); // tarpaulin::skip
        return Ok(());
    }

    println!("{}", season_label(response.season.as_deref())); // tarpaulin::skip
    for report in [&response.player1, &response.player2] {
        println!(
            "  {:<28} {}",
            report.full_name,
            format_ppg(report.stats.ppg)
        ); // tarpaulin::skip
    }
    if let (Some(a), Some(b)) = (response.player1.stats.ppg, response.player2.stats.ppg) {
        let leader = if a >= b {
            &response.player1.full_name
        } else {
            &response.player2.full_name
        };
        println!("  {} leads by {:.1}", leader, (a - b).abs()); // tarpaulin::skip
    }

    Ok(())
}

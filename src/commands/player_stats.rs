//! Single player stats command implementation

use serde::Serialize;

use crate::{
    commands::common::{format_ppg, lookup_player, lookup_stats, season_label},
    nba::StatsProvider,
    stats::NormalizedStats,
    Result,
};

/// One player's resolved name and normalized stats
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerReport {
    pub full_name: String,
    #[serde(flatten)]
    pub stats: NormalizedStats,
}

/// Resolve `name` and fetch its normalized stats.
pub async fn player_report<P>(
    provider: &P,
    name: &str,
    season: Option<&str>,
    is_playoff: bool,
) -> Result<PlayerReport>
where
    P: StatsProvider + ?Sized,
{
    let player = lookup_player(provider, name).await?;
    let stats = lookup_stats(provider, &player, season, is_playoff).await?;
    Ok(PlayerReport {
        full_name: player.full_name,
        stats,
    })
}

/// Handle the player-stats command
pub async fn handle_player_stats<P>(
    provider: &P,
    name: &str,
    season: Option<&str>,
    is_playoff: bool,
    as_json: bool,
) -> Result<()>
where
    P: StatsProvider + ?Sized,
{
    let report = player_report(provider, name, season, is_playoff).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?); // tarpaulin::skip
    } else {
        println!(
            "{} [{}], {}: {}",
            report.full_name,
            report.stats.player_id,
            season_label(season),
            format_ppg(report.stats.ppg)
        ); // tarpaulin::skip
    }

    Ok(())
}

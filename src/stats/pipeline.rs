//! Fetch-and-normalize pipeline: locate, match or aggregate, derive PPG.

use serde::Serialize;

use super::career::aggregate;
use super::metrics::derive_ppg;
use super::record::SeasonRecord;
use super::schema::SchemaMapping;
use super::season::match_season;
use super::table::{locate, RawTableSet, Table};
use crate::cli::types::PlayerId;
use crate::error::NotFound;
use crate::nba::provider::StatsProvider;


/// Either a single normalized record, or every table untouched when no
/// season-bearing table was found.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawStats {
    Record(SeasonRecord),
    Tables(RawTableSet),
}

impl RawStats {
    pub fn record(&self) -> Option<&SeasonRecord> {
        match self {
            RawStats::Record(record) => Some(record),
            RawStats::Tables(_) => None,
        }
    }
}

/// Terminal output of the pipeline for one player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedStats {
    pub player_id: PlayerId,
    pub ppg: Option<f64>,
    pub raw: RawStats,
}

/// Fetch a player's career tables and normalize them.
///
/// `season` selects one season's row; `None` or an empty string selects
/// career totals. A provider fault is logged and returned as
/// [`NotFound::Provider`]; it is never retried.
///
/// `is_playoff` is accepted for callers but does not change the query:
/// regular-season and playoff tables come back together and the first
/// season-bearing table is used.
pub async fn fetch_normalized_stats<P>(
    provider: &P,
    player_id: PlayerId,
    season: Option<&str>,
    is_playoff: bool,
) -> Result<NormalizedStats, NotFound>
where
    P: StatsProvider + ?Sized,
{
    if is_playoff {
        tracing::debug!(%player_id, "playoff flag set; query is unchanged");
    }

    let tables = provider
        .player_career_stats(player_id)
        .await
        .inspect_err(|fault| {
            tracing::error!(%player_id, %fault, "stats provider request failed");
        })?;

    normalize_tables(player_id, tables, season, &SchemaMapping::default())
}

/// Pure part of [`fetch_normalized_stats`], run on an already fetched set.
pub fn normalize_tables(
    player_id: PlayerId,
    tables: RawTableSet,
    season: Option<&str>,
    mapping: &SchemaMapping,
) -> Result<NormalizedStats, NotFound> {
    let located = locate(&tables).map(Table::with_lowercase_columns);
    let Some(table) = located else {
        tracing::info!(%player_id, tables = tables.tables.len(), "no season table; returning raw tables");
        return Ok(NormalizedStats {
            player_id,
            ppg: None,
            raw: RawStats::Tables(tables),
        });
    };

    let record = match season.filter(|s| !s.is_empty()) {
        Some(season) => match_season(&table, season, mapping).inspect_err(|reason| {
            tracing::info!(%player_id, season, %reason, "season not matched");
        })?,
        None => aggregate(&table),
    };

    let ppg = derive_ppg(&record, mapping);
    if ppg.is_none() {
        tracing::debug!(%player_id, "points per game unavailable");
    }

    Ok(NormalizedStats {
        player_id,
        ppg,
        raw: RawStats::Record(record),
    })
}

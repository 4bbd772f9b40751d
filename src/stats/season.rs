//! Selection of a single season's row from the located table.

use super::record::SeasonRecord;
use super::schema::SchemaMapping;
use super::table::{Table, SEASON_MARKER};
use crate::error::NotFound;


/// Pick the season key column: a mapped label first, then the first label
/// containing `"season"`. Labels are expected to be lower-cased already.
pub fn season_column(table: &Table, mapping: &SchemaMapping) -> Option<usize> {
    mapping.season_column(table).or_else(|| {
        table
            .columns
            .iter()
            .position(|c| c.contains(SEASON_MARKER))
    })
}

/// Return the first row whose season cell contains `season`.
///
/// A four-character `season` with no direct hit is retried on its last two
/// characters, so `"2024"` finds a row encoded `"2023-24"`. `season` must be
/// non-empty; an empty needle matches the first row with a season value.
pub fn match_season(
    table: &Table,
    season: &str,
    mapping: &SchemaMapping,
) -> Result<SeasonRecord, NotFound> {
    let col = season_column(table, mapping).ok_or(NotFound::SeasonColumn)?;

    let row = first_row_containing(table, col, season).or_else(|| {
        if season.chars().count() == 4 {
            let short: String = season.chars().skip(2).collect();
            tracing::debug!(season, short = %short, "retrying season match on short year");
            first_row_containing(table, col, &short)
        } else {
            None
        }
    });

    let Some(row) = row else {
        return Err(NotFound::Season {
            season: season.to_string(),
        });
    };

    let fields = table
        .row_pairs(row)
        .map(|(label, cell)| (label.to_string(), cell.clone()))
        .collect();
    Ok(SeasonRecord::new(fields))
}

fn first_row_containing(table: &Table, col: usize, needle: &str) -> Option<usize> {
    (0..table.rows.len()).find(|&row| {
        table
            .cell(row, col)
            .to_text()
            .is_some_and(|text| text.contains(needle))
    })
}

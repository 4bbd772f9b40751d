//! Points-per-game derivation from heuristically identified columns.

use super::record::SeasonRecord;
use super::schema::SchemaMapping;

#[cfg(test)]
mod tests;

const GAMES_EXACT: [&str; 3] = ["g", "games", "games_played"];

/// Label of the total-points column: mapped label first, then the first
/// label containing `"pts"` or `"points"`.
pub fn points_label<'a>(record: &'a SeasonRecord, mapping: &SchemaMapping) -> Option<&'a str> {
    mapping.points_label(record).or_else(|| {
        record
            .labels()
            .find(|l| l.contains("pts") || l.contains("points"))
    })
}

/// Label of the games-played column: mapped label first, then the first
/// label that is `g`/`games`/`games_played` or contains `"games"`.
pub fn games_label<'a>(record: &'a SeasonRecord, mapping: &SchemaMapping) -> Option<&'a str> {
    mapping.games_label(record).or_else(|| {
        record
            .labels()
            .find(|l| GAMES_EXACT.contains(l) || l.contains("games"))
    })
}

/// Points per game rounded to one decimal (exact ties to even), or `None`
/// when the columns are missing, non-numeric, or games is not positive.
pub fn derive_ppg(record: &SeasonRecord, mapping: &SchemaMapping) -> Option<f64> {
    let points = points_label(record, mapping)
        .and_then(|label| record.get(label))
        .and_then(|cell| cell.to_number())?;
    let games = games_label(record, mapping)
        .and_then(|label| record.get(label))
        .and_then(|cell| cell.to_number())?;

    if games <= 0.0 {
        return None;
    }

    let ppg = points / games;
    if !ppg.is_finite() {
        return None;
    }
    round_one_decimal(ppg)
}

/// Correctly rounded to one decimal; an exact binary tie such as 2.25 goes
/// to the even digit.
fn round_one_decimal(value: f64) -> Option<f64> {
    format!("{value:.1}").parse().ok()
}

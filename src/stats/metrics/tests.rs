//! Unit tests for points-per-game derivation

use super::*;
use crate::stats::value::Cell;

fn record(fields: &[(&str, Cell)]) -> SeasonRecord {
    SeasonRecord::new(
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
    )
}

fn nba() -> SchemaMapping {
    SchemaMapping::STATS_NBA_V1
}

#[cfg(test)]
mod ppg_tests {
    use super::*;

    #[test]
    fn test_ppg_basic() {
        let r = record(&[("pts", Cell::from(82_i64)), ("games", Cell::from(41_i64))]);
        assert_eq!(derive_ppg(&r, &nba()), Some(2.0));
    }

    #[test]
    fn test_ppg_zero_games() {
        let r = record(&[("pts", Cell::from(82_i64)), ("games", Cell::from(0_i64))]);
        assert_eq!(derive_ppg(&r, &nba()), None);
    }

    #[test]
    fn test_ppg_missing_points() {
        let r = record(&[("games", Cell::from(41_i64))]);
        assert_eq!(derive_ppg(&r, &nba()), None);
    }

    #[test]
    fn test_ppg_missing_games() {
        let r = record(&[("pts", Cell::from(82_i64)), ("min", Cell::from(2000_i64))]);
        assert_eq!(derive_ppg(&r, &nba()), None);
    }

    #[test]
    fn test_ppg_non_numeric_values() {
        let r = record(&[("pts", Cell::from("lots")), ("g", Cell::from(10_i64))]);
        assert_eq!(derive_ppg(&r, &nba()), None);

        let r = record(&[("pts", Cell::Absent), ("g", Cell::from(10_i64))]);
        assert_eq!(derive_ppg(&r, &nba()), None);
    }

    #[test]
    fn test_ppg_numeric_text_values() {
        let r = record(&[("pts", Cell::from("100")), ("g", Cell::from("8"))]);
        assert_eq!(derive_ppg(&r, &nba()), Some(12.5));
    }

    #[test]
    fn test_ppg_rounds_to_one_decimal() {
        let r = record(&[("pts", Cell::from(1822_i64)), ("gp", Cell::from(71_i64))]);
        assert_eq!(derive_ppg(&r, &nba()), Some(25.7));
    }

    #[test]
    fn test_ppg_exact_ties_round_to_even() {
        let r = record(&[("pts", Cell::from(9_i64)), ("g", Cell::from(4_i64))]);
        assert_eq!(derive_ppg(&r, &nba()), Some(2.2));

        let r = record(&[("pts", Cell::from(1850_i64)), ("g", Cell::from(40_i64))]);
        assert_eq!(derive_ppg(&r, &nba()), Some(46.2));

        let r = record(&[("pts", Cell::from(15_i64)), ("g", Cell::from(4_i64))]);
        assert_eq!(derive_ppg(&r, &nba()), Some(3.8));

        let r = record(&[("pts", Cell::from(505_i64)), ("g", Cell::from(20_i64))]);
        assert_eq!(derive_ppg(&r, &nba()), Some(25.2));
    }

    #[test]
    fn test_ppg_zero_points() {
        let r = record(&[("pts", Cell::from(0_i64)), ("g", Cell::from(3_i64))]);
        assert_eq!(derive_ppg(&r, &nba()), Some(0.0));
    }

    #[test]
    fn test_ppg_negative_games() {
        let r = record(&[("pts", Cell::from(10_i64)), ("g", Cell::from(-2_i64))]);
        assert_eq!(derive_ppg(&r, &nba()), None);
    }
}

#[cfg(test)]
mod label_tests {
    use super::*;

    #[test]
    fn test_mapped_points_label_beats_heuristic() {
        let r = record(&[("fg_pts_pct", Cell::from(0.5)), ("pts", Cell::from(10_i64))]);
        assert_eq!(points_label(&r, &nba()), Some("pts"));
        assert_eq!(points_label(&r, &SchemaMapping::HEURISTIC_ONLY), Some("fg_pts_pct"));
    }

    #[test]
    fn test_points_heuristic_matches_points_substring() {
        let r = record(&[("total_points", Cell::from(10_i64))]);
        assert_eq!(points_label(&r, &nba()), Some("total_points"));
    }

    #[test]
    fn test_mapped_games_label_covers_gp() {
        let r = record(&[("gs", Cell::from(60_i64)), ("gp", Cell::from(71_i64))]);
        assert_eq!(games_label(&r, &nba()), Some("gp"));
        // Heuristics alone do not recognise "gp"
        assert_eq!(games_label(&r, &SchemaMapping::HEURISTIC_ONLY), None);
    }

    #[test]
    fn test_games_heuristic_single_pass_in_record_order() {
        let r = record(&[("games_started", Cell::from(5_i64)), ("g", Cell::from(10_i64))]);
        assert_eq!(games_label(&r, &SchemaMapping::HEURISTIC_ONLY), Some("games_started"));
    }
}

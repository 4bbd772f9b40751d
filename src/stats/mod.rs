//! Normalization of provider tables into per-season or career records.
//!
//! - `identity`: name to player identity
//! - `table`: provider tables and season-table location
//! - `season`: season row matching with short-year fallback
//! - `career`: career totals
//! - `metrics`: points-per-game derivation
//! - `schema`: versioned column-label mapping
//! - `pipeline`: the fetch-and-normalize entry point

pub mod career;
pub mod identity;
pub mod metrics;
pub mod pipeline;
pub mod record;
pub mod schema;
pub mod season;
pub mod table;
pub mod value;

pub use identity::resolve_identity;
pub use pipeline::{fetch_normalized_stats, normalize_tables, NormalizedStats, RawStats};
pub use record::SeasonRecord;
pub use schema::SchemaMapping;
pub use table::{RawTableSet, Table};
pub use value::Cell;

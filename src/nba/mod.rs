//! stats.nba.com provider: wire types, HTTP client and roster cache.

pub mod http;
pub mod provider;
pub mod roster;
pub mod types;

pub use http::NbaStatsClient;
pub use provider::StatsProvider;
pub use types::PlayerIdentity;

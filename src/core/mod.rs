//! Core utilities for the NBA comparison CLI
//!
//! - `cache`: File system caching and an in-memory LRU memo
//! - `config`: Environment-driven settings
//! - `http`: stats.nba.com request headers and client construction

pub mod cache;
pub mod config;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{roster_cache_path, try_read_to_string, write_string, MemoryCache};
pub use config::{history_db_path, ClientConfig};
pub use http::{build_client, stats_header_map};

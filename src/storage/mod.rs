//! Storage layer for comparison history
//!
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Insert and listing operations

pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::HistoryDatabase;

//! Type-safe wrappers for NBA stats data.

pub mod ids;

pub use ids::PlayerId;

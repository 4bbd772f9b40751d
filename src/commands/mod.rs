//! Command implementations for the NBA comparison CLI

pub mod common;
pub mod compare;
pub mod find_player;
pub mod history;
pub mod player_stats;

#[cfg(test)]
mod tests;

//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};

use crate::storage::queries::MAX_HISTORY_LIMIT;

/// Season scope shared by the stats commands
#[derive(Debug, Args)]
pub struct SeasonArgs {
    /// Season to select, e.g. `2023-24`, `2024` or `24`. Omit for career totals.
    #[clap(long, short)]
    pub season: Option<String>,

    /// Request playoff stats. Accepted but does not change the query yet.
    #[clap(long)]
    pub playoff: bool,

    /// Refetch the player roster instead of using the cached copy.
    #[clap(long)]
    pub refresh: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare two players' points per game and record the comparison.
    Compare {
        /// First player's name.
        player1: String,

        /// Second player's name.
        player2: String,

        #[clap(flatten)]
        scope: SeasonArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show one player's normalized stats.
    Player {
        /// Player name.
        name: String,

        #[clap(flatten)]
        scope: SeasonArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Resolve a name to a player identity.
    Find {
        /// Player name (exact, partial, any case).
        name: String,

        /// Refetch the player roster instead of using the cached copy.
        #[clap(long)]
        refresh: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List recent comparisons, newest first.
    History {
        /// Number of comparisons to show.
        #[clap(long, short, default_value_t = 20,
               value_parser = clap::value_parser!(u16).range(1..=MAX_HISTORY_LIMIT as i64))]
        limit: u16,

        /// Delete every recorded comparison instead of listing.
        #[clap(long)]
        clear: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "nba-compare", about = "Compare NBA players' per-season and career stats")]
pub struct NbaCompare {
    /// Log debug details to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

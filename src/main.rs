//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nba_compare::{
    cli::{Commands, NbaCompare},
    commands::{
        common::build_provider,
        compare::{handle_compare, CompareParams},
        find_player::handle_find_player,
        history::handle_history,
        player_stats::handle_player_stats,
    },
    logging::init_logging,
    storage::HistoryDatabase,
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = NbaCompare::parse();
    init_logging(app.verbose);

    match app.command {
        Commands::Compare {
            player1,
            player2,
            scope,
            json,
        } => {
            let provider = build_provider(scope.refresh)?;
            let mut db = HistoryDatabase::new()?;
            handle_compare(
                &provider,
                &mut db,
                CompareParams {
                    player1,
                    player2,
                    season: scope.season,
                    is_playoff: scope.playoff,
                },
                json,
            )
            .await?
        }

        Commands::Player { name, scope, json } => {
            let provider = build_provider(scope.refresh)?;
            handle_player_stats(
                &provider,
                &name,
                scope.season.as_deref(),
                scope.playoff,
                json,
            )
            .await?
        }

        Commands::Find {
            name,
            refresh,
            json,
        } => {
            let provider = build_provider(refresh)?;
            handle_find_player(&provider, &name, json).await?
        }

        Commands::History { limit, clear, json } => {
            let mut db = HistoryDatabase::new()?;
            handle_history(&mut db, usize::from(limit), clear, json)?
        }
    }

    Ok(())
}

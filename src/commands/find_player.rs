//! Find player command implementation

use crate::{commands::common::lookup_player, nba::StatsProvider, Result};

/// Handle the find-player command
pub async fn handle_find_player<P>(provider: &P, name: &str, as_json: bool) -> Result<()>
where
    P: StatsProvider + ?Sized,
{
    let player = lookup_player(provider, name).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&player)?); // tarpaulin::skip
    } else {
        let status = if player.is_active { "active" } else { "inactive" };
        println!("{} [{}] ({})", player.full_name, player.id, status); // tarpaulin::skip
    }

    Ok(())
}

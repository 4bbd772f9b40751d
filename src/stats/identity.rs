//! Free-text name to canonical player identity.

use rayon::prelude::*;

use crate::error::NotFound;
use crate::nba::provider::StatsProvider;
use crate::nba::types::PlayerIdentity;

/// Resolve `name` to one identity.
///
/// Order: exact case-insensitive match among the provider's candidates,
/// then the provider's top candidate, then the first roster player whose
/// full name contains `name`. A provider fault ends the lookup.
pub async fn resolve_identity<P>(provider: &P, name: &str) -> Result<PlayerIdentity, NotFound>
where
    P: StatsProvider + ?Sized,
{
    let name = name.trim();
    let wanted = name.to_lowercase();

    let candidates = provider
        .find_players_by_full_name(name)
        .await
        .inspect_err(|fault| tracing::warn!(name, %fault, "player name lookup failed"))?;

    if let Some(best) = pick_candidate(candidates, &wanted) {
        tracing::debug!(name, player_id = %best.id, "resolved from name index");
        return Ok(best);
    }

    let roster = provider
        .all_players()
        .await
        .inspect_err(|fault| tracing::warn!(name, %fault, "roster lookup failed"))?;

    match roster
        .par_iter()
        .find_first(|p| p.full_name.to_lowercase().contains(&wanted))
    {
        Some(player) => {
            tracing::debug!(name, player_id = %player.id, "resolved from roster scan");
            Ok(player.clone())
        }
        None => Err(NotFound::Player {
            name: name.to_string(),
        }),
    }
}

/// Exact (case-insensitive) match first, otherwise the top-ranked candidate.
fn pick_candidate(candidates: Vec<PlayerIdentity>, wanted: &str) -> Option<PlayerIdentity> {
    let exact = candidates
        .iter()
        .position(|p| p.full_name.to_lowercase() == wanted)
        .unwrap_or(0);
    candidates.into_iter().nth(exact)
}

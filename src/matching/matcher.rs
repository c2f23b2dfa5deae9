use crate::game::Outcome;
use crate::game::Profile;

/// Whether the observed outcome is consistent with the equilibria.
///
/// Each player's observed action must be that player's most likely action
/// in *some* profile. Different players may be matched by different
/// profiles, so an outcome can validate by combining best responses from
/// two equilibria that are not compatible with each other; see `coherent`
/// for the strict reading. Outcomes naming an unknown player, or missing
/// a known one, never match.
pub fn matches(outcome: &Outcome, profiles: &[Profile], players: &[String]) -> bool {
    if !outcome.players().all(|p| players.iter().any(|q| q == p)) {
        log::debug!("outcome names players outside {:?}", players);
        return false;
    }
    players.iter().all(|player| match outcome.action(player) {
        None => false,
        Some(action) => profiles
            .iter()
            .filter_map(|profile| profile.best_response(player))
            .any(|best| best == action),
    })
}

/// Whether a single profile explains the whole outcome.
pub fn coherent(outcome: &Outcome, profiles: &[Profile], players: &[String]) -> bool {
    profiles.iter().any(|profile| {
        players.iter().all(|player| {
            outcome
                .action(player)
                .is_some_and(|action| profile.best_response(player) == Some(action))
        })
    })
}

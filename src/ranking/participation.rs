use std::collections::HashMap;

use crate::config::roster::Roster;
use crate::config::settings::RankingSettings;
use crate::domain::{PlayerName, Round};
use crate::ranking::validity::valid_rounds;

/// Counted-round participation per roster player. Every roster player is
/// present in the result, zero-count players included; invalid rounds
/// never contribute.
pub fn participation_counts(
    roster: &Roster,
    rounds: &[Round],
    settings: &RankingSettings,
) -> HashMap<PlayerName, usize> {
    let mut counts: HashMap<PlayerName, usize> =
        roster.players().map(|p| (p.to_string(), 0)).collect();

    for round in valid_rounds(rounds, settings) {
        for player in roster.players() {
            if round.scores.get(player).is_some_and(|e| e.has_score()) {
                if let Some(count) = counts.get_mut(player) {
                    *count += 1;
                }
            }
        }
    }

    counts
}

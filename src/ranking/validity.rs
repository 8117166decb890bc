use crate::config::settings::RankingSettings;
use crate::domain::Round;

/// Number of players with a recorded, non-zero score in this round.
pub fn count_scorers(round: &Round) -> usize {
    round.scores.values().filter(|e| e.has_score()).count()
}

/// A round counts toward rankings and statistics only with enough scored
/// players. Evaluated fresh on every call; validity is never cached on
/// the round.
pub fn is_valid(round: &Round, settings: &RankingSettings) -> bool {
    count_scorers(round) >= settings.min_participants
}

/// The counted subset of a season's rounds, in stored (chronological
/// entry) order.
pub fn valid_rounds<'a>(rounds: &'a [Round], settings: &RankingSettings) -> Vec<&'a Round> {
    rounds.iter().filter(|r| is_valid(r, settings)).collect()
}

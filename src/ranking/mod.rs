pub mod handicap;
#[cfg(test)]
pub(crate) mod test_support;
pub mod leaderboard;
pub mod participation;
pub mod stats;
pub mod types;
pub mod validity;

pub use handicap::{handicap_for, normalize};
pub use leaderboard::{best_score_standings, overall_standings, putt_standings};
pub use participation::participation_counts;
pub use stats::{best_putt_average, best_score, personal_stats, season_summary};
pub use types::{
    AverageStanding, AwardBadge, BestPuttHolder, BestScoreHolder, BestScoreStanding,
    PersonalStats, PuttStanding, SeasonSummary,
};
pub use validity::{count_scorers, is_valid, valid_rounds};

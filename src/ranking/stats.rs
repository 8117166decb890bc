use crate::config::roster::Roster;
use crate::config::settings::RankingSettings;
use crate::domain::Round;
use crate::ranking::participation::participation_counts;
use crate::ranking::types::{BestPuttHolder, BestScoreHolder, PersonalStats, SeasonSummary};
use crate::ranking::validity::valid_rounds;

/// Lowest raw score of the season among players with enough counted
/// rounds. Ties resolve to the first minimum found: roster order outer,
/// chronological round order inner, strict less-than. Handicaps never
/// apply here.
pub fn best_score(
    roster: &Roster,
    rounds: &[Round],
    settings: &RankingSettings,
) -> Option<BestScoreHolder> {
    let counts = participation_counts(roster, rounds, settings);
    let valid = valid_rounds(rounds, settings);

    let mut best: Option<BestScoreHolder> = None;
    for player in roster.players() {
        if counts[player] < settings.min_rounds {
            continue;
        }
        for round in &valid {
            let Some(entry) = round.scores.get(player).filter(|e| e.has_score()) else {
                continue;
            };
            if best.as_ref().is_none_or(|b| entry.score < b.score) {
                best = Some(BestScoreHolder {
                    player: player.to_string(),
                    score: entry.score,
                });
            }
        }
    }
    best
}

/// Lowest putting average among players with enough counted rounds, each
/// average taken over that player's putt-recorded counted rounds (again
/// at least `min_rounds` of them). Same first-minimum tie rule.
pub fn best_putt_average(
    roster: &Roster,
    rounds: &[Round],
    settings: &RankingSettings,
) -> Option<BestPuttHolder> {
    let counts = participation_counts(roster, rounds, settings);
    let valid = valid_rounds(rounds, settings);

    let mut best: Option<BestPuttHolder> = None;
    for player in roster.players() {
        if counts[player] < settings.min_rounds {
            continue;
        }
        let putts: Vec<i32> = valid
            .iter()
            .filter_map(|r| r.scores.get(player))
            .filter_map(|e| e.recorded_putt())
            .collect();
        if putts.len() < settings.min_rounds {
            continue;
        }
        let average = putts.iter().sum::<i32>() as f64 / putts.len() as f64;
        if best.as_ref().is_none_or(|b| average < b.average) {
            best = Some(BestPuttHolder {
                player: player.to_string(),
                average,
            });
        }
    }
    best
}

/// One player's aggregates over their counted rounds. Deliberately not
/// gated by `min_rounds`: a single counted score already produces stats,
/// unlike leaderboard eligibility.
pub fn personal_stats(player: &str, rounds: &[Round], settings: &RankingSettings) -> PersonalStats {
    let entries: Vec<_> = valid_rounds(rounds, settings)
        .into_iter()
        .filter_map(|r| r.scores.get(player))
        .filter(|e| e.has_score())
        .collect();

    if entries.is_empty() {
        return PersonalStats::default();
    }

    let scores: Vec<i32> = entries.iter().map(|e| e.score).collect();
    let average_score = scores.iter().sum::<i32>() as f64 / scores.len() as f64;
    let best = scores.iter().min().copied();

    let putts: Vec<i32> = entries.iter().filter_map(|e| e.recorded_putt()).collect();
    let average_putt = if putts.is_empty() {
        None
    } else {
        Some(putts.iter().sum::<i32>() as f64 / putts.len() as f64)
    };

    PersonalStats {
        rounds: entries.len(),
        average_score: Some(average_score),
        best_score: best,
        average_putt,
    }
}

/// Dashboard counts: how many rounds counted, and how many players are
/// over the participation bar.
pub fn season_summary(roster: &Roster, rounds: &[Round], settings: &RankingSettings) -> SeasonSummary {
    let counts = participation_counts(roster, rounds, settings);
    SeasonSummary {
        valid_rounds: valid_rounds(rounds, settings).len(),
        eligible_players: counts.values().filter(|c| **c >= settings.min_rounds).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::test_support::{round, roster, three_round_season};

    #[test]
    fn best_score_needs_three_participations() {
        let settings = RankingSettings::default();
        let best = best_score(&roster(), &three_round_season(), &settings).unwrap();
        // Kondo carded 92 but only played one counted round; Matsumoto's
        // 78 is the lowest among eligible players.
        assert_eq!(best.player, "Matsumoto");
        assert_eq!(best.score, 78);
    }

    #[test]
    fn best_score_tie_goes_to_the_earlier_roster_player() {
        let rounds = vec![
            round(
                1,
                "2025-04-05",
                &[("Matsumoto", 80, None), ("Masamoto", 80, None), ("Watanabe", 85, None)],
            ),
            round(
                2,
                "2025-04-12",
                &[("Matsumoto", 81, None), ("Masamoto", 80, None), ("Watanabe", 85, None)],
            ),
            round(
                3,
                "2025-04-19",
                &[("Matsumoto", 82, None), ("Masamoto", 80, None), ("Watanabe", 85, None)],
            ),
        ];
        let best = best_score(&roster(), &rounds, &RankingSettings::default()).unwrap();
        // Masamoto hit 80 three times, but Matsumoto is earlier on the
        // roster and 80 is not strictly below 80.
        assert_eq!(best.player, "Matsumoto");
        assert_eq!(best.score, 80);
    }

    #[test]
    fn best_putt_average_requires_putt_recorded_rounds() {
        let settings = RankingSettings::default();
        let best = best_putt_average(&roster(), &three_round_season(), &settings).unwrap();
        assert_eq!(best.player, "Matsumoto");
        assert!((best.average - 31.0).abs() < 1e-9);
    }

    #[test]
    fn no_holder_when_nobody_is_eligible() {
        let rounds = vec![round(
            1,
            "2025-04-05",
            &[("Matsumoto", 80, Some(31)), ("Masamoto", 82, Some(33)), ("Watanabe", 90, None)],
        )];
        let settings = RankingSettings::default();
        assert_eq!(best_score(&roster(), &rounds, &settings), None);
        assert_eq!(best_putt_average(&roster(), &rounds, &settings), None);
    }

    #[test]
    fn personal_stats_are_not_gated_by_min_rounds() {
        let settings = RankingSettings::default();
        // Hiki appears in exactly one counted round.
        let stats = personal_stats("Hiki", &three_round_season(), &settings);
        assert_eq!(stats.rounds, 1);
        assert_eq!(stats.average_score, Some(99.0));
        assert_eq!(stats.best_score, Some(99));
        assert_eq!(stats.average_putt, None);
    }

    #[test]
    fn personal_stats_absent_without_any_counted_round() {
        let settings = RankingSettings::default();
        let stats = personal_stats("Naito", &three_round_season(), &settings);
        assert_eq!(stats, PersonalStats::default());
    }

    #[test]
    fn summary_counts_valid_rounds_and_eligible_players() {
        let settings = RankingSettings::default();
        let summary = season_summary(&roster(), &three_round_season(), &settings);
        assert_eq!(
            summary,
            SeasonSummary {
                valid_rounds: 3,
                eligible_players: 2,
            }
        );
    }
}

use crate::config::roster::Roster;
use crate::config::settings::RankingSettings;
use crate::domain::{HandicapMap, Round};
use crate::ranking::handicap::{handicap_for, normalize};
use crate::ranking::types::{AverageStanding, AwardBadge, BestScoreStanding, PuttStanding};
use crate::ranking::validity::valid_rounds;

/// Competition-style rank assignment over an already sorted slice: tied
/// entries (equal tie key) share a rank, and the next distinct key gets
/// its 1-based position, so a two-way tie at the top yields 1, 1, 3.
fn assign_competition_ranks<T, K>(
    entries: &mut [T],
    tie_key: impl Fn(&T) -> K,
    set_rank: impl Fn(&mut T, u32),
) where
    K: PartialEq,
{
    let mut rank = 1u32;
    let mut previous: Option<K> = None;
    for (position, entry) in entries.iter_mut().enumerate() {
        let key = tie_key(entry);
        if previous.as_ref().is_some_and(|p| *p != key) {
            rank = position as u32 + 1;
        }
        set_rank(entry, rank);
        previous = Some(key);
    }
}

/// Averages compare at one decimal, putting averages at two. Rounding
/// only affects tie grouping; the sort itself uses the full value.
fn rounded_key(value: f64, decimals: u32) -> i64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() as i64
}

/// Overall average leaderboard: eligible players only (at least
/// `min_rounds` counted scores), ascending mean of normalized scores.
/// Ineligible players are omitted entirely, not shown unranked.
pub fn overall_standings(
    roster: &Roster,
    rounds: &[Round],
    handicaps: &HandicapMap,
    apply_handicap: bool,
    settings: &RankingSettings,
) -> Vec<AverageStanding> {
    let valid = valid_rounds(rounds, settings);

    let mut standings: Vec<AverageStanding> = roster
        .players()
        .filter_map(|player| {
            let hc = handicap_for(handicaps, player);
            let scores: Vec<i32> = valid
                .iter()
                .filter_map(|r| r.scores.get(player))
                .filter(|e| e.has_score())
                .map(|e| normalize(e.score, hc, apply_handicap))
                .collect();
            if scores.len() < settings.min_rounds {
                return None;
            }
            let average = scores.iter().sum::<i32>() as f64 / scores.len() as f64;
            Some(AverageStanding {
                rank: 0,
                player: player.to_string(),
                average,
                rounds: scores.len(),
                badge: None,
            })
        })
        .collect();

    // Stable sort keeps roster order among exact equals.
    standings.sort_by(|a, b| a.average.total_cmp(&b.average));
    assign_competition_ranks(
        &mut standings,
        |s| rounded_key(s.average, 1),
        |s, rank| {
            s.rank = rank;
            s.badge = AwardBadge::for_rank(rank);
        },
    );
    standings
}

/// Best single scores across the season, one record per (round, player)
/// score, ranked ascending and cut to the configured table length. Ties
/// compare on the exact normalized integer, not a rounded value, and a
/// tie straddling the cut is still cut by position.
pub fn best_score_standings(
    roster: &Roster,
    rounds: &[Round],
    handicaps: &HandicapMap,
    apply_handicap: bool,
    settings: &RankingSettings,
) -> Vec<BestScoreStanding> {
    let mut records: Vec<BestScoreStanding> = Vec::new();
    for round in valid_rounds(rounds, settings) {
        for player in roster.players() {
            let Some(entry) = round.scores.get(player).filter(|e| e.has_score()) else {
                continue;
            };
            let hc = handicap_for(handicaps, player);
            records.push(BestScoreStanding {
                rank: 0,
                player: player.to_string(),
                score: normalize(entry.score, hc, apply_handicap),
                raw_score: entry.score,
                date: round.date,
                course: round.course.clone(),
                badge: None,
            });
        }
    }

    records.sort_by_key(|r| r.score);
    assign_competition_ranks(
        &mut records,
        |r| r.score,
        |r, rank| {
            r.rank = rank;
            r.badge = AwardBadge::for_rank(rank);
        },
    );
    records.truncate(settings.best_score_limit);
    records
}

/// Putting average leaderboard. Source is the putt count, never
/// handicap-adjusted; eligibility needs `min_rounds` counted rounds with
/// a recorded putt; ties compare at two decimals.
pub fn putt_standings(
    roster: &Roster,
    rounds: &[Round],
    settings: &RankingSettings,
) -> Vec<PuttStanding> {
    let valid = valid_rounds(rounds, settings);

    let mut standings: Vec<PuttStanding> = roster
        .players()
        .filter_map(|player| {
            let putts: Vec<i32> = valid
                .iter()
                .filter_map(|r| r.scores.get(player))
                .filter_map(|e| e.recorded_putt())
                .collect();
            if putts.len() < settings.min_rounds {
                return None;
            }
            let average = putts.iter().sum::<i32>() as f64 / putts.len() as f64;
            Some(PuttStanding {
                rank: 0,
                player: player.to_string(),
                average,
                rounds: putts.len(),
                badge: None,
            })
        })
        .collect();

    standings.sort_by(|a, b| a.average.total_cmp(&b.average));
    assign_competition_ranks(
        &mut standings,
        |s| rounded_key(s.average, 2),
        |s, rank| {
            s.rank = rank;
            s.badge = AwardBadge::for_rank(rank);
        },
    );
    standings
}

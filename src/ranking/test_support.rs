//! Hand-built season fixtures shared by the ranking tests.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::config::roster::{default_roster, Roster};
use crate::domain::{Round, ScoreEntry};

pub fn roster() -> Roster {
    default_roster()
}

pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// Build a round from `(player, score, putt)` triples. A zero score is
/// recorded as-is so tests can cover the "entered but empty" case.
pub fn round(number: u32, on: &str, entries: &[(&str, i32, Option<i32>)]) -> Round {
    let scores: HashMap<_, _> = entries
        .iter()
        .map(|(player, score, putt)| {
            (
                player.to_string(),
                ScoreEntry {
                    score: *score,
                    putt: *putt,
                },
            )
        })
        .collect();
    Round {
        round_number: number,
        date: date(on),
        course: "Lakeside".to_string(),
        scores,
    }
}

/// A season where Matsumoto has exactly three counted scores 80, 78, 82
/// plus one invalid two-player round. Mirrors the reference scenario used
/// across the leaderboard and stats tests.
pub fn three_round_season() -> Vec<Round> {
    vec![
        round(
            1,
            "2025-04-05",
            &[("Matsumoto", 80, Some(32)), ("Masamoto", 82, Some(33)), ("Watanabe", 90, Some(36))],
        ),
        round(2, "2025-04-12", &[("Matsumoto", 79, None), ("Kondo", 95, None)]),
        round(
            3,
            "2025-04-19",
            &[("Matsumoto", 78, Some(30)), ("Masamoto", 84, Some(35)), ("Kondo", 92, Some(38))],
        ),
        round(
            4,
            "2025-04-26",
            &[("Matsumoto", 82, Some(31)), ("Masamoto", 83, Some(34)), ("Hiki", 99, None)],
        ),
    ]
}

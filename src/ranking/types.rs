use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::PlayerName;

/// Fixed award labels, a pure function of the final rank. Ranks 4 and
/// 7+ carry no badge. Booby prizes go to the 5th and 6th positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AwardBadge {
    Champion,
    RunnerUp,
    Third,
    Booby,
    BoobyMaker,
}

impl AwardBadge {
    pub fn for_rank(rank: u32) -> Option<Self> {
        match rank {
            1 => Some(Self::Champion),
            2 => Some(Self::RunnerUp),
            3 => Some(Self::Third),
            5 => Some(Self::Booby),
            6 => Some(Self::BoobyMaker),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Champion => "Champion",
            Self::RunnerUp => "Runner-up",
            Self::Third => "3rd place",
            Self::Booby => "Booby",
            Self::BoobyMaker => "Booby maker",
        }
    }
}

/// One row of the overall-average leaderboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageStanding {
    pub rank: u32,
    pub player: PlayerName,
    pub average: f64,
    pub rounds: usize,
    pub badge: Option<AwardBadge>,
}

/// One row of the best-single-score leaderboard. `score` is the ranked
/// (possibly handicap-adjusted) value; `raw_score` is what was carded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestScoreStanding {
    pub rank: u32,
    pub player: PlayerName,
    pub score: i32,
    pub raw_score: i32,
    pub date: NaiveDate,
    pub course: String,
    pub badge: Option<AwardBadge>,
}

/// One row of the putting-average leaderboard. Never handicap-adjusted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuttStanding {
    pub rank: u32,
    pub player: PlayerName,
    pub average: f64,
    pub rounds: usize,
    pub badge: Option<AwardBadge>,
}

/// Holder of the season's lowest raw score among eligible players.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestScoreHolder {
    pub player: PlayerName,
    pub score: i32,
}

/// Holder of the season's lowest putting average among eligible players.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestPuttHolder {
    pub player: PlayerName,
    pub average: f64,
}

/// One player's aggregate over a season. Unlike the leaderboards this is
/// not gated by the minimum-rounds rule; a single counted round already
/// shows up here.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalStats {
    pub rounds: usize,
    pub average_score: Option<f64>,
    pub best_score: Option<i32>,
    pub average_putt: Option<f64>,
}

/// Dashboard counts for a season.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSummary {
    pub valid_rounds: usize,
    pub eligible_players: usize,
}

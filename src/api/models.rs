use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Achievement, PlayerName, ScoreEntry, Year};
use crate::ranking::{
    AverageStanding, BestPuttHolder, BestScoreHolder, BestScoreStanding, PersonalStats,
    PuttStanding, SeasonSummary,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingsResponse {
    pub year: Year,
    pub cup_name: String,
    pub apply_handicap: bool,
    pub overall: Vec<AverageStanding>,
    pub best_scores: Vec<BestScoreStanding>,
    pub putting: Vec<PuttStanding>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub year: Year,
    pub cup_name: String,
    pub summary: SeasonSummary,
    pub best_score: Option<BestScoreHolder>,
    pub best_putt: Option<BestPuttHolder>,
    pub personal: Option<PersonalStats>,
    pub hole_in_ones: Vec<Achievement>,
    pub eagles: Vec<Achievement>,
}

/// Raw listing row: invalid rounds stay visible, just flagged.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundListItem {
    pub round_number: u32,
    pub date: NaiveDate,
    pub course: String,
    pub participants: usize,
    pub valid: bool,
    pub scores: HashMap<PlayerName, ScoreEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementInput {
    pub user: PlayerName,
    pub hole: u32,
}

/// Bulk round entry. A missing `date` or unparseable body is rejected by
/// serde before the store is touched.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRequest {
    pub date: NaiveDate,
    pub course: String,
    pub scores: HashMap<PlayerName, ScoreEntry>,
    #[serde(default)]
    pub confirm_short: bool,
    pub hole_in_one: Option<AchievementInput>,
    pub eagle: Option<AchievementInput>,
}

/// Single-player entry, merged into a round matched by date and course.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScoreRequest {
    pub player: PlayerName,
    pub date: NaiveDate,
    pub course: String,
    pub score: i32,
    pub putt: Option<i32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRoundResponse {
    pub year: Year,
    pub round_number: u32,
    pub created: bool,
}

#[derive(Deserialize)]
pub struct CupNameRequest {
    pub name: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Season key, e.g. 2025. Serialized as a string key in the document.
pub type Year = i32;

/// Players are identified by name; the set of valid names is the
/// configured roster, not data.
pub type PlayerName = String;

/// Global per-player handicaps. Missing entry means 0.
pub type HandicapMap = HashMap<PlayerName, u32>;

/// One player's result in one round. A zero score means "no score
/// recorded" and is treated the same as an absent entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub putt: Option<i32>,
}

impl ScoreEntry {
    pub fn new(score: i32) -> Self {
        Self { score, putt: None }
    }

    pub fn with_putt(score: i32, putt: i32) -> Self {
        Self {
            score,
            putt: Some(putt),
        }
    }

    /// A recorded, non-zero score.
    pub fn has_score(&self) -> bool {
        self.score != 0
    }

    /// A recorded, non-zero putt count.
    pub fn recorded_putt(&self) -> Option<i32> {
        self.putt.filter(|p| *p != 0)
    }
}

/// One recorded outing. Round numbers are 1-based, dense within a season
/// and renumbered after a delete; they reflect entry order, not
/// necessarily calendar order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub round_number: u32,
    pub date: NaiveDate,
    pub course: String,
    pub scores: HashMap<PlayerName, ScoreEntry>,
}

/// A hole-in-one or eagle. Informational only, never enters ranking math.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub user: PlayerName,
    pub date: NaiveDate,
    pub course: String,
    pub hole: u32,
}

/// One year's rounds and achievements. Created lazily on first write.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    #[serde(default)]
    pub rounds: Vec<Round>,
    #[serde(default)]
    pub hole_in_ones: Vec<Achievement>,
    #[serde(default)]
    pub eagles: Vec<Achievement>,
}

/// The whole persisted document: the read/write contract shared with the
/// remote store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreData {
    #[serde(default)]
    pub years: BTreeMap<Year, Season>,
    #[serde(default)]
    pub handicaps: HandicapMap,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub cup_names: BTreeMap<Year, String>,
}

/// Caller-supplied round content for create/edit operations.
#[derive(Debug, Clone)]
pub struct RoundInput {
    pub date: NaiveDate,
    pub course: String,
    pub scores: HashMap<PlayerName, ScoreEntry>,
}

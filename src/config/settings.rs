#[derive(Debug, Clone)]
pub struct RankingSettings {
    /// Minimum scored players for a round to count.
    pub min_participants: usize,
    /// Minimum counted rounds for a player to be ranked on averages.
    pub min_rounds: usize,
    /// Best-single-score table length after ranking.
    pub best_score_limit: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            min_participants: 3,
            min_rounds: 3,
            best_score_limit: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SyncSettings {
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            user_agent: "GolfCupRanking/1.0",
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ranking: RankingSettings,
    pub sync: SyncSettings,
    /// Display name used when a season has no cup name of its own.
    pub default_cup_name: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            ranking: RankingSettings::default(),
            sync: SyncSettings::default(),
            default_cup_name: "Matsumoto Cup",
        }
    }
}

// Settings are passed explicitly (dependency injection) rather than held
// in globals, so the ranking functions stay testable in isolation.

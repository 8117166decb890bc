use anyhow::Result;
use chrono::Datelike;
use colored::Colorize;

use crate::config::roster::default_roster;
use crate::config::settings::AppConfig;
use crate::domain::Year;
use crate::ranking::{
    best_putt_average, best_score, best_score_standings, overall_standings, putt_standings,
    season_summary,
};
use crate::store::{FileStore, SeasonStore};

/// Prints the three leaderboards and the season summary to the terminal.
pub struct StandingsService {
    config: AppConfig,
}

impl StandingsService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, year: Option<Year>, raw: bool) -> Result<()> {
        let year = year.unwrap_or_else(|| chrono::Local::now().year());
        let apply_handicap = !raw;
        let settings = &self.config.ranking;

        let data_path =
            std::env::var("DATA_PATH").unwrap_or_else(|_| "golf_scores.json".to_string());
        let data = FileStore::new(&data_path).load()?;
        let store = SeasonStore::new(data, default_roster(), settings.min_participants);

        let cup = store.cup_name(year).unwrap_or(self.config.default_cup_name);
        println!("{}", format!("=== {year} {cup} ===").bold());

        let empty = Vec::new();
        let rounds = store.season(year).map_or(&empty, |s| &s.rounds);
        let roster = store.roster();
        let handicaps = store.handicaps();

        let summary = season_summary(roster, rounds, settings);
        println!(
            "Counted rounds: {}   Eligible players: {}   Handicaps: {}",
            summary.valid_rounds,
            summary.eligible_players,
            if apply_handicap { "applied" } else { "off" }
        );

        println!("\n{}", "Overall average".underline());
        let overall = overall_standings(roster, rounds, handicaps, apply_handicap, settings);
        if overall.is_empty() {
            println!("  (nobody has {} counted rounds yet)", settings.min_rounds);
        }
        for standing in &overall {
            let badge = standing.badge.map(|b| b.label()).unwrap_or("");
            let line = format!(
                "  {:>2}. {:<12} {:>6.1}  ({} rounds)  {}",
                standing.rank, standing.player, standing.average, standing.rounds, badge
            );
            if standing.rank == 1 {
                println!("{}", line.yellow().bold());
            } else {
                println!("{line}");
            }
        }

        println!("\n{}", "Best single scores".underline());
        for record in best_score_standings(roster, rounds, handicaps, apply_handicap, settings) {
            let raw_note = if record.raw_score != record.score {
                format!(" (carded {})", record.raw_score)
            } else {
                String::new()
            };
            println!(
                "  {:>2}. {:<12} {:>4}{}  {} {}",
                record.rank, record.player, record.score, raw_note, record.date, record.course
            );
        }

        println!("\n{}", "Putting average".underline());
        for standing in putt_standings(roster, rounds, settings) {
            println!(
                "  {:>2}. {:<12} {:>6.2}  ({} rounds)",
                standing.rank, standing.player, standing.average, standing.rounds
            );
        }

        if let Some(holder) = best_score(roster, rounds, settings) {
            println!("\nBest score: {} ({})", holder.score, holder.player.green());
        }
        if let Some(holder) = best_putt_average(roster, rounds, settings) {
            println!(
                "Best putting average: {:.2} ({})",
                holder.average,
                holder.player.green()
            );
        }

        Ok(())
    }
}

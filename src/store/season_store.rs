use chrono::NaiveDate;

use crate::config::roster::Roster;
use crate::domain::{
    Achievement, HandicapMap, PlayerName, Round, RoundInput, ScoreData, ScoreEntry, Season, Year,
};
use crate::errors::StoreError;

/// Outcome of a single-player score entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Merged into the existing round with this number.
    Updated(u32),
    /// No round matched the date and course; a new one was created.
    Created(u32),
}

/// Owner of the durable document. All reads and writes go through here;
/// every write validates first and a rejected write changes nothing.
/// Derived views (leaderboards, stats) are never stored; they are
/// recomputed from the current contents on each request.
#[derive(Debug, Clone)]
pub struct SeasonStore {
    data: ScoreData,
    roster: Roster,
    min_participants: usize,
}

impl SeasonStore {
    pub fn new(data: ScoreData, roster: Roster, min_participants: usize) -> Self {
        Self {
            data,
            roster,
            min_participants,
        }
    }

    pub fn data(&self) -> &ScoreData {
        &self.data
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// An absent season is a valid state, treated as empty by callers.
    pub fn season(&self, year: Year) -> Option<&Season> {
        self.data.years.get(&year)
    }

    pub fn handicaps(&self) -> &HandicapMap {
        &self.data.handicaps
    }

    pub fn handicap(&self, player: &str) -> u32 {
        self.data.handicaps.get(player).copied().unwrap_or(0)
    }

    pub fn cup_name(&self, year: Year) -> Option<&str> {
        self.data.cup_names.get(&year).map(String::as_str)
    }

    /// Whole-document replacement (import / remote refresh). Last writer
    /// wins; there is no merge.
    pub fn replace_data(&mut self, data: ScoreData) {
        self.data = data;
    }

    /// Append a round to a year, creating the season on first use. Returns
    /// the assigned round number. With fewer than `min_participants`
    /// scorers the write needs `confirm_short`; the round is then stored
    /// but stays excluded from every ranking computation.
    pub fn add_round(
        &mut self,
        year: Year,
        input: RoundInput,
        confirm_short: bool,
    ) -> Result<u32, StoreError> {
        self.add_round_with_achievements(year, input, confirm_short, None, None)
    }

    /// Append a round together with its achievements as one write. The
    /// round and both achievement users are validated up front, so a
    /// rejected achievement leaves no round behind.
    pub fn add_round_with_achievements(
        &mut self,
        year: Year,
        input: RoundInput,
        confirm_short: bool,
        hole_in_one: Option<Achievement>,
        eagle: Option<Achievement>,
    ) -> Result<u32, StoreError> {
        let input = self.validate(input, confirm_short)?;
        if let Some(achievement) = &hole_in_one {
            self.check_player(&achievement.user)?;
        }
        if let Some(achievement) = &eagle {
            self.check_player(&achievement.user)?;
        }

        let season = self.data.years.entry(year).or_default();
        let number = season.rounds.len() as u32 + 1;
        season.rounds.push(Round {
            round_number: number,
            date: input.date,
            course: input.course,
            scores: input.scores,
        });
        if let Some(achievement) = hole_in_one {
            season.hole_in_ones.push(achievement);
        }
        if let Some(achievement) = eagle {
            season.eagles.push(achievement);
        }
        Ok(number)
    }

    /// Full replacement of an existing round's date, course and score map.
    pub fn replace_round(
        &mut self,
        year: Year,
        number: u32,
        input: RoundInput,
        confirm_short: bool,
    ) -> Result<(), StoreError> {
        let input = self.validate(input, confirm_short)?;
        let round = self.round_mut(year, number)?;
        round.date = input.date;
        round.course = input.course;
        round.scores = input.scores;
        Ok(())
    }

    /// Record one player's entry: merge into the round matching this exact
    /// date and course, or open a new round holding only this entry. A new
    /// single-player round is below the participant bar by construction,
    /// so it is stored without confirmation and simply stays invalid.
    pub fn merge_player_score(
        &mut self,
        year: Year,
        player: &str,
        date: NaiveDate,
        course: &str,
        entry: ScoreEntry,
    ) -> Result<MergeOutcome, StoreError> {
        if course.trim().is_empty() {
            return Err(StoreError::MissingCourse);
        }
        if !self.roster.contains(player) {
            return Err(StoreError::UnknownPlayer(player.to_string()));
        }
        if !entry.has_score() {
            return Err(StoreError::NoScores);
        }

        let season = self.data.years.entry(year).or_default();
        if let Some(round) = season
            .rounds
            .iter_mut()
            .find(|r| r.date == date && r.course == course)
        {
            round.scores.insert(player.to_string(), entry);
            return Ok(MergeOutcome::Updated(round.round_number));
        }

        let number = season.rounds.len() as u32 + 1;
        season.rounds.push(Round {
            round_number: number,
            date,
            course: course.to_string(),
            scores: [(player.to_string(), entry)].into(),
        });
        Ok(MergeOutcome::Created(number))
    }

    /// Delete a round, renumber the remainder contiguously from 1, and
    /// drop achievements recorded for the deleted round's date and course.
    pub fn delete_round(&mut self, year: Year, number: u32) -> Result<(), StoreError> {
        let season = self
            .data
            .years
            .get_mut(&year)
            .ok_or(StoreError::SeasonNotFound(year))?;
        let index = season
            .rounds
            .iter()
            .position(|r| r.round_number == number)
            .ok_or(StoreError::RoundNotFound { year, number })?;
        let removed = season.rounds.remove(index);
        for (i, round) in season.rounds.iter_mut().enumerate() {
            round.round_number = i as u32 + 1;
        }
        season
            .hole_in_ones
            .retain(|a| !(a.date == removed.date && a.course == removed.course));
        season
            .eagles
            .retain(|a| !(a.date == removed.date && a.course == removed.course));
        Ok(())
    }

    pub fn add_hole_in_one(&mut self, year: Year, achievement: Achievement) -> Result<(), StoreError> {
        self.check_player(&achievement.user)?;
        self.data.years.entry(year).or_default().hole_in_ones.push(achievement);
        Ok(())
    }

    pub fn add_eagle(&mut self, year: Year, achievement: Achievement) -> Result<(), StoreError> {
        self.check_player(&achievement.user)?;
        self.data.years.entry(year).or_default().eagles.push(achievement);
        Ok(())
    }

    pub fn set_handicaps(&mut self, handicaps: HandicapMap) -> Result<(), StoreError> {
        for player in handicaps.keys() {
            self.check_player(player)?;
        }
        self.data.handicaps = handicaps;
        Ok(())
    }

    pub fn set_cup_name(&mut self, year: Year, name: &str) -> Result<(), StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyCupName);
        }
        self.data.cup_names.insert(year, name.to_string());
        Ok(())
    }

    fn check_player(&self, player: &PlayerName) -> Result<(), StoreError> {
        if self.roster.contains(player) {
            Ok(())
        } else {
            Err(StoreError::UnknownPlayer(player.clone()))
        }
    }

    /// Shared validation for bulk writes. Zero-score entries are dropped
    /// (an empty form field, not a score) before the participant count is
    /// taken.
    fn validate(&self, mut input: RoundInput, confirm_short: bool) -> Result<RoundInput, StoreError> {
        if input.course.trim().is_empty() {
            return Err(StoreError::MissingCourse);
        }
        for player in input.scores.keys() {
            self.check_player(player)?;
        }
        input.scores.retain(|_, entry| entry.has_score());
        let participants = input.scores.len();
        if participants == 0 {
            return Err(StoreError::NoScores);
        }
        if participants < self.min_participants && !confirm_short {
            return Err(StoreError::NeedsConfirmation {
                participants,
                required: self.min_participants,
            });
        }
        Ok(input)
    }

    fn round_mut(&mut self, year: Year, number: u32) -> Result<&mut Round, StoreError> {
        self.data
            .years
            .get_mut(&year)
            .ok_or(StoreError::SeasonNotFound(year))?
            .rounds
            .iter_mut()
            .find(|r| r.round_number == number)
            .ok_or(StoreError::RoundNotFound { year, number })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::roster::default_roster;
    use std::collections::HashMap;

    fn store() -> SeasonStore {
        SeasonStore::new(ScoreData::default(), default_roster(), 3)
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn input(on: &str, course: &str, entries: &[(&str, i32)]) -> RoundInput {
        RoundInput {
            date: date(on),
            course: course.to_string(),
            scores: entries
                .iter()
                .map(|(p, s)| (p.to_string(), ScoreEntry::new(*s)))
                .collect(),
        }
    }

    fn full_round(on: &str) -> RoundInput {
        input(on, "Lakeside", &[("Matsumoto", 80), ("Kondo", 85), ("Hiki", 90)])
    }

    #[test]
    fn seasons_are_created_lazily_with_dense_numbers() {
        let mut store = store();
        assert!(store.season(2025).is_none());
        assert_eq!(store.add_round(2025, full_round("2025-04-05"), false), Ok(1));
        assert_eq!(store.add_round(2025, full_round("2025-04-12"), false), Ok(2));
        let season = store.season(2025).unwrap();
        assert_eq!(season.rounds.len(), 2);
        assert_eq!(season.rounds[1].round_number, 2);
    }

    #[test]
    fn short_round_needs_confirmation_then_persists() {
        let mut store = store();
        let short = input("2025-04-05", "Lakeside", &[("Matsumoto", 80), ("Kondo", 85)]);
        assert_eq!(
            store.add_round(2025, short.clone(), false),
            Err(StoreError::NeedsConfirmation {
                participants: 2,
                required: 3,
            })
        );
        assert!(store.season(2025).is_none());
        assert_eq!(store.add_round(2025, short, true), Ok(1));
        assert_eq!(store.season(2025).unwrap().rounds.len(), 1);
    }

    #[test]
    fn malformed_rounds_are_rejected_before_any_write() {
        let mut store = store();
        assert_eq!(
            store.add_round(2025, input("2025-04-05", "  ", &[("Matsumoto", 80)]), true),
            Err(StoreError::MissingCourse)
        );
        assert_eq!(
            store.add_round(2025, input("2025-04-05", "Lakeside", &[("Matsumoto", 0)]), true),
            Err(StoreError::NoScores)
        );
        assert_eq!(
            store.add_round(2025, input("2025-04-05", "Lakeside", &[("Stranger", 80)]), true),
            Err(StoreError::UnknownPlayer("Stranger".to_string()))
        );
        assert!(store.season(2025).is_none());
    }

    #[test]
    fn zero_score_entries_are_dropped_on_save() {
        let mut store = store();
        let mixed = input(
            "2025-04-05",
            "Lakeside",
            &[("Matsumoto", 80), ("Kondo", 85), ("Hiki", 90), ("Naito", 0)],
        );
        store.add_round(2025, mixed, false).unwrap();
        let round = &store.season(2025).unwrap().rounds[0];
        assert_eq!(round.scores.len(), 3);
        assert!(!round.scores.contains_key("Naito"));
    }

    #[test]
    fn replace_round_swaps_the_whole_score_map() {
        let mut store = store();
        store.add_round(2025, full_round("2025-04-05"), false).unwrap();
        let edited = input(
            "2025-04-06",
            "Hillcrest",
            &[("Masamoto", 77), ("Kondo", 82), ("Naito", 95)],
        );
        store.replace_round(2025, 1, edited, false).unwrap();
        let round = &store.season(2025).unwrap().rounds[0];
        assert_eq!(round.course, "Hillcrest");
        assert_eq!(round.date, date("2025-04-06"));
        assert!(round.scores.contains_key("Masamoto"));
        assert!(!round.scores.contains_key("Matsumoto"));
        assert_eq!(round.round_number, 1);
    }

    #[test]
    fn merge_matches_on_exact_date_and_course() {
        let mut store = store();
        store.add_round(2025, full_round("2025-04-05"), false).unwrap();

        let merged = store
            .merge_player_score(2025, "Naito", date("2025-04-05"), "Lakeside", ScoreEntry::with_putt(93, 35))
            .unwrap();
        assert_eq!(merged, MergeOutcome::Updated(1));
        assert_eq!(store.season(2025).unwrap().rounds[0].scores.len(), 4);

        // Same course on another day opens a fresh round.
        let created = store
            .merge_player_score(2025, "Naito", date("2025-04-06"), "Lakeside", ScoreEntry::new(97))
            .unwrap();
        assert_eq!(created, MergeOutcome::Created(2));
        assert_eq!(store.season(2025).unwrap().rounds[1].scores.len(), 1);
    }

    #[test]
    fn delete_renumbers_and_drops_round_achievements() {
        let mut store = store();
        for day in ["2025-04-05", "2025-04-12", "2025-04-19", "2025-04-26"] {
            store.add_round(2025, full_round(day), false).unwrap();
        }
        store
            .add_hole_in_one(
                2025,
                Achievement {
                    user: "Kondo".to_string(),
                    date: date("2025-04-12"),
                    course: "Lakeside".to_string(),
                    hole: 7,
                },
            )
            .unwrap();
        store
            .add_eagle(
                2025,
                Achievement {
                    user: "Hiki".to_string(),
                    date: date("2025-04-19"),
                    course: "Lakeside".to_string(),
                    hole: 12,
                },
            )
            .unwrap();

        store.delete_round(2025, 2).unwrap();

        let season = store.season(2025).unwrap();
        let numbers: Vec<u32> = season.rounds.iter().map(|r| r.round_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        let dates: Vec<NaiveDate> = season.rounds.iter().map(|r| r.date).collect();
        assert!(!dates.contains(&date("2025-04-12")));
        assert!(season.hole_in_ones.is_empty());
        assert_eq!(season.eagles.len(), 1);
    }

    #[test]
    fn rejected_achievement_leaves_no_round_behind() {
        let mut store = store();
        let achievement = Achievement {
            user: "Stranger".to_string(),
            date: date("2025-04-05"),
            course: "Lakeside".to_string(),
            hole: 7,
        };
        let result = store.add_round_with_achievements(
            2025,
            full_round("2025-04-05"),
            false,
            Some(achievement),
            None,
        );
        assert_eq!(result, Err(StoreError::UnknownPlayer("Stranger".to_string())));
        // The failed write must not have committed the round either.
        assert!(store.season(2025).is_none());
    }

    #[test]
    fn round_and_achievements_commit_together() {
        let mut store = store();
        let eagle = Achievement {
            user: "Hiki".to_string(),
            date: date("2025-04-05"),
            course: "Lakeside".to_string(),
            hole: 12,
        };
        let number = store
            .add_round_with_achievements(2025, full_round("2025-04-05"), false, None, Some(eagle))
            .unwrap();
        assert_eq!(number, 1);
        let season = store.season(2025).unwrap();
        assert_eq!(season.rounds.len(), 1);
        assert_eq!(season.eagles.len(), 1);
        assert!(season.hole_in_ones.is_empty());
    }

    #[test]
    fn delete_unknown_round_is_an_error() {
        let mut store = store();
        assert_eq!(store.delete_round(2025, 1), Err(StoreError::SeasonNotFound(2025)));
        store.add_round(2025, full_round("2025-04-05"), false).unwrap();
        assert_eq!(
            store.delete_round(2025, 9),
            Err(StoreError::RoundNotFound { year: 2025, number: 9 })
        );
    }

    #[test]
    fn handicaps_and_cup_names_are_validated() {
        let mut store = store();
        let bad = HashMap::from([("Stranger".to_string(), 5)]);
        assert!(matches!(store.set_handicaps(bad), Err(StoreError::UnknownPlayer(_))));

        let good = HashMap::from([("Kondo".to_string(), 8)]);
        store.set_handicaps(good).unwrap();
        assert_eq!(store.handicap("Kondo"), 8);
        assert_eq!(store.handicap("Hiki"), 0);

        assert_eq!(store.set_cup_name(2025, "  "), Err(StoreError::EmptyCupName));
        store.set_cup_name(2025, " Spring Cup ").unwrap();
        assert_eq!(store.cup_name(2025), Some("Spring Cup"));
        assert_eq!(store.cup_name(2024), None);
    }
}

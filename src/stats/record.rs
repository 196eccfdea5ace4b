//! Statistics records and the keyed book that holds them

use crate::game::{Difficulty, Status, WordMode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Key a statistics book is indexed by
pub trait GameKey:
    'static + Copy + Ord + fmt::Debug + fmt::Display + Serialize + DeserializeOwned
{
    /// Every key that gets a default record
    const ALL: &'static [Self];
    /// Whether wins are tallied by attempt count
    const TRACKS_DISTRIBUTION: bool;
    /// Name of the persisted record
    const STORAGE_KEY: &'static str;
}

impl GameKey for WordMode {
    const ALL: &'static [Self] = &Self::ALL;
    const TRACKS_DISTRIBUTION: bool = true;
    const STORAGE_KEY: &'static str = "termo_stats_v2";
}

impl GameKey for Difficulty {
    const ALL: &'static [Self] = &Self::ALL;
    const TRACKS_DISTRIBUTION: bool = false;
    const STORAGE_KEY: &'static str = "crack_the_code_stats";
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { attempts: usize },
    Lost,
}

impl Outcome {
    /// Outcome of a session with the given status, `None` while playing
    #[must_use]
    pub const fn from_status(status: Status, attempts: usize) -> Option<Self> {
        match status {
            Status::Playing => None,
            Status::Won => Some(Self::Won { attempts }),
            Status::Lost => Some(Self::Lost),
        }
    }
}

/// Counters for one mode or difficulty
///
/// Field names follow the persisted camelCase schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsRecord {
    pub played: u32,
    pub wins: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins by attempt count (word game only)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub distribution: BTreeMap<usize, u32>,
}

impl StatsRecord {
    /// Count a finished session
    pub fn record(&mut self, outcome: Outcome, track_distribution: bool) {
        self.played += 1;

        match outcome {
            Outcome::Won { attempts } => {
                self.wins += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                if track_distribution {
                    *self.distribution.entry(attempts).or_insert(0) += 1;
                }
            }
            Outcome::Lost => self.current_streak = 0,
        }
    }

    /// Rounded percentage of games won, 0 when nothing was played
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.played == 0 {
            0
        } else {
            (f64::from(self.wins) / f64::from(self.played) * 100.0).round() as u32
        }
    }

    /// `wins <= played` and `current_streak <= max_streak`
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.wins <= self.played && self.current_streak <= self.max_streak
    }
}

/// Statistics for every key of one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsBook<K: Ord> {
    records: BTreeMap<K, StatsRecord>,
}

impl<K: GameKey> Default for StatsBook<K> {
    fn default() -> Self {
        let mut book = Self {
            records: BTreeMap::new(),
        };
        book.fill_missing();
        book
    }
}

impl<K: GameKey> StatsBook<K> {
    #[must_use]
    pub fn get(&self, key: K) -> Option<&StatsRecord> {
        self.records.get(&key)
    }

    /// Count a finished session under `key`
    pub fn record(&mut self, key: K, outcome: Outcome) -> &StatsRecord {
        let record = self.records.entry(key).or_default();
        record.record(outcome, K::TRACKS_DISTRIBUTION);
        record
    }

    /// Book holding `records`, with defaults for the keys it lacks
    pub(crate) fn from_records(records: BTreeMap<K, StatsRecord>) -> Self {
        let mut book = Self { records };
        book.fill_missing();
        book
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &StatsRecord)> {
        self.records.iter()
    }

    /// Add default records for keys the book does not have
    pub(crate) fn fill_missing(&mut self) {
        for &key in K::ALL {
            self.records.entry(key).or_default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_updates_counters_and_distribution() {
        let mut record = StatsRecord::default();
        record.record(Outcome::Won { attempts: 3 }, true);

        assert_eq!(record.played, 1);
        assert_eq!(record.wins, 1);
        assert_eq!(record.current_streak, 1);
        assert_eq!(record.max_streak, 1);
        assert_eq!(record.distribution.get(&3), Some(&1));
    }

    #[test]
    fn code_game_skips_distribution() {
        let mut record = StatsRecord::default();
        record.record(Outcome::Won { attempts: 2 }, false);
        assert!(record.distribution.is_empty());
    }

    #[test]
    fn streak_law() {
        let mut record = StatsRecord::default();
        let outcomes = [
            Outcome::Won { attempts: 1 },
            Outcome::Won { attempts: 4 },
            Outcome::Won { attempts: 2 },
            Outcome::Lost,
            Outcome::Won { attempts: 6 },
            Outcome::Lost,
            Outcome::Lost,
        ];
        let expected_current = [1, 2, 3, 0, 1, 0, 0];

        let mut previous_max = 0;
        for (outcome, expected) in outcomes.into_iter().zip(expected_current) {
            record.record(outcome, true);
            assert_eq!(record.current_streak, expected);
            assert!(record.max_streak >= previous_max);
            assert!(record.is_consistent());
            previous_max = record.max_streak;
        }

        assert_eq!(record.played, 7);
        assert_eq!(record.wins, 4);
        assert_eq!(record.max_streak, 3);
        assert_eq!(record.distribution.values().sum::<u32>(), 4);
    }

    #[test]
    fn win_percentage_rounds() {
        let mut record = StatsRecord::default();
        assert_eq!(record.win_percentage(), 0);
        record.record(Outcome::Won { attempts: 1 }, true);
        record.record(Outcome::Lost, true);
        record.record(Outcome::Won { attempts: 1 }, true);
        assert_eq!(record.win_percentage(), 67);
    }

    #[test]
    fn outcome_from_status() {
        assert_eq!(Outcome::from_status(Status::Playing, 2), None);
        assert_eq!(
            Outcome::from_status(Status::Won, 2),
            Some(Outcome::Won { attempts: 2 })
        );
        assert_eq!(Outcome::from_status(Status::Lost, 6), Some(Outcome::Lost));
    }

    #[test]
    fn default_book_has_every_key() {
        let words: StatsBook<WordMode> = StatsBook::default();
        assert_eq!(words.iter().count(), 3);
        let codes: StatsBook<Difficulty> = StatsBook::default();
        assert!(Difficulty::ALL.iter().all(|&d| codes.get(d).is_some()));
    }

    #[test]
    fn book_uses_persisted_schema() {
        let mut book: StatsBook<WordMode> = StatsBook::default();
        book.record(WordMode::Duo, Outcome::Won { attempts: 5 });

        let json: serde_json::Value = serde_json::to_value(&book).unwrap();
        assert_eq!(json["2"]["played"], 1);
        assert_eq!(json["2"]["currentStreak"], 1);
        assert_eq!(json["2"]["maxStreak"], 1);
        assert_eq!(json["2"]["distribution"]["5"], 1);
        assert_eq!(json["1"]["played"], 0);

        let codes: StatsBook<Difficulty> = StatsBook::default();
        let json = serde_json::to_value(&codes).unwrap();
        assert_eq!(json["hard"]["wins"], 0);
        assert!(json["hard"].get("distribution").is_none());
    }

    #[test]
    fn book_reads_legacy_records() {
        let json = r#"{
            "1": {"played": 3, "wins": 2, "currentStreak": 1, "maxStreak": 2, "distribution": {"4": 1, "6": 1}},
            "2": {"played": 0, "wins": 0, "currentStreak": 0, "maxStreak": 0, "distribution": {}}
        }"#;
        let mut book: StatsBook<WordMode> = serde_json::from_str(json).unwrap();
        book.fill_missing();

        let mono = book.get(WordMode::Mono).unwrap();
        assert_eq!(mono.wins, 2);
        assert_eq!(mono.distribution.get(&6), Some(&1));
        assert_eq!(book.get(WordMode::Quartet), Some(&StatsRecord::default()));
    }
}

use std::{
    fmt::{self, Display},
    ops::RangeInclusive,
};

use derive_more::Into;

use crate::{CreateError, ReadError, SessionLog};

pub trait HistoryRepository {
    fn read_history(&self) -> Result<Vec<HistoryEntry>, ReadError>;
    /// Inserts the entry at the front of the history.
    fn create_history_entry(&self, entry: HistoryEntry) -> Result<HistoryEntry, CreateError>;
}

pub trait HistoryService {
    fn get_history(&self) -> Result<Vec<HistoryEntry>, ReadError>;
    fn save_workout(&self, session: &SessionLog, date: String)
    -> Result<HistoryEntry, CreateError>;
}

/// One logged workout session. The date is stored preformatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub date: String,
    pub workout: String,
    pub exercises: Vec<ExerciseLog>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLog {
    pub name: String,
    pub sets: Vec<Set>,
}

impl ExerciseLog {
    /// Numbered set lines starting at `Set 1`.
    #[must_use]
    pub fn set_lines(&self) -> Vec<String> {
        self.sets
            .iter()
            .enumerate()
            .map(|(i, set)| set.line(i + 1))
            .collect()
    }
}

/// Reps and weight are kept exactly as entered.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Set {
    pub reps: String,
    pub weight: String,
    pub rest: Rest,
}

impl Set {
    #[must_use]
    pub fn line(&self, number: usize) -> String {
        format!(
            "Set {number}: {} reps, {} kg, Rest: {}",
            self.reps, self.weight, self.rest
        )
    }
}

pub const REST_MINUTES: RangeInclusive<u32> = 0..=30;
pub const REST_SECONDS: RangeInclusive<u32> = 0..=55;
pub const REST_SECONDS_STEP: usize = 5;

/// Rest after a set in seconds.
#[derive(Into, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rest(u32);

impl Rest {
    pub const ZERO: Rest = Rest(0);

    #[must_use]
    pub fn new(seconds: u32) -> Self {
        Self(seconds)
    }

    #[must_use]
    pub fn from_minutes_and_seconds(minutes: u32, seconds: u32) -> Self {
        Self(minutes.saturating_mul(60).saturating_add(seconds))
    }

    #[must_use]
    pub fn minutes(self) -> u32 {
        self.0 / 60
    }

    #[must_use]
    pub fn seconds(self) -> u32 {
        self.0 % 60
    }

    #[must_use]
    pub fn minute_options() -> Vec<u32> {
        REST_MINUTES.collect()
    }

    #[must_use]
    pub fn second_options() -> Vec<u32> {
        REST_SECONDS.step_by(REST_SECONDS_STEP).collect()
    }
}

impl Display for Rest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}m {}s", self.minutes(), self.seconds())
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{DateKey, DayEntry};

/// State of a single task's completion control.
///
/// `Completed` is terminal: there is no way back to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Pending,
    Completed,
}

impl TaskState {
    #[must_use]
    pub fn from_flag(done: bool) -> Self {
        if done { Self::Completed } else { Self::Pending }
    }

    #[must_use]
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Result of activating a completion control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    /// The flag flipped from false to true.
    Completed,
    /// The flag was already true; nothing changed.
    AlreadyCompleted,
}

impl MarkOutcome {
    #[must_use]
    pub fn changed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Percentage of `true` flags, in `0.0..=100.0`. A day without tasks is 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn completion_percent(flags: &[bool]) -> f64 {
    let total = flags.len();
    if total == 0 {
        return 0.0;
    }
    let done = flags.iter().filter(|done| **done).count();
    (done as f64 / total as f64) * 100.0
}

/// Completion flags for every known day, index-aligned with that day's tasks.
///
/// Serializes as a flat JSON object: `{"2025-09-13":[true,false], ...}` with
/// keys in ascending date order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressMap {
    days: BTreeMap<DateKey, Vec<bool>>,
}

impl ProgressMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &DateKey) -> Option<&[bool]> {
        self.days.get(key).map(Vec::as_slice)
    }

    /// Return the flags for `key`, creating them all-false when absent.
    ///
    /// A stored sequence shorter than `task_count` is padded with `false`;
    /// a longer one is left as stored.
    pub fn resolve(&mut self, key: DateKey, task_count: usize) -> &[bool] {
        let flags = self.days.entry(key).or_default();
        if flags.len() < task_count {
            flags.resize(task_count, false);
        }
        flags.as_slice()
    }

    /// Resolve every day of a schedule. Returns how many entries were created
    /// or padded.
    pub fn seed<'a>(&mut self, days: impl IntoIterator<Item = &'a DayEntry>) -> usize {
        let mut touched = 0;
        for day in days {
            let task_count = day.tasks().len();
            let before = self.days.get(&day.key()).map(Vec::len);
            self.resolve(day.key(), task_count);
            match before {
                Some(len) if len >= task_count => {}
                _ => touched += 1,
            }
        }
        touched
    }

    /// Mark task `index` of day `key` as done.
    pub fn mark_complete(&mut self, key: DateKey, index: usize) -> MarkOutcome {
        let flags = self.days.entry(key).or_default();
        if flags.len() <= index {
            flags.resize(index + 1, false);
        }
        if flags[index] {
            return MarkOutcome::AlreadyCompleted;
        }
        flags[index] = true;
        MarkOutcome::Completed
    }

    /// State of task `index` on day `key`. Unknown entries are pending.
    #[must_use]
    pub fn task_state(&self, key: &DateKey, index: usize) -> TaskState {
        let done = self
            .days
            .get(key)
            .and_then(|flags| flags.get(index))
            .copied()
            .unwrap_or(false);
        TaskState::from_flag(done)
    }

    /// Completion percentage of day `key`; 0 when the day is unknown.
    #[must_use]
    pub fn percent(&self, key: &DateKey) -> f64 {
        self.get(key).map_or(0.0, completion_percent)
    }
}

impl FromIterator<(DateKey, Vec<bool>)> for ProgressMap {
    fn from_iter<I: IntoIterator<Item = (DateKey, Vec<bool>)>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

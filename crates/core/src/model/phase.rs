use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::Task;
use crate::time::inclusive_day_count;

/// A contiguous calendar range sharing one set of daily tasks.
///
/// `start > end` is representable on purpose: such a phase simply covers no
/// days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    name: String,
    start: NaiveDate,
    end: NaiveDate,
    tasks: Vec<Task>,
}

impl Phase {
    #[must_use]
    pub fn new(name: impl Into<String>, start: NaiveDate, end: NaiveDate, tasks: Vec<Task>) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            tasks,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// True when the range is inverted and the phase yields no days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    #[must_use]
    pub fn day_count(&self) -> usize {
        inclusive_day_count(self.start, self.end)
    }
}

use chrono::NaiveDate;

use crate::model::{DateKey, Task};

/// One materialized calendar day of the plan.
#[derive(Debug, Clone, PartialEq)]
pub struct DayEntry {
    date: NaiveDate,
    tasks: Vec<Task>,
}

impl DayEntry {
    #[must_use]
    pub fn new(date: NaiveDate, tasks: Vec<Task>) -> Self {
        Self { date, tasks }
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn key(&self) -> DateKey {
        DateKey::new(self.date)
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn total_hours(&self) -> f64 {
        self.tasks.iter().map(Task::hours).sum()
    }
}

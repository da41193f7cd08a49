use study_core::model::{DateKey, DayEntry, ProgressMap, completion_percent};

/// Aggregated completion of a single day, useful for UI and reports.
#[derive(Debug, Clone, PartialEq)]
pub struct DayProgress {
    pub date: DateKey,
    pub total: usize,
    pub completed: usize,
    pub percent: f64,
}

impl DayProgress {
    /// Completion of `day` according to `progress`. A day without stored
    /// flags counts as nothing done.
    #[must_use]
    pub fn of(day: &DayEntry, progress: &ProgressMap) -> Self {
        let key = day.key();
        let flags = progress.get(&key).unwrap_or(&[]);
        let total = flags.len().max(day.tasks().len());
        let completed = flags.iter().filter(|done| **done).count();
        Self {
            date: key,
            total,
            completed,
            percent: completion_percent(flags),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed >= self.total
    }
}

/// Whole-plan counters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanTotals {
    pub days: usize,
    pub tasks: usize,
    pub completed_tasks: usize,
    pub planned_hours: f64,
    pub completed_hours: f64,
}

impl PlanTotals {
    #[must_use]
    pub fn of<'a>(days: impl IntoIterator<Item = &'a DayEntry>, progress: &ProgressMap) -> Self {
        let mut totals = Self::default();
        for day in days {
            totals.days += 1;
            let key = day.key();
            for (index, task) in day.tasks().iter().enumerate() {
                totals.tasks += 1;
                totals.planned_hours += task.hours();
                if progress.task_state(&key, index).is_completed() {
                    totals.completed_tasks += 1;
                    totals.completed_hours += task.hours();
                }
            }
        }
        totals
    }
}

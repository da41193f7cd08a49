use crate::model::{DateKey, DayEntry, Phase};
use crate::time::days_inclusive;

/// Expand one phase into a day per calendar date of `start..=end`.
///
/// Every day receives its own clone of the phase's task list. An inverted
/// range yields an empty vector.
#[must_use]
pub fn expand_phase(phase: &Phase) -> Vec<DayEntry> {
    days_inclusive(phase.start(), phase.end())
        .map(|date| DayEntry::new(date, phase.tasks().to_vec()))
        .collect()
}

/// Concatenate the expanded days of every phase, in declaration order.
#[must_use]
pub fn build_schedule(phases: &[Phase]) -> Vec<DayEntry> {
    phases.iter().flat_map(expand_phase).collect()
}

/// The materialized plan: every day the dashboard shows, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    days: Vec<DayEntry>,
}

impl Schedule {
    #[must_use]
    pub fn from_phases(phases: &[Phase]) -> Self {
        Self {
            days: build_schedule(phases),
        }
    }

    #[must_use]
    pub fn days(&self) -> &[DayEntry] {
        &self.days
    }

    /// First day matching `key`. Overlapping phases may repeat a date; the
    /// earliest declared one wins.
    #[must_use]
    pub fn day(&self, key: DateKey) -> Option<&DayEntry> {
        self.days.iter().find(|day| day.key() == key)
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
    pub fn total_hours(&self) -> f64 {
        self.days.iter().map(DayEntry::total_hours).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProgressMap, Task};
    use crate::time::inclusive_day_count;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tasks() -> Vec<Task> {
        vec![Task::new("A", 2.0).unwrap(), Task::new("B", 1.0).unwrap()]
    }

    #[test]
    fn day_count_matches_inclusive_range() {
        let ranges = [
            (ymd(2025, 9, 13), ymd(2025, 9, 13)),
            (ymd(2025, 9, 13), ymd(2025, 9, 30)),
            (ymd(2025, 10, 26), ymd(2025, 11, 15)),
            (ymd(2024, 2, 1), ymd(2024, 3, 1)),
        ];
        for (start, end) in ranges {
            let phase = Phase::new("P", start, end, tasks());
            assert_eq!(expand_phase(&phase).len(), inclusive_day_count(start, end));
            assert_eq!(phase.day_count(), inclusive_day_count(start, end));
        }
    }

    #[test]
    fn inverted_phase_yields_no_days() {
        let phase = Phase::new("Backwards", ymd(2025, 9, 14), ymd(2025, 9, 13), tasks());
        assert!(phase.is_empty());
        assert!(expand_phase(&phase).is_empty());
    }

    #[test]
    fn days_are_chronological_and_carry_phase_tasks() {
        let phase = Phase::new("P", ymd(2025, 9, 13), ymd(2025, 9, 14), tasks());
        let days = expand_phase(&phase);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date(), ymd(2025, 9, 13));
        assert_eq!(days[1].date(), ymd(2025, 9, 14));
        for day in &days {
            let names: Vec<_> = day.tasks().iter().map(Task::name).collect();
            assert_eq!(names, ["A", "B"]);
        }
    }

    #[test]
    fn phases_concatenate_in_declaration_order() {
        let later = Phase::new("Later", ymd(2025, 10, 1), ymd(2025, 10, 2), tasks());
        let earlier = Phase::new("Earlier", ymd(2025, 9, 1), ymd(2025, 9, 1), tasks());
        let days = build_schedule(&[later, earlier]);
        let dates: Vec<_> = days.iter().map(DayEntry::date).collect();
        assert_eq!(dates, [ymd(2025, 10, 1), ymd(2025, 10, 2), ymd(2025, 9, 1)]);
    }

    #[test]
    fn per_day_tasks_are_independent_copies() {
        let phase = Phase::new("P", ymd(2025, 9, 13), ymd(2025, 9, 14), tasks());
        let schedule = Schedule::from_phases(&[phase]);
        let before = schedule.days()[1].clone();

        let mut progress = ProgressMap::new();
        progress.seed(schedule.days());
        progress.mark_complete(schedule.days()[0].key(), 0);

        assert_eq!(schedule.days()[1], before);
        assert_eq!(progress.get(&schedule.days()[1].key()), Some(&[false, false][..]));
    }

    #[test]
    fn schedule_looks_up_days_and_totals_hours() {
        let phase = Phase::new("P", ymd(2025, 12, 31), ymd(2026, 1, 1), tasks());
        let schedule = Schedule::from_phases(&[phase]);
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.total_hours(), 6.0);
        let key: DateKey = "2026-01-01".parse().unwrap();
        assert_eq!(schedule.day(key).map(DayEntry::date), Some(ymd(2026, 1, 1)));
        assert!(schedule.day("2026-01-02".parse().unwrap()).is_none());
    }
}

use std::sync::Arc;

use study_core::Schedule;
use study_core::model::ProgressMap;

use super::progress::{DayProgress, PlanTotals};

/// Read-only copy of the dashboard state handed to renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub schedule: Arc<Schedule>,
    pub progress: ProgressMap,
}

impl DashboardSnapshot {
    #[must_use]
    pub fn days(&self) -> Vec<DayProgress> {
        self.schedule
            .days()
            .iter()
            .map(|day| DayProgress::of(day, &self.progress))
            .collect()
    }

    #[must_use]
    pub fn totals(&self) -> PlanTotals {
        PlanTotals::of(self.schedule.days(), &self.progress)
    }
}

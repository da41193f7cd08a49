use std::sync::Arc;

use tokio::sync::Mutex;

use study_core::Schedule;
use study_core::model::{DateKey, MarkOutcome, ProgressMap};

use super::progress::DayProgress;
use super::view::DashboardSnapshot;
use crate::error::DashboardError;
use crate::progress_store::ProgressStore;

//
// ─── COMPLETION RESULT ─────────────────────────────────────────────────────────
//

/// Outcome of activating one task's completion control.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskCompletion {
    pub date: DateKey,
    pub index: usize,
    pub outcome: MarkOutcome,
    /// Day completion after the activation.
    pub percent: f64,
    /// Whether the progress blob was written during this activation.
    pub persisted: bool,
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Single owner of the session's progress map.
///
/// Every mutation happens under one lock that is held until the write to
/// storage has finished, so completions are applied and persisted strictly
/// one after another.
pub struct DashboardService {
    schedule: Arc<Schedule>,
    store: ProgressStore,
    progress: Mutex<ProgressMap>,
}

impl DashboardService {
    /// Load stored progress, seed an all-false entry for every planned day
    /// that has none, and persist the result once.
    ///
    /// Never fails: unreadable progress starts empty and a failed seed write
    /// is logged.
    pub async fn open(schedule: Schedule, store: ProgressStore) -> Self {
        let mut progress = store.load().await;
        let seeded = progress.seed(schedule.days());
        tracing::info!(
            days = schedule.len(),
            stored = progress.len(),
            seeded,
            "dashboard opened"
        );

        if let Err(err) = store.save(&progress).await {
            tracing::error!(error = %err, "could not persist seeded progress");
        }

        Self {
            schedule: Arc::new(schedule),
            store,
            progress: Mutex::new(progress),
        }
    }

    /// Copy of the current state for rendering.
    pub async fn snapshot(&self) -> DashboardSnapshot {
        let progress = self.progress.lock().await.clone();
        DashboardSnapshot {
            schedule: Arc::clone(&self.schedule),
            progress,
        }
    }

    /// Current completion of one planned day.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::UnknownDay` if `date` is not in the plan.
    pub async fn day_progress(&self, date: DateKey) -> Result<DayProgress, DashboardError> {
        let day = self
            .schedule
            .day(date)
            .ok_or(DashboardError::UnknownDay(date))?;
        let progress = self.progress.lock().await;
        Ok(DayProgress::of(day, &progress))
    }

    /// Mark task `index` of day `date` as done and persist the whole map.
    ///
    /// Activating an already completed task changes nothing and writes
    /// nothing. A failed write is logged; the completion still holds for the
    /// rest of the session.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::UnknownDay` / `DashboardError::UnknownTask`
    /// when the target is not part of the plan.
    pub async fn complete_task(
        &self,
        date: DateKey,
        index: usize,
    ) -> Result<TaskCompletion, DashboardError> {
        let day = self
            .schedule
            .day(date)
            .ok_or(DashboardError::UnknownDay(date))?;
        let count = day.tasks().len();
        if index >= count {
            return Err(DashboardError::UnknownTask { date, index, count });
        }

        let mut progress = self.progress.lock().await;
        progress.resolve(date, count);
        let outcome = progress.mark_complete(date, index);
        let percent = progress.percent(&date);

        let persisted = if outcome.changed() {
            match self.store.save(&progress).await {
                Ok(()) => true,
                Err(err) => {
                    tracing::error!(%date, index, error = %err, "completion not persisted");
                    false
                }
            }
        } else {
            tracing::debug!(%date, index, "task already completed");
            false
        };

        if outcome.changed() {
            tracing::info!(%date, index, task = day.tasks()[index].name(), percent, "task completed");
        }

        Ok(TaskCompletion {
            date,
            index,
            outcome,
            percent,
            persisted,
        })
    }
}

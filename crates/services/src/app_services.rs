use std::sync::Arc;

use storage::repository::Storage;
use study_core::Schedule;
use study_core::model::Phase;

use crate::Clock;
use crate::dashboard::DashboardService;
use crate::error::AppServicesError;
use crate::progress_store::ProgressStore;

/// Assembles app-facing services from a plan and a storage backend.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    dashboard: Arc<DashboardService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        phases: &[Phase],
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::with_storage(&storage, clock, phases).await)
    }

    /// Build services on top of an already opened storage.
    pub async fn with_storage(storage: &Storage, clock: Clock, phases: &[Phase]) -> Self {
        let schedule = schedule_from_plan(phases);
        let store = ProgressStore::new(Arc::clone(&storage.key_values));
        let dashboard = Arc::new(DashboardService::open(schedule, store).await);
        Self { clock, dashboard }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }
}

/// Expand the plan, noting phases whose range is inverted.
#[must_use]
pub fn schedule_from_plan(phases: &[Phase]) -> Schedule {
    for phase in phases.iter().filter(|phase| phase.is_empty()) {
        tracing::debug!(
            phase = phase.name(),
            start = %phase.start(),
            end = %phase.end(),
            "phase ends before it starts; it contributes no days"
        );
    }
    Schedule::from_phases(phases)
}

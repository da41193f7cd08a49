#![forbid(unsafe_code)]

pub mod app_services;
pub mod dashboard;
pub mod error;
pub mod progress_store;

pub use study_core::Clock;

pub use app_services::{AppServices, schedule_from_plan};
pub use dashboard::{DashboardService, DashboardSnapshot, DayProgress, PlanTotals, TaskCompletion};
pub use error::{AppServicesError, DashboardError, ProgressStoreError};
pub use progress_store::{PROGRESS_KEY, ProgressStore};

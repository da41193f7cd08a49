mod progress;
mod service;
mod view;

// Public API of the dashboard subsystem.
pub use crate::error::DashboardError;
pub use progress::{DayProgress, PlanTotals};
pub use service::{DashboardService, TaskCompletion};
pub use view::DashboardSnapshot;

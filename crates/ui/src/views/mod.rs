mod dashboard;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::{BoardContent, BoardHandle, DashboardBoard, DashboardView, use_dashboard_board};
pub use state::{ViewError, ViewState, view_state_from_resource};

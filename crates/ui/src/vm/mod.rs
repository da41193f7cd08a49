mod dashboard_vm;
mod labels;
mod time_fmt;

pub use dashboard_vm::{DashboardVm, DayCardVm, TaskRowVm, map_day_card, render_dashboard};
pub use labels::{Labels, format_hours, format_percent, labels};
pub use time_fmt::format_day_heading;

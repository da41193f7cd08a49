mod day;
mod ids;
mod phase;
mod progress;
mod task;

pub use day::DayEntry;
pub use ids::{DateKey, DateKeyError};
pub use phase::Phase;
pub use progress::{MarkOutcome, ProgressMap, TaskState, completion_percent};
pub use task::{Task, TaskDraft, TaskError};

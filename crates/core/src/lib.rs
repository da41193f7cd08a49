#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod plan;
pub mod schedule;
pub mod time;

pub use error::Error;
pub use schedule::{Schedule, build_schedule, expand_phase};
pub use time::{Clock, Locale};

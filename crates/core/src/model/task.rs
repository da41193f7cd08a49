use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum TaskError {
    #[error("task name cannot be empty")]
    EmptyName,

    #[error("task hours must be a positive number, got {hours}")]
    InvalidHours { hours: f64 },
}

/// Unvalidated task as it appears in a plan file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub name: String,
    pub hours: f64,
}

impl TaskDraft {
    /// # Errors
    ///
    /// See [`Task::new`].
    pub fn validate(self) -> Result<Task, TaskError> {
        Task::new(self.name, self.hours)
    }
}

/// One study activity and its daily hour estimate.
///
/// Tasks are templates: each generated day owns its own copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TaskDraft")]
pub struct Task {
    name: String,
    hours: f64,
}

impl Task {
    /// # Errors
    ///
    /// Returns `TaskError::EmptyName` for blank names and
    /// `TaskError::InvalidHours` unless `hours` is finite and > 0.
    pub fn new(name: impl Into<String>, hours: f64) -> Result<Self, TaskError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(TaskError::EmptyName);
        }
        if !hours.is_finite() || hours <= 0.0 {
            return Err(TaskError::InvalidHours { hours });
        }
        Ok(Self { name, hours })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hours(&self) -> f64 {
        self.hours
    }
}

impl TryFrom<TaskDraft> for Task {
    type Error = TaskError;

    fn try_from(draft: TaskDraft) -> Result<Self, Self::Error> {
        draft.validate()
    }
}

use thiserror::Error;

use crate::model::{DateKeyError, TaskError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Task(#[from] TaskError),
    #[error(transparent)]
    DateKey(#[from] DateKeyError),
}

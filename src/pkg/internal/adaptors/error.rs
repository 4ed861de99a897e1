use std::time::Duration;

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("malformed job listing id: {0:?}")]
    MalformedIdentifier(String),

    #[error("job listing not found: {0}")]
    NotFound(String),

    #[error("{op} exceeded its {budget:?} budget")]
    Timeout { op: &'static str, budget: Duration },

    #[error("database operation failed: {0}")]
    Operation(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Operation(err.to_string())
    }
}

use std::{future::IntoFuture, time::Duration};

use error::{StoreError, StoreResult};

pub mod error;
pub mod jobs;

/// Runs one database round trip under `budget`. The timer is dropped with the
/// call, whichever way it ends.
pub async fn bounded<T, F>(op: &'static str, budget: Duration, call: F) -> StoreResult<T>
where
    F: IntoFuture<Output = mongodb::error::Result<T>>,
{
    match tokio::time::timeout(budget, call).await {
        Ok(res) => Ok(res?),
        Err(_) => Err(StoreError::Timeout { op, budget }),
    }
}

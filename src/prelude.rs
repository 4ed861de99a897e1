use axum::http::StatusCode;
use standard_error::{Interpolate, StandardError, Status};

use crate::pkg::internal::adaptors::error::StoreError;

pub type Result<T> = core::result::Result<T, StandardError>;

impl From<StoreError> for StandardError {
    fn from(err: StoreError) -> Self {
        let (code, status) = match &err {
            StoreError::MalformedIdentifier(_) => ("ERR-JOB-001", StatusCode::BAD_REQUEST),
            StoreError::NotFound(_) => ("ERR-JOB-404", StatusCode::NOT_FOUND),
            // a blown budget is just another failed round trip
            StoreError::Timeout { .. } | StoreError::Operation(_) => {
                ("ERR-DB-001", StatusCode::INTERNAL_SERVER_ERROR)
            }
        };
        if status.is_server_error() {
            tracing::warn!("store call failed: {}", &err);
        } else {
            tracing::debug!("store call rejected: {}", &err);
        }
        StandardError::new(code)
            .code(status)
            .interpolate_err(err.to_string())
    }
}

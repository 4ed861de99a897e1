use axum::{extract::State, http::StatusCode};

use crate::{pkg::server::state::AppState, prelude::Result};

/// Answers without touching the store.
pub async fn livez() -> StatusCode {
    tracing::trace!("liveness probe answered");
    StatusCode::OK
}

pub async fn healthz(State(state): State<AppState>) -> Result<()> {
    state.store.ping().await?;
    tracing::debug!("mongodb primary answered health probe");
    Ok(())
}

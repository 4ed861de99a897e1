pub mod handlers;
pub mod router;
pub mod state;

use standard_error::{Interpolate, StandardError};

use crate::{conf::settings, prelude::Result};
use router::build_routes;
use state::AppState;

pub async fn listen() -> Result<()> {
    let state = AppState::new().await?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", settings.listen_port))
        .await
        .map_err(|e| StandardError::new("ERR-SRV-000").interpolate_err(e.to_string()))?;
    tracing::info!("Listening at port {}", settings.listen_port);
    tokio::select! {
        r = axum::serve(listener, build_routes(state)) => {
            tracing::warn!("server ended unexpectedly: {:?}", &r)
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("received ctrl+c interrupt, closing server");
        }
    }
    Ok(())
}

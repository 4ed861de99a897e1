mod cmd;
pub mod conf;
pub mod pkg;
mod prelude;

use tracing_subscriber::EnvFilter;

use crate::prelude::Result;

/// Filter taken from `var`, falling back to info. Read only after `.env` is loaded.
fn log_filter(var: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(EnvFilter::DEFAULT_ENV))
        .init();
    if dotenv.is_err() {
        tracing::debug!("no .env file found, reading process environment only");
    }

    cmd::run().await?;
    Ok(())
}

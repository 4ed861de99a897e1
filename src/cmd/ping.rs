use crate::{conf::settings, pkg::internal::db, prelude::Result};

pub async fn check() -> Result<()> {
    let client = db::connect(&settings).await?;
    tracing::debug!("ping succeeded, closing client");
    client.shutdown().await;

    println!("mongodb primary reachable, using database {}", settings.database_name);
    Ok(())
}

use std::time::Duration;

use mongodb::{
    Client, Database,
    bson::doc,
    options::{ClientOptions, ReadPreference, SelectionCriteria},
};
use standard_error::{Interpolate, StandardError};

use crate::{
    conf::Settings,
    pkg::internal::adaptors::{bounded, error::StoreResult},
    prelude::Result,
};

/// Builds the process-wide client and makes sure the primary answers before
/// anything is served.
pub async fn connect(conf: &Settings) -> Result<Client> {
    let mut options = ClientOptions::parse(&conf.mongo_uri)
        .await
        .map_err(|e| StandardError::new("ERR-DB-000").interpolate_err(e.to_string()))?;
    options.app_name = Some(conf.service_name.clone());
    options.connect_timeout = Some(conf.connect_timeout());
    options.server_selection_timeout = Some(conf.connect_timeout());

    let client = Client::with_options(options)
        .map_err(|e| StandardError::new("ERR-DB-000").interpolate_err(e.to_string()))?;
    ping_primary(&client.database(&conf.database_name), conf.connect_timeout())
        .await
        .map_err(|e| StandardError::new("ERR-DB-000").interpolate_err(e.to_string()))?;

    tracing::debug!("connected to mongodb, database {}", &conf.database_name);
    Ok(client)
}

pub async fn ping_primary(db: &Database, budget: Duration) -> StoreResult<()> {
    bounded(
        "ping",
        budget,
        db.run_command(doc! { "ping": 1 })
            .selection_criteria(SelectionCriteria::ReadPreference(ReadPreference::Primary)),
    )
    .await?;
    Ok(())
}

use std::sync::Arc;

use crate::{
    conf::settings,
    pkg::internal::{
        db,
        listings::{ListingStore, MongoListingStore},
    },
    prelude::Result,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ListingStore>,
}

impl AppState {
    /// Connects once; the client lives inside the store for the rest of the process.
    pub async fn new() -> Result<AppState> {
        let client = db::connect(&settings).await?;
        let store = MongoListingStore::new(
            &client,
            &settings.database_name,
            &settings.collection_name,
            settings.operation_timeout(),
        );
        Ok(Self::with_store(Arc::new(store)))
    }

    pub fn with_store(store: Arc<dyn ListingStore>) -> AppState {
        AppState { store }
    }
}

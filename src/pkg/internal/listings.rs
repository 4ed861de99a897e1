use std::time::Duration;

use async_trait::async_trait;
use mongodb::{Client, Collection, Database};

use crate::pkg::internal::{
    adaptors::{
        error::{StoreError, StoreResult},
        jobs::{
            mutators::JobMutator,
            selectors::JobSelector,
            spec::{
                CreateJobListingInput, DeleteJobResponse, JobDocument, JobListing,
                UpdateJobListingInput,
            },
        },
    },
    db::ping_primary,
};

/// CRUD over the job listing collection. Every call is one independent round
/// trip; nothing is cached between calls.
#[async_trait]
pub trait ListingStore: Send + Sync {
    async fn ping(&self) -> StoreResult<()>;

    /// `None` when no listing has this id.
    async fn get(&self, id: &str) -> StoreResult<Option<JobListing>>;

    async fn list(&self) -> StoreResult<Vec<JobListing>>;

    async fn create(&self, input: CreateJobListingInput) -> StoreResult<JobListing>;

    /// Fails with [`StoreError::NotFound`] when no listing has this id.
    async fn update(&self, id: &str, input: UpdateJobListingInput) -> StoreResult<JobListing>;

    /// Echoes `id` whether or not anything was removed.
    async fn delete(&self, id: &str) -> StoreResult<DeleteJobResponse>;
}

pub struct MongoListingStore {
    db: Database,
    jobs: Collection<JobDocument>,
    budget: Duration,
}

impl MongoListingStore {
    pub fn new(client: &Client, database: &str, collection: &str, budget: Duration) -> Self {
        let db = client.database(database);
        let jobs = db.collection::<JobDocument>(collection);
        MongoListingStore { db, jobs, budget }
    }

    fn selector(&self) -> JobSelector<'_> {
        JobSelector::new(&self.jobs, self.budget)
    }

    fn mutator(&self) -> JobMutator<'_> {
        JobMutator::new(&self.jobs, self.budget)
    }
}

#[async_trait]
impl ListingStore for MongoListingStore {
    async fn ping(&self) -> StoreResult<()> {
        ping_primary(&self.db, self.budget).await
    }

    async fn get(&self, id: &str) -> StoreResult<Option<JobListing>> {
        Ok(self.selector().get_by_id(id).await?.map(JobListing::from))
    }

    async fn list(&self) -> StoreResult<Vec<JobListing>> {
        let rows = self.selector().get_all().await?;
        Ok(rows.into_iter().map(JobListing::from).collect())
    }

    async fn create(&self, input: CreateJobListingInput) -> StoreResult<JobListing> {
        Ok(self.mutator().create(&input).await?.into())
    }

    async fn update(&self, id: &str, input: UpdateJobListingInput) -> StoreResult<JobListing> {
        match self.mutator().update(id, &input).await? {
            Some(row) => Ok(row.into()),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    async fn delete(&self, id: &str) -> StoreResult<DeleteJobResponse> {
        self.mutator().delete(id).await?;
        Ok(DeleteJobResponse {
            deleted_job_id: id.to_string(),
        })
    }
}


#[cfg(test)]
mod tests {
    use mongodb::bson::oid::ObjectId;
    use tracing_test::traced_test;

    use super::{memory::MemoryListingStore, *};
    use crate::{conf::settings, pkg::internal::db::connect, prelude::Result};

    fn engineer() -> CreateJobListingInput {
        CreateJobListingInput {
            title: "Engineer".into(),
            description: "Build things".into(),
            url: "http://x".into(),
            company: "Acme".into(),
        }
    }

    async fn crud_lifecycle(store: &dyn ListingStore) -> StoreResult<()> {
        let created = store.create(engineer()).await?;
        assert_eq!(created.id.len(), 24);
        assert_eq!(created.title, "Engineer");
        assert_eq!(created.company, "Acme");

        let fetched = store.get(&created.id).await?;
        assert_eq!(fetched.as_ref(), Some(&created));

        let updated = store
            .update(
                &created.id,
                UpdateJobListingInput {
                    title: Some("Senior Engineer".into()),
                    ..Default::default()
                },
            )
            .await?;
        assert_eq!(updated.title, "Senior Engineer");
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.url, created.url);
        assert_eq!(updated.company, created.company);

        let deleted = store.delete(&created.id).await?;
        assert_eq!(deleted.deleted_job_id, created.id);
        assert_eq!(store.get(&created.id).await?, None);
        Ok(())
    }

    async fn missing_ids(store: &dyn ListingStore) -> StoreResult<()> {
        let ghost = ObjectId::new().to_hex();
        assert_eq!(store.get(&ghost).await?, None);
        assert_eq!(store.delete(&ghost).await?.deleted_job_id, ghost);
        let res = store.update(&ghost, UpdateJobListingInput::default()).await;
        assert!(matches!(res, Err(StoreError::NotFound(id)) if id == ghost));
        let res = store
            .update(
                &ghost,
                UpdateJobListingInput {
                    url: Some("http://y".into()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(res, Err(StoreError::NotFound(_))));

        assert!(matches!(store.get("zzz").await, Err(StoreError::MalformedIdentifier(_))));
        assert!(matches!(store.delete("zzz").await, Err(StoreError::MalformedIdentifier(_))));
        let res = store
            .update(
                "zzz",
                UpdateJobListingInput {
                    title: Some("Senior Engineer".into()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(res, Err(StoreError::MalformedIdentifier(id)) if id == "zzz"));
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_crud_lifecycle() -> StoreResult<()> {
        crud_lifecycle(&MemoryListingStore::default()).await
    }

    #[tokio::test]
    #[traced_test]
    async fn test_missing_ids() -> StoreResult<()> {
        missing_ids(&MemoryListingStore::default()).await
    }

    #[tokio::test]
    async fn test_list_counts_creates_minus_deletes() -> StoreResult<()> {
        let store = MemoryListingStore::default();
        let mut ids = vec![];
        for _ in 0..5 {
            ids.push(store.create(engineer()).await?.id);
        }
        store.delete(&ids[1]).await?;
        store.delete(&ids[3]).await?;
        let listed: Vec<String> = store.list().await?.into_iter().map(|j| j.id).collect();
        assert_eq!(listed, vec![ids[0].clone(), ids[2].clone(), ids[4].clone()]);
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_update_returns_current_state() -> StoreResult<()> {
        let store = MemoryListingStore::default();
        let created = store.create(engineer()).await?;
        let same = store
            .update(&created.id, UpdateJobListingInput::default())
            .await?;
        assert_eq!(same, created);
        Ok(())
    }

    /// `None` when no `MONGO_URI` is configured, so the live tests skip.
    async fn mongo_store() -> Result<Option<MongoListingStore>> {
        let _ = dotenvy::dotenv();
        if std::env::var("MONGO_URI").is_err() {
            tracing::warn!("MONGO_URI not set, skipping live mongodb test");
            return Ok(None);
        }
        let client = connect(&settings).await?;
        Ok(Some(MongoListingStore::new(
            &client,
            &settings.database_name,
            &format!("{}_test", settings.collection_name),
            settings.operation_timeout(),
        )))
    }

    #[tokio::test]
    #[traced_test]
    async fn test_mongo_crud_lifecycle() -> Result<()> {
        let Some(store) = mongo_store().await? else {
            return Ok(());
        };
        store.ping().await?;
        crud_lifecycle(&store).await?;
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_mongo_missing_ids() -> Result<()> {
        let Some(store) = mongo_store().await? else {
            return Ok(());
        };
        missing_ids(&store).await?;
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_mongo_empty_update_and_insert_ack() -> Result<()> {
        let Some(store) = mongo_store().await? else {
            return Ok(());
        };
        let created = store.create(engineer()).await?;
        let fetched = store.get(&created.id).await?;
        assert_eq!(fetched.as_ref(), Some(&created));

        let same = store
            .update(&created.id, UpdateJobListingInput::default())
            .await?;
        assert_eq!(same, created);

        let listed = store.list().await?;
        assert!(listed.iter().any(|j| j.id == created.id));
        store.delete(&created.id).await?;
        Ok(())
    }
}

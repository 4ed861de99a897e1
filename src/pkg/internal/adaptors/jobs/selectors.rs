use std::time::Duration;

use futures::TryStreamExt;
use mongodb::{Collection, bson::doc};

use crate::pkg::internal::adaptors::{
    bounded,
    error::StoreResult,
    jobs::spec::{JobDocument, parse_id},
};

pub struct JobSelector<'a> {
    jobs: &'a Collection<JobDocument>,
    budget: Duration,
}

impl<'a> JobSelector<'a> {
    pub fn new(jobs: &'a Collection<JobDocument>, budget: Duration) -> Self {
        JobSelector { jobs, budget }
    }

    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<JobDocument>> {
        let oid = parse_id(id)?;
        tracing::debug!("fetching job {}", &oid);
        bounded("find_one", self.budget, self.jobs.find_one(doc! { "_id": oid })).await
    }

    /// Every listing in natural collection order.
    pub async fn get_all(&self) -> StoreResult<Vec<JobDocument>> {
        bounded("find", self.budget, async {
            let cursor = self.jobs.find(doc! {}).await?;
            cursor.try_collect::<Vec<_>>().await
        })
        .await
    }
}

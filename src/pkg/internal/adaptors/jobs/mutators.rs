use std::time::Duration;

use mongodb::{
    Collection,
    bson::{Document, doc},
    options::ReturnDocument,
};

use crate::pkg::internal::adaptors::{
    bounded,
    error::{StoreError, StoreResult},
    jobs::spec::{CreateJobListingInput, JobDocument, UpdateJobListingInput, parse_id},
};

pub struct JobMutator<'a> {
    jobs: &'a Collection<JobDocument>,
    budget: Duration,
}

impl<'a> JobMutator<'a> {
    pub fn new(jobs: &'a Collection<JobDocument>, budget: Duration) -> Self {
        JobMutator { jobs, budget }
    }

    /// Inserts the listing and builds the result from the insert ack, no read back.
    pub async fn create(&self, job: &CreateJobListingInput) -> StoreResult<JobDocument> {
        let raw = self.jobs.clone_with_type::<Document>();
        let inserted = bounded(
            "insert_one",
            self.budget,
            raw.insert_one(doc! {
                "title": job.title.as_str(),
                "description": job.description.as_str(),
                "url": job.url.as_str(),
                "company": job.company.as_str(),
            }),
        )
        .await?;
        let id = inserted.inserted_id.as_object_id().ok_or_else(|| {
            StoreError::Operation(format!("unexpected inserted id {}", inserted.inserted_id))
        })?;
        tracing::debug!("created job {}", &id);
        Ok(JobDocument {
            id,
            title: job.title.clone(),
            description: job.description.clone(),
            url: job.url.clone(),
            company: job.company.clone(),
        })
    }

    /// Merge-patches the set fields and returns the post-update document,
    /// or `None` when nothing matched.
    pub async fn update(
        &self,
        id: &str,
        job: &UpdateJobListingInput,
    ) -> StoreResult<Option<JobDocument>> {
        let oid = parse_id(id)?;
        let filter = doc! { "_id": oid };
        if job.is_empty() {
            // an empty $set is rejected by the server
            return bounded("find_one", self.budget, self.jobs.find_one(filter)).await;
        }
        let row = bounded(
            "find_one_and_update",
            self.budget,
            self.jobs
                .find_one_and_update(filter, doc! { "$set": job.to_patch() })
                .return_document(ReturnDocument::After),
        )
        .await?;
        tracing::debug!("updated job {}, matched: {}", &oid, row.is_some());
        Ok(row)
    }

    /// Returns how many documents went away; zero is not an error.
    pub async fn delete(&self, id: &str) -> StoreResult<u64> {
        let oid = parse_id(id)?;
        let result = bounded("delete_one", self.budget, self.jobs.delete_one(doc! { "_id": oid }))
            .await?;
        tracing::debug!("deleted job {}, removed: {}", &oid, result.deleted_count);
        Ok(result.deleted_count)
    }
}

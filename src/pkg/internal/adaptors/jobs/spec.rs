use mongodb::bson::{Document, oid::ObjectId};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::pkg::internal::adaptors::error::{StoreError, StoreResult};

/// A listing as it sits in the `jobs` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    pub url: String,
    pub company: String,
}

/// A listing as handed to callers, with the id rendered as hex.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub company: String,
}

impl From<JobDocument> for JobListing {
    fn from(doc: JobDocument) -> Self {
        JobListing {
            id: doc.id.to_hex(),
            title: doc.title,
            description: doc.description,
            url: doc.url,
            company: doc.company,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobListingInput {
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub description: String,
    #[validate(url(message = "Field must be a valid url"))]
    pub url: String,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub company: String,
}

/// Field mask for a partial update. Only fields that are set end up in the
/// `$set`; `company` is not updatable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateJobListingInput {
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub description: Option<String>,
    #[validate(url(message = "Field must be a valid url"))]
    pub url: Option<String>,
}

impl UpdateJobListingInput {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.url.is_none()
    }

    pub fn to_patch(&self) -> Document {
        let mut patch = Document::new();
        if let Some(title) = &self.title {
            patch.insert("title", title.as_str());
        }
        if let Some(description) = &self.description {
            patch.insert("description", description.as_str());
        }
        if let Some(url) = &self.url {
            patch.insert("url", url.as_str());
        }
        patch
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteJobResponse {
    pub deleted_job_id: String,
}

pub fn parse_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::MalformedIdentifier(id.to_string()))
}

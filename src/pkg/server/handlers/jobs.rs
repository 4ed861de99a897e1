use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use standard_error::{Interpolate, StandardError, Status};
use validator::{Validate, ValidationErrors};

use crate::{
    pkg::{
        internal::adaptors::{
            error::StoreError,
            jobs::spec::{CreateJobListingInput, DeleteJobResponse, JobListing, UpdateJobListingInput},
        },
        server::state::AppState,
    },
    prelude::Result,
};

fn invalid(e: ValidationErrors) -> StandardError {
    StandardError::new("ERR-JOB-002")
        .code(StatusCode::BAD_REQUEST)
        .interpolate_err(e.to_string())
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<JobListing>>> {
    Ok(Json(state.store.list().await?))
}

pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobListing>> {
    match state.store.get(&id).await? {
        Some(job) => Ok(Json(job)),
        None => Err(StoreError::NotFound(id).into()),
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateJobListingInput>,
) -> Result<(StatusCode, Json<JobListing>)> {
    input.validate().map_err(invalid)?;
    let job = state.store.create(input).await?;
    tracing::info!("created job listing {} for {}", &job.id, &job.company);
    Ok((StatusCode::CREATED, Json(job)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateJobListingInput>,
) -> Result<Json<JobListing>> {
    input.validate().map_err(invalid)?;
    let job = state.store.update(&id, input).await?;
    tracing::info!("updated job listing {}", &job.id);
    Ok(Json(job))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteJobResponse>> {
    let res = state.store.delete(&id).await?;
    tracing::info!("deleted job listing {}", &res.deleted_job_id);
    Ok(Json(res))
}

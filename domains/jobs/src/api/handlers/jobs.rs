//! Job API handlers
//!
//! Implements:
//! - GET /jobs — List every job
//! - GET /jobs/:email — List jobs posted by a buyer (session required)
//! - POST /job — Create a job
//! - GET /job/:id — Fetch one job (`null` when absent)
//! - PUT /job/:id — Upsert a job
//! - DELETE /job/:id — Delete a job

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use solosphere_auth::SessionUser;
use solosphere_common::{document_to_json, documents_to_json, JsonDocument, ObjectIdPath, Result};
use solosphere_store::{DeleteAck, InsertOneAck, UpdateAck};

use crate::api::middleware::JobsState;

/// GET /jobs — Every job posting
pub async fn list_jobs(State(state): State<JobsState>) -> Result<Json<Value>> {
    let jobs = state.repos.jobs.list().await?;
    Ok(Json(documents_to_json(jobs)))
}

/// GET /job/:id — One job, or `null` when no job has the identifier
pub async fn get_job(
    State(state): State<JobsState>,
    ObjectIdPath(id): ObjectIdPath,
) -> Result<Json<Value>> {
    let job = state.repos.jobs.find(id).await?;
    Ok(Json(job.map(document_to_json).unwrap_or(Value::Null)))
}

/// POST /job — Store a new job posting
pub async fn create_job(
    State(state): State<JobsState>,
    JsonDocument(job): JsonDocument,
) -> Result<Json<InsertOneAck>> {
    let ack = state.repos.jobs.create(job).await?;
    tracing::info!(job_id = %ack.inserted_id, "Job created");
    Ok(Json(ack))
}

/// GET /jobs/:email — Jobs whose `buyer.email` is the requested email
pub async fn list_buyer_jobs(
    SessionUser(_): SessionUser,
    State(state): State<JobsState>,
    Path(email): Path<String>,
) -> Result<Json<Value>> {
    let jobs = state.repos.jobs.list_by_buyer(&email).await?;
    Ok(Json(documents_to_json(jobs)))
}

/// PUT /job/:id — Set the posted fields, inserting the job if it is absent
pub async fn upsert_job(
    State(state): State<JobsState>,
    ObjectIdPath(id): ObjectIdPath,
    JsonDocument(fields): JsonDocument,
) -> Result<Json<UpdateAck>> {
    let ack = state.repos.jobs.upsert(id, fields).await?;
    Ok(Json(ack))
}

/// DELETE /job/:id — Remove a job; deleting an absent job reports zero deletions
pub async fn delete_job(
    SessionUser(session): SessionUser,
    State(state): State<JobsState>,
    ObjectIdPath(id): ObjectIdPath,
) -> Result<Json<DeleteAck>> {
    let ack = state.repos.jobs.delete(id).await?;
    tracing::info!(
        job_id = %id,
        deleted = ack.deleted_count,
        requested_by = session.email().unwrap_or("unknown"),
        "Job delete processed"
    );
    Ok(Json(ack))
}

//! Route definitions for Jobs domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::jobs;
use super::middleware::JobsState;

/// Create all Jobs domain API routes
pub fn routes() -> Router<JobsState> {
    Router::new()
        .route("/jobs", get(jobs::list_jobs))
        .route("/jobs/{email}", get(jobs::list_buyer_jobs))
        .route("/job", post(jobs::create_job))
        .route(
            "/job/{id}",
            get(jobs::get_job)
                .put(jobs::upsert_job)
                .delete(jobs::delete_job),
        )
}

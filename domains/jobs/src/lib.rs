//! Jobs domain: job postings owned by a buyer

pub mod api;
pub mod repository;

pub use api::{routes, JobsState};
pub use repository::{JobRepository, JobsRepositories, JOBS_COLLECTION};

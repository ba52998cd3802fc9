//! Repository implementations for Jobs domain

pub mod jobs;

use solosphere_store::DocumentStore;
use std::sync::Arc;

pub use jobs::{JobRepository, JOBS_COLLECTION};

/// Combined repository access for the Jobs domain
#[derive(Clone)]
pub struct JobsRepositories {
    pub jobs: JobRepository,
}

impl JobsRepositories {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            jobs: JobRepository::new(store),
        }
    }
}

//! Jobs domain state and auth backend integration

use crate::JobsRepositories;
use axum::extract::FromRef;
use solosphere_auth::AuthBackend;

/// Application state for the Jobs domain
#[derive(Clone)]
pub struct JobsState {
    pub repos: JobsRepositories,
    pub auth: AuthBackend,
}

impl FromRef<JobsState> for AuthBackend {
    fn from_ref(state: &JobsState) -> Self {
        state.auth.clone()
    }
}

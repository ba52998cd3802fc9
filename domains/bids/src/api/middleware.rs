//! Bids domain state and auth backend integration

use crate::BidsRepositories;
use axum::extract::FromRef;
use solosphere_auth::AuthBackend;

/// Application state for the Bids domain
#[derive(Clone)]
pub struct BidsState {
    pub repos: BidsRepositories,
    pub auth: AuthBackend,
}

impl FromRef<BidsState> for AuthBackend {
    fn from_ref(state: &BidsState) -> Self {
        state.auth.clone()
    }
}

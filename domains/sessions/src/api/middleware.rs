//! Sessions domain state and auth backend integration

use axum::extract::FromRef;
use solosphere_auth::AuthBackend;

/// Application state for the Sessions domain
#[derive(Clone)]
pub struct SessionsState {
    pub auth: AuthBackend,
}

impl FromRef<SessionsState> for AuthBackend {
    fn from_ref(state: &SessionsState) -> Self {
        state.auth.clone()
    }
}

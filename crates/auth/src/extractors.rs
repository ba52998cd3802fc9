//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::AuthBackend;
use crate::context::SessionContext;
use crate::cookie::SESSION_COOKIE;
use crate::error::AuthError;

/// Session guard: a request carrying a valid `token` cookie.
///
/// Rejects with 401 `unauthorized access` before the handler (and any
/// store call) runs when the cookie is absent, forged, or expired.
#[derive(Debug)]
pub struct SessionUser(pub SessionContext);

impl<S> FromRequestParts<S> for SessionUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                tracing::debug!(path = %parts.uri.path(), "Missing session cookie");
                AuthError::Unauthorized
            })?;

        let session = backend.verify(token)?;
        Ok(SessionUser(session))
    }
}

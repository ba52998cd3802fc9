//! Session API handlers
//!
//! Implements:
//! - POST /jwt — Issue a session token for the posted identity
//! - GET /logout — Clear the session cookie

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use serde_json::Value;
use solosphere_auth::AuthError;

use crate::api::middleware::SessionsState;

/// Response shape for session endpoints
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub success: bool,
}

/// POST /jwt — Sign the posted identity and set it as the `token` cookie
pub async fn issue_token(
    State(state): State<SessionsState>,
    jar: CookieJar,
    identity: Result<Json<Value>, JsonRejection>,
) -> Result<(CookieJar, Json<SessionResponse>), AuthError> {
    let Json(identity) = identity.map_err(|e| AuthError::BadRequest(e.body_text()))?;

    let token = state.auth.issue(identity)?;
    tracing::debug!("Issued session token");

    Ok((
        jar.add(state.auth.session_cookie(token)),
        Json(SessionResponse { success: true }),
    ))
}

/// GET /logout — Replace the session cookie with an expired one
pub async fn logout(
    State(state): State<SessionsState>,
    jar: CookieJar,
) -> (CookieJar, Json<SessionResponse>) {
    (
        jar.add(state.auth.revoked_cookie()),
        Json(SessionResponse { success: true }),
    )
}

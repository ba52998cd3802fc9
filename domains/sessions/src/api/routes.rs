//! Route definitions for Sessions domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::session;
use super::middleware::SessionsState;

/// Create all Sessions domain API routes
pub fn routes() -> Router<SessionsState> {
    Router::new()
        .route("/jwt", post(session::issue_token))
        .route("/logout", get(session::logout))
}

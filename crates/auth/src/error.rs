//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
#[derive(Debug)]
pub enum AuthError {
    /// Missing, malformed, forged, or expired session token
    Unauthorized,
    /// Malformed identity payload
    BadRequest(String),
    TokenIssueFailed,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized access".to_string()),
            AuthError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason),
            AuthError::TokenIssueFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to issue session token".to_string(),
            ),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

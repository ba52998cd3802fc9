//! Custom axum extractors for SoloSphere

use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bson::{oid::ObjectId, Document};
use serde_json::Value;

use crate::document::json_to_document;
use crate::Error;

/// Path extractor for a single `:id` segment holding a store object identifier.
///
/// Malformed identifiers are rejected with 400 before any store call is made.
#[derive(Debug, Clone, Copy)]
pub struct ObjectIdPath(pub ObjectId);

impl<S> FromRequestParts<S> for ObjectIdPath
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| Error::Validation(e.body_text()))?;

        ObjectId::parse_str(&raw)
            .map(ObjectIdPath)
            .map_err(|_| Error::Validation(format!("Invalid identifier: {}", raw)))
    }
}

/// JSON body extractor that yields a BSON document.
///
/// The body must be a JSON object; its fields are passed to the store
/// untouched. Malformed input returns 400; oversized bodies return 413.
#[derive(Debug)]
pub struct JsonDocument(pub Document);

/// Rejection type for `JsonDocument`:
/// - Bodies over the configured limit → 413 (via `Error::PayloadTooLarge`)
/// - JSON deserialization errors → 400 (via `Error::Validation`)
/// - Non-object payloads → 400 (via `Error::Validation`)
#[derive(Debug)]
pub enum JsonDocumentRejection {
    Json(JsonRejection),
    Document(Error),
}

impl IntoResponse for JsonDocumentRejection {
    fn into_response(self) -> Response {
        match self {
            JsonDocumentRejection::Json(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                Error::PayloadTooLarge(e.body_text()).into_response()
            }
            JsonDocumentRejection::Json(e) => Error::Validation(e.body_text()).into_response(),
            JsonDocumentRejection::Document(e) => e.into_response(),
        }
    }
}

impl<S> FromRequest<S> for JsonDocument
where
    S: Send + Sync,
{
    type Rejection = JsonDocumentRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(JsonDocumentRejection::Json)?;
        let document = json_to_document(value).map_err(JsonDocumentRejection::Document)?;
        Ok(JsonDocument(document))
    }
}

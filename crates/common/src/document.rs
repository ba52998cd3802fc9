//! Conversion between JSON request/response bodies and stored BSON documents
//!
//! Request bodies are arbitrary JSON objects. Responses render store-native
//! object identifiers as 24-character hex strings and dates as RFC 3339.

use bson::{Bson, Document};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Field holding the store-assigned identifier
pub const ID_FIELD: &str = "_id";

/// Convert a JSON object into a BSON document.
///
/// Anything other than an object is rejected as bad input.
pub fn json_to_document(value: Value) -> Result<Document> {
    match value {
        Value::Object(map) => bson::to_document(&map)
            .map_err(|e| Error::Validation(format!("Invalid document: {}", e))),
        other => Err(Error::Validation(format!(
            "Expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

/// Render a stored document as JSON.
pub fn document_to_json(document: Document) -> Value {
    let map: Map<String, Value> = document
        .into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect();
    Value::Object(map)
}

/// Render a list of stored documents as a JSON array.
pub fn documents_to_json(documents: Vec<Document>) -> Value {
    Value::Array(documents.into_iter().map(document_to_json).collect())
}

/// Drop any client-supplied identifier. Identifiers are assigned by the
/// store on creation and never change afterwards.
pub fn without_identifier(mut document: Document) -> Document {
    if document.remove(ID_FIELD).is_some() {
        tracing::debug!("Ignoring client-supplied _id field");
    }
    document
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        other => other.into_relaxed_extjson(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

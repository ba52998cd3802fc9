//! Shared utilities, configuration, and error handling for SoloSphere
//!
//! This crate provides common functionality used across the SoloSphere server:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Document conversion between JSON request bodies and stored BSON
//! - Axum extractors for object identifiers and JSON documents

pub mod config;
pub mod document;
pub mod error;
pub mod extractors;

pub use document::{document_to_json, documents_to_json, json_to_document, without_identifier};
pub use error::{Error, Result};
pub use extractors::{JsonDocument, ObjectIdPath};

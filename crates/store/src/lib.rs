//! SoloSphere Document Store
//!
//! Provides the store adapter used by every domain repository:
//! - MongoDB client for production (Stable API v1)
//! - In-memory mock store for tests and local development
//! - Acknowledgment types mirroring the driver's write results

pub mod mock;
pub mod mongo;

use std::sync::Arc;

use bson::{oid::ObjectId, Document};
use serde::{Serialize, Serializer};
use solosphere_common::config::Config;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store configuration error: {0}")]
    Configuration(String),

    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Store query error: {0}")]
    Query(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

impl From<StoreError> for solosphere_common::Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidDocument(msg) => solosphere_common::Error::Validation(msg),
            other => solosphere_common::Error::Store(other.to_string()),
        }
    }
}

/// Result of inserting a single document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneAck {
    pub acknowledged: bool,
    #[serde(serialize_with = "object_id_hex")]
    pub inserted_id: ObjectId,
}

/// Result of updating (or upserting) a single document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    #[serde(serialize_with = "optional_object_id_hex")]
    pub upserted_id: Option<ObjectId>,
}

/// Result of deleting a single document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

fn object_id_hex<S: Serializer>(id: &ObjectId, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&id.to_hex())
}

fn optional_object_id_hex<S: Serializer>(
    id: &Option<ObjectId>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match id {
        Some(id) => serializer.serialize_str(&id.to_hex()),
        None => serializer.serialize_none(),
    }
}

/// Store configuration.
#[derive(Clone)]
pub struct StoreConfig {
    /// Store provider (mongodb, mock)
    pub provider: String,
    /// Connection string, including credentials
    pub uri: String,
    /// Database name
    pub database: String,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("provider", &self.provider)
            .field("uri", &"[REDACTED]")
            .field("database", &self.database)
            .finish()
    }
}

impl From<&Config> for StoreConfig {
    fn from(config: &Config) -> Self {
        Self {
            provider: config.store_provider.clone(),
            uri: config.database_url.clone(),
            database: config.database_name.clone(),
        }
    }
}

/// Document store trait for different implementations.
///
/// Filters are equality matches; keys may be dotted paths into
/// sub-documents (`buyer.email`).
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Return every document in `collection` matching `filter`.
    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, StoreError>;

    /// Return the first document matching `filter`, if any.
    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError>;

    /// Insert a document. An identifier is assigned when the document has none.
    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<InsertOneAck, StoreError>;

    /// Set `fields` on the first document matching `filter`. With `upsert`,
    /// a new document is created from the filter and fields when none match.
    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        fields: Document,
        upsert: bool,
    ) -> Result<UpdateAck, StoreError>;

    /// Delete the first document matching `filter`.
    async fn delete_one(&self, collection: &str, filter: Document)
        -> Result<DeleteAck, StoreError>;

    /// Round-trip to the store to confirm it is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Close the underlying connection.
    async fn shutdown(&self);
}

/// Factory for creating DocumentStore implementations.
pub struct StoreFactory;

impl StoreFactory {
    /// Create a DocumentStore based on configuration.
    pub async fn connect(config: StoreConfig) -> Result<Arc<dyn DocumentStore>, StoreError> {
        match config.provider.as_str() {
            "mongodb" => {
                tracing::info!(database = %config.database, "Creating MongoDB document store");
                if config.uri.is_empty() {
                    return Err(StoreError::Configuration(
                        "A connection string is required for the mongodb provider".to_string(),
                    ));
                }
                let store = mongo::MongoDocumentStore::connect(&config).await?;
                Ok(Arc::new(store))
            }
            "mock" => {
                tracing::info!("Creating mock document store");
                Ok(Arc::new(mock::MockDocumentStore::new()))
            }
            provider => Err(StoreError::Configuration(format!(
                "Unknown store provider: {}. Supported providers: mongodb, mock",
                provider
            ))),
        }
    }
}

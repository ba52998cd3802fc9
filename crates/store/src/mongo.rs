//! MongoDB document store
//!
//! One client per process, created at startup with the Stable API v1
//! (strict, deprecation errors) and closed on shutdown.

use bson::{doc, Bson, Document};
use futures_util::TryStreamExt;
use mongodb::{
    error::ErrorKind,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection, Database,
};

use crate::{DeleteAck, DocumentStore, InsertOneAck, StoreConfig, StoreError, UpdateAck};

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        match *err.kind {
            ErrorKind::Io(_) | ErrorKind::ServerSelection { .. } => {
                StoreError::Connection(err.to_string())
            }
            _ => StoreError::Query(err.to_string()),
        }
    }
}

/// Document store backed by a MongoDB deployment.
#[derive(Clone)]
pub struct MongoDocumentStore {
    client: Client,
    database: Database,
}

impl MongoDocumentStore {
    /// Build the client. The driver connects lazily; call `ping` to verify
    /// the deployment is reachable.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| StoreError::Configuration(e.to_string()))?;

        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );

        let client =
            Client::with_options(options).map_err(|e| StoreError::Configuration(e.to_string()))?;
        let database = client.database(&config.database);

        Ok(Self { client, database })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection(name)
    }
}

#[async_trait::async_trait]
impl DocumentStore for MongoDocumentStore {
    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, StoreError> {
        tracing::debug!(collection, ?filter, "find");
        let cursor = self.collection(collection).find(filter).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError> {
        tracing::debug!(collection, ?filter, "find_one");
        Ok(self.collection(collection).find_one(filter).await?)
    }

    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<InsertOneAck, StoreError> {
        tracing::debug!(collection, "insert_one");
        let result = self.collection(collection).insert_one(document).await?;

        match result.inserted_id {
            Bson::ObjectId(id) => Ok(InsertOneAck {
                acknowledged: true,
                inserted_id: id,
            }),
            other => Err(StoreError::InvalidDocument(format!(
                "_id must be an object identifier, got {}",
                other
            ))),
        }
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        fields: Document,
        upsert: bool,
    ) -> Result<UpdateAck, StoreError> {
        tracing::debug!(collection, ?filter, upsert, "update_one");
        let result = self
            .collection(collection)
            .update_one(filter, doc! { "$set": fields })
            .upsert(upsert)
            .await?;

        let upserted_id = match result.upserted_id {
            Some(Bson::ObjectId(id)) => Some(id),
            Some(other) => {
                return Err(StoreError::InvalidDocument(format!(
                    "upserted _id must be an object identifier, got {}",
                    other
                )))
            }
            None => None,
        };

        Ok(UpdateAck {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_count: u64::from(upserted_id.is_some()),
            upserted_id,
        })
    }

    async fn delete_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<DeleteAck, StoreError> {
        tracing::debug!(collection, ?filter, "delete_one");
        let result = self.collection(collection).delete_one(filter).await?;
        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    async fn shutdown(&self) {
        tracing::info!("Closing MongoDB client");
        self.client.clone().shutdown().await;
    }
}

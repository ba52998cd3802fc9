//! Job repository
//!
//! Every method is exactly one store round trip.

use bson::{doc, oid::ObjectId, Document};
use solosphere_common::{without_identifier, Error, Result};
use solosphere_store::{DeleteAck, DocumentStore, InsertOneAck, UpdateAck};
use std::sync::Arc;

/// Collection holding job postings
pub const JOBS_COLLECTION: &str = "jobs";

#[derive(Clone)]
pub struct JobRepository {
    store: Arc<dyn DocumentStore>,
}

impl JobRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// List every job
    pub async fn list(&self) -> Result<Vec<Document>> {
        Ok(self.store.find(JOBS_COLLECTION, Document::new()).await?)
    }

    /// Find job by ID
    pub async fn find(&self, id: ObjectId) -> Result<Option<Document>> {
        Ok(self
            .store
            .find_one(JOBS_COLLECTION, doc! { "_id": id })
            .await?)
    }

    /// List jobs posted by a buyer
    pub async fn list_by_buyer(&self, email: &str) -> Result<Vec<Document>> {
        Ok(self
            .store
            .find(JOBS_COLLECTION, doc! { "buyer.email": email })
            .await?)
    }

    /// Create a new job; the store assigns its identifier
    pub async fn create(&self, job: Document) -> Result<InsertOneAck> {
        Ok(self
            .store
            .insert_one(JOBS_COLLECTION, without_identifier(job))
            .await?)
    }

    /// Replace the given fields of a job, creating it when absent
    pub async fn upsert(&self, id: ObjectId, fields: Document) -> Result<UpdateAck> {
        let fields = without_identifier(fields);
        if fields.is_empty() {
            return Err(Error::Validation(
                "Update must set at least one field".to_string(),
            ));
        }

        Ok(self
            .store
            .update_one(JOBS_COLLECTION, doc! { "_id": id }, fields, true)
            .await?)
    }

    /// Delete a job by ID
    pub async fn delete(&self, id: ObjectId) -> Result<DeleteAck> {
        Ok(self
            .store
            .delete_one(JOBS_COLLECTION, doc! { "_id": id })
            .await?)
    }
}

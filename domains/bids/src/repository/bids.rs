//! Bid repository

use bson::{doc, oid::ObjectId, Document};
use solosphere_common::{without_identifier, Error, Result};
use solosphere_store::{DocumentStore, InsertOneAck, UpdateAck};
use std::sync::Arc;

/// Collection holding bids
pub const BIDS_COLLECTION: &str = "bids";

#[derive(Clone)]
pub struct BidRepository {
    store: Arc<dyn DocumentStore>,
}

impl BidRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Place a new bid; the store assigns its identifier
    pub async fn create(&self, bid: Document) -> Result<InsertOneAck> {
        Ok(self
            .store
            .insert_one(BIDS_COLLECTION, without_identifier(bid))
            .await?)
    }

    /// Bids placed by a bidder
    pub async fn list_by_bidder(&self, email: &str) -> Result<Vec<Document>> {
        Ok(self
            .store
            .find(BIDS_COLLECTION, doc! { "email": email })
            .await?)
    }

    /// Bids placed against a buyer's jobs
    pub async fn list_by_buyer(&self, email: &str) -> Result<Vec<Document>> {
        Ok(self
            .store
            .find(BIDS_COLLECTION, doc! { "buyer.email": email })
            .await?)
    }

    /// Set the given fields on an existing bid; never inserts
    pub async fn update(&self, id: ObjectId, fields: Document) -> Result<UpdateAck> {
        let fields = without_identifier(fields);
        if fields.is_empty() {
            return Err(Error::Validation(
                "Update must set at least one field".to_string(),
            ));
        }

        Ok(self
            .store
            .update_one(BIDS_COLLECTION, doc! { "_id": id }, fields, false)
            .await?)
    }
}

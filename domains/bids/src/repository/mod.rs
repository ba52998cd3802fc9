//! Repository implementations for Bids domain

pub mod bids;

use solosphere_store::DocumentStore;
use std::sync::Arc;

pub use bids::{BidRepository, BIDS_COLLECTION};

/// Combined repository access for the Bids domain
#[derive(Clone)]
pub struct BidsRepositories {
    pub bids: BidRepository,
}

impl BidsRepositories {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            bids: BidRepository::new(store),
        }
    }
}

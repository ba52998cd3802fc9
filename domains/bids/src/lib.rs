//! Bids domain: offers placed by freelancers against buyers' jobs

pub mod api;
pub mod repository;

pub use api::{routes, BidsState};
pub use repository::{BidRepository, BidsRepositories, BIDS_COLLECTION};

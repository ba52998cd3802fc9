//! API layer for the Bids domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::BidsState;
pub use routes::routes;

//! Sessions domain: token issuance and logout

pub mod api;

pub use api::{routes, SessionsState};

//! API endpoint integration tests
//!
//! Drives the fully composed router: sessions, jobs, bids, and cross-route invariants.

#![allow(dead_code)]

mod bids;
mod common;
mod invariants;
mod jobs;
mod sessions;

//! Bid API handlers
//!
//! Implements:
//! - POST /bid — Place a bid
//! - GET /my-bids/:email — Bids a bidder placed (session required)
//! - GET /bid-requests/:email — Bids against a buyer's jobs (session required)
//! - PATCH /bid/:id — Update bid fields such as `status`

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use solosphere_auth::SessionUser;
use solosphere_common::{documents_to_json, JsonDocument, ObjectIdPath, Result};
use solosphere_store::{InsertOneAck, UpdateAck};

use crate::api::middleware::BidsState;

/// POST /bid — Store a new bid
pub async fn create_bid(
    State(state): State<BidsState>,
    JsonDocument(bid): JsonDocument,
) -> Result<Json<InsertOneAck>> {
    let ack = state.repos.bids.create(bid).await?;
    tracing::info!(bid_id = %ack.inserted_id, "Bid placed");
    Ok(Json(ack))
}

/// GET /my-bids/:email — Bids whose `email` is the requested bidder
pub async fn list_my_bids(
    SessionUser(_): SessionUser,
    State(state): State<BidsState>,
    Path(email): Path<String>,
) -> Result<Json<Value>> {
    let bids = state.repos.bids.list_by_bidder(&email).await?;
    Ok(Json(documents_to_json(bids)))
}

/// GET /bid-requests/:email — Bids whose `buyer.email` is the requested buyer
pub async fn list_bid_requests(
    SessionUser(_): SessionUser,
    State(state): State<BidsState>,
    Path(email): Path<String>,
) -> Result<Json<Value>> {
    let bids = state.repos.bids.list_by_buyer(&email).await?;
    Ok(Json(documents_to_json(bids)))
}

/// PATCH /bid/:id — Set the posted fields on an existing bid
pub async fn update_bid(
    State(state): State<BidsState>,
    ObjectIdPath(id): ObjectIdPath,
    JsonDocument(fields): JsonDocument,
) -> Result<Json<UpdateAck>> {
    let ack = state.repos.bids.update(id, fields).await?;
    tracing::debug!(bid_id = %id, matched = ack.matched_count, "Bid update processed");
    Ok(Json(ack))
}

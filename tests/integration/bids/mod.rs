//! Bids integration tests

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{parse_body, post_bid, request, TestApp};

fn bid(bidder: &str, buyer: &str, price: i64) -> serde_json::Value {
    json!({
        "job_id": "665f1c2b9b1e8a0012345678",
        "email": bidder,
        "buyer": { "email": buyer },
        "price": price,
        "comment": "Can deliver in a week",
        "status": "Pending",
    })
}

#[tokio::test]
async fn test_bid_views_per_side() {
    let app = TestApp::new().unwrap();
    post_bid(&app, bid("f@x.com", "a@x.com", 100)).await;
    post_bid(&app, bid("g@x.com", "a@x.com", 120)).await;
    post_bid(&app, bid("f@x.com", "b@x.com", 90)).await;

    let freelancer = app.session_cookie("f@x.com");
    let response = app
        .send(request(Method::GET, "/my-bids/f@x.com", Some(&freelancer), None))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let mine = parse_body(response).await;
    let mine = mine.as_array().unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|b| b["email"] == "f@x.com"));

    let buyer = app.session_cookie("a@x.com");
    let response = app
        .send(request(Method::GET, "/bid-requests/a@x.com", Some(&buyer), None))
        .await;
    let requests = parse_body(response).await;
    let requests = requests.as_array().unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|b| b["buyer"]["email"] == "a@x.com"));
}

#[tokio::test]
async fn test_bid_lists_guarded() {
    let app = TestApp::new().unwrap();
    for uri in ["/my-bids/f@x.com", "/bid-requests/a@x.com"] {
        let response = app.send(request(Method::GET, uri, None, None)).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(parse_body(response).await, json!({ "message": "unauthorized access" }));
    }
    assert_eq!(app.store.operation_count(), 0);
}

#[tokio::test]
async fn test_patch_changes_only_status() {
    let app = TestApp::new().unwrap();
    let original = bid("f@x.com", "a@x.com", 100);
    let id = post_bid(&app, original.clone()).await;

    let response = app
        .send(request(
            Method::PATCH,
            &format!("/bid/{}", id),
            None,
            Some(json!({ "status": "accepted" })),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let ack = parse_body(response).await;
    assert_eq!(ack["acknowledged"], true);
    assert_eq!(ack["matchedCount"], 1);
    assert_eq!(ack["modifiedCount"], 1);

    let cookie = app.session_cookie("f@x.com");
    let bids = parse_body(
        app.send(request(Method::GET, "/my-bids/f@x.com", Some(&cookie), None))
            .await,
    )
    .await;
    let stored = &bids.as_array().unwrap()[0];
    assert_eq!(stored["_id"], id.as_str());
    assert_eq!(stored["status"], "accepted");
    for key in ["job_id", "email", "buyer", "price", "comment"] {
        assert_eq!(stored[key], original[key], "field {key}");
    }
}

#[tokio::test]
async fn test_patch_unknown_bid_matches_nothing() {
    let app = TestApp::new().unwrap();
    let response = app
        .send(request(
            Method::PATCH,
            &format!("/bid/{}", bson::oid::ObjectId::new().to_hex()),
            None,
            Some(json!({ "status": "Rejected" })),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let ack = parse_body(response).await;
    assert_eq!(ack["matchedCount"], 0);
    assert_eq!(ack["modifiedCount"], 0);
    assert!(app.store.documents("bids").is_empty());
}

#[tokio::test]
async fn test_identity_without_email_reaches_bid_lists() {
    let app = TestApp::new().unwrap();
    post_bid(&app, bid("f@x.com", "a@x.com", 100)).await;

    let token = app.auth.issue(json!({ "uid": 7 })).unwrap();
    let cookie = format!("token={}", token);
    for uri in ["/my-bids/f@x.com", "/bid-requests/a@x.com"] {
        let response = app.send(request(Method::GET, uri, Some(&cookie), None)).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(parse_body(response).await.as_array().unwrap().len(), 1);
    }
}

//! Cross-route invariants
//!
//! Identifier immutability, idempotent deletes, guard short-circuiting,
//! and store failure handling.

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{parse_body, post_job, request, TestApp};

#[tokio::test]
async fn test_delete_then_get_is_empty_and_second_delete_counts_zero() {
    let app = TestApp::new().unwrap();
    let id = post_job(&app, json!({ "title": "Temp", "buyer": { "email": "a@x.com" } })).await;
    let cookie = app.session_cookie("a@x.com");
    let uri = format!("/job/{}", id);

    let first = parse_body(app.send(request(Method::DELETE, &uri, Some(&cookie), None)).await).await;
    assert_eq!(first["deletedCount"], 1);

    let response = app.send(request(Method::GET, &uri, None, None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_body(response).await, serde_json::Value::Null);

    let response = app.send(request(Method::DELETE, &uri, Some(&cookie), None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let second = parse_body(response).await;
    assert_eq!(second["acknowledged"], true);
    assert_eq!(second["deletedCount"], 0);
}

#[tokio::test]
async fn test_client_supplied_identifier_is_ignored() {
    let app = TestApp::new().unwrap();
    let forged = bson::oid::ObjectId::new().to_hex();

    let id = post_job(&app, json!({ "_id": forged, "title": "Forged" })).await;
    assert_ne!(id, forged);

    let response = app
        .send(request(
            Method::PUT,
            &format!("/job/{}", id),
            None,
            Some(json!({ "_id": forged, "title": "Still mine" })),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = parse_body(
        app.send(request(Method::GET, &format!("/job/{}", id), None, None))
            .await,
    )
    .await;
    assert_eq!(fetched["_id"], id.as_str());
    assert_eq!(fetched["title"], "Still mine");
}

#[tokio::test]
async fn test_guard_rejects_before_any_store_call() {
    let app = TestApp::new().unwrap();
    let id = bson::oid::ObjectId::new().to_hex();

    for (method, uri) in [
        (Method::GET, "/jobs/a@x.com".to_string()),
        (Method::GET, "/my-bids/a@x.com".to_string()),
        (Method::GET, "/bid-requests/a@x.com".to_string()),
        (Method::DELETE, format!("/job/{}", id)),
    ] {
        let response = app.send(request(method, &uri, None, None)).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }
    assert_eq!(app.store.operation_count(), 0);
}

#[tokio::test]
async fn test_store_failure_is_structured_500() {
    let app = TestApp::new().unwrap();
    app.store.set_failing(true);
    let cookie = app.session_cookie("a@x.com");

    for (method, uri, cookie, body) in [
        (Method::GET, "/jobs".to_string(), None, None),
        (Method::POST, "/job".to_string(), None, Some(json!({ "title": "x" }))),
        (Method::GET, "/jobs/a@x.com".to_string(), Some(cookie.as_str()), None),
        (Method::POST, "/bid".to_string(), None, Some(json!({ "price": 1 }))),
    ] {
        let response = app.send(request(method, &uri, cookie, body)).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        let body = parse_body(response).await;
        assert_eq!(body["error"]["code"], "STORE_ERROR");
    }
}

#[tokio::test]
async fn test_public_routes_need_no_cookie() {
    let app = TestApp::new().unwrap();
    let id = bson::oid::ObjectId::new().to_hex();

    for (method, uri, body) in [
        (Method::GET, "/jobs".to_string(), None),
        (Method::GET, format!("/job/{}", id), None),
        (Method::POST, "/job".to_string(), Some(json!({ "title": "x" }))),
        (Method::PUT, format!("/job/{}", id), Some(json!({ "title": "y" }))),
        (Method::POST, "/bid".to_string(), Some(json!({ "price": 1 }))),
        (Method::PATCH, format!("/bid/{}", id), Some(json!({ "status": "Pending" }))),
    ] {
        let response = app.send(request(method, &uri, None, body)).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn test_oversized_body_rejected_before_store() {
    let app = TestApp::new().unwrap();
    let description = "x".repeat(solosphere_app::MAX_BODY_BYTES + 1);

    let response = app
        .send(request(
            Method::POST,
            "/job",
            None,
            Some(json!({ "title": "Huge", "description": description })),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(parse_body(response).await["error"]["code"], "PAYLOAD_TOO_LARGE");
    assert_eq!(app.store.operation_count(), 0);
}

#[tokio::test]
async fn test_body_under_limit_accepted() {
    let app = TestApp::new().unwrap();
    let description = "x".repeat(solosphere_app::MAX_BODY_BYTES / 2);

    let id = post_job(&app, json!({ "title": "Large", "description": description })).await;
    assert_eq!(id.len(), 24);
}

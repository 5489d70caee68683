/// Integration tests for `GET /users/{user_id}/due-cards`
mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use common::create_test_app;
use serde_json::{json, Value};
use tower::Service;
use uuid::Uuid;

async fn post_review(app: &mut axum::Router, user_id: Uuid, card_id: Uuid, rating: i32, idempotency_key: &str) -> StatusCode {
    let body = json!({
        "user_id": user_id,
        "card_id": card_id,
        "rating": rating,
        "idempotency_key": idempotency_key,
    });
    let request = Request::builder()
        .uri("/reviews")
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.call(request).await.unwrap().status()
}

async fn get_due_cards(app: &mut axum::Router, user_id: Uuid, until: &str) -> (StatusCode, Value) {
    let uri = format!("/users/{}/due-cards?until={}", user_id, urlencoding_encode(until));
    let request = Request::builder().uri(uri).method("GET").body(Body::empty()).unwrap();
    let response = app.call(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

/// Minimal percent-encoding sufficient for RFC 3339 timestamps in a query string.
fn urlencoding_encode(s: &str) -> String {
    s.replace('+', "%2B").replace(':', "%3A")
}

#[tokio::test]
async fn a_card_rated_again_is_due_a_minute_later() {
    let mut app = create_test_app();
    let user_id = Uuid::new_v4();
    let card_id = Uuid::new_v4();

    let status = post_review(&mut app, user_id, card_id, 0, "k1").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get_due_cards(&mut app, user_id, "2024-01-01T00:00:59+00:00").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["card_ids"].as_array().unwrap().len(), 0);

    let (status, body) = get_due_cards(&mut app, user_id, "2024-01-01T00:01:00+00:00").await;
    assert_eq!(status, StatusCode::OK);
    let ids = body["card_ids"].as_array().unwrap();
    assert_eq!(ids.len(), 1);
    assert_eq!(ids[0].as_str().unwrap(), card_id.to_string());
}

#[tokio::test]
async fn a_card_rated_good_is_not_due_a_minute_later() {
    let mut app = create_test_app();
    let user_id = Uuid::new_v4();
    let card_id = Uuid::new_v4();

    post_review(&mut app, user_id, card_id, 1, "k1").await;

    let (status, body) = get_due_cards(&mut app, user_id, "2024-01-01T00:01:00+00:00").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["card_ids"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn due_cards_are_scoped_to_the_requesting_user() {
    let mut app = create_test_app();
    let user_a = Uuid::new_v4();
    let user_b = Uuid::new_v4();
    let card_id = Uuid::new_v4();

    post_review(&mut app, user_a, card_id, 0, "k1").await;

    let (_, body) = get_due_cards(&mut app, user_b, "2024-06-01T00:00:00+00:00").await;
    assert_eq!(body["card_ids"].as_array().unwrap().len(), 0);

    let (_, body) = get_due_cards(&mut app, user_a, "2024-06-01T00:00:00+00:00").await;
    assert_eq!(body["card_ids"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn an_invalid_user_id_returns_400() {
    let mut app = create_test_app();
    let request = Request::builder()
        .uri("/users/not-a-uuid/due-cards?until=2024-01-01T00:00:00%2B00:00")
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn an_invalid_until_timestamp_returns_400() {
    let mut app = create_test_app();
    let (status, _) = get_due_cards(&mut app, Uuid::new_v4(), "not-a-timestamp").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

//! Integration tests for the `/api/assets` and `/api/asset-categories`
//! routes.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_test_app, get_with_token, json_with_token, send, MockBackend};
use serde_json::json;

#[tokio::test]
async fn list_assets_applies_pagination() {
    let backend = MockBackend::always(StatusCode::OK, json!({ "data": [] })).await;
    let app = build_test_app(&backend);

    let response = get_with_token(app, "/api/assets?pageSize=500", "tok").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(backend.last_request().uri, "/api/assets?page=1&pageSize=100");
}

#[tokio::test]
async fn room_assets_use_room_path() {
    let backend = MockBackend::always(
        StatusCode::OK,
        json!({ "data": [{ "id": 1, "roomId": 4, "name": "Desk" }] }),
    )
    .await;
    let app = build_test_app(&backend);

    let response = get_with_token(app, "/api/assets/room/4", "tok").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"][0]["name"], "Desk");
    assert_eq!(backend.last_request().uri, "/api/assets/room/4");
}

#[tokio::test]
async fn room_assets_failure_uses_fallback_message() {
    let backend = MockBackend::always(StatusCode::INTERNAL_SERVER_ERROR, json!({})).await;
    let app = build_test_app(&backend);

    let response = get_with_token(app, "/api/assets/room/4", "tok").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["message"],
        "Failed to fetch assets by room"
    );
}

#[tokio::test]
async fn categories_are_relayed() {
    let backend = MockBackend::always(
        StatusCode::OK,
        json!({ "data": [{ "id": 1, "name": "Furniture" }] }),
    )
    .await;
    let app = build_test_app(&backend);

    let response = get_with_token(app, "/api/asset-categories", "tok").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"][0]["name"], "Furniture");
    assert_eq!(backend.last_request().uri, "/api/asset-categories");
}

#[tokio::test]
async fn create_asset_answers_201_with_backend_body() {
    let backend = MockBackend::always(StatusCode::OK, json!({ "data": { "id": 30 } })).await;
    let app = build_test_app(&backend);
    let asset = json!({
        "roomId": 4,
        "name": "Wardrobe",
        "lengthCm": 120.0,
        "widthCm": 60.0
    });

    let response = json_with_token(app, Method::POST, "/api/assets", "tok", &asset).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["id"], 30);
    assert_eq!(backend.last_request().json(), asset);
}

#[tokio::test]
async fn update_asset_forwards_put_body() {
    let backend = MockBackend::always(StatusCode::OK, json!({ "data": { "id": 30 } })).await;
    let app = build_test_app(&backend);
    let patch = json!({ "name": "Tall wardrobe" });

    let response = json_with_token(app, Method::PUT, "/api/assets/30", "tok", &patch).await;

    assert_eq!(response.status(), StatusCode::OK);
    let req = backend.last_request();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.uri, "/api/assets/30");
    assert_eq!(req.json(), patch);
}

#[tokio::test]
async fn delete_asset_relays_backend_error() {
    let backend =
        MockBackend::always(StatusCode::FORBIDDEN, json!({ "message": "Not your asset" })).await;
    let app = build_test_app(&backend);

    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/assets/30")
        .header("authorization", "Bearer tok")
        .body(Body::empty())
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["message"], "Not your asset");
    assert_eq!(backend.last_request().method, Method::DELETE);
}

#[tokio::test]
async fn unparseable_asset_body_is_rejected_before_forwarding() {
    let backend = MockBackend::always(StatusCode::OK, json!({})).await;
    let app = build_test_app(&backend);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/assets")
        .header("authorization", "Bearer tok")
        .header("content-type", "application/json")
        .body(Body::from("[1,"))
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Invalid request body");
    assert_eq!(backend.calls(), 0);
}

//! Integration tests for the typed endpoint calls.

mod common;

use assert_matches::assert_matches;
use axum::http::{Method, StatusCode};
use chrono::Duration;
use common::{client_for, signed_in_client, MockServer, NOW_MS};
use dormspace_client::session::{EXPIRATION_KEY, TOKEN_KEY, USER_KEY};
use dormspace_client::ClientError;
use dormspace_core::capacity::CapacityViolation;
use dormspace_core::envelope::PageRequest;
use dormspace_core::error::CoreError;
use dormspace_core::types::{Asset, Room};
use dormspace_core::validation::{AssetForm, LoginForm, RoomForm};
use dormspace_client::session::storage::SessionStorage;
use serde_json::json;

fn room_4x3() -> Room {
    serde_json::from_value(json!({
        "id": 1,
        "name": "Dorm 101",
        "lengthM": 4.0,
        "widthM": 3.0
    }))
    .unwrap()
}

fn asset(id: i64, length_cm: f64, width_cm: f64) -> Asset {
    serde_json::from_value(json!({
        "id": id,
        "roomId": 1,
        "name": format!("Asset {id}"),
        "lengthCm": length_cm,
        "widthCm": width_cm,
        "purchasePrice": 50.0
    }))
    .unwrap()
}

fn login_form() -> LoginForm {
    LoginForm {
        email: "student@campus.edu".into(),
        password: "hunter22".into(),
    }
}

// ---------------------------------------------------------------------------
// Test: login persists the token with a 10 minute window and the user
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_stores_session_then_expires_after_ttl() {
    let server = MockServer::always(
        StatusCode::OK,
        json!({
            "message": "Login successful",
            "token": "jwt-abc",
            "user": { "id": 7, "email": "student@campus.edu" }
        }),
    )
    .await;
    let (client, storage, clock) = client_for(&server);

    let response = client.login(&login_form()).await.unwrap();

    assert_eq!(response.token.as_deref(), Some("jwt-abc"));
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("jwt-abc"));
    assert_eq!(
        storage.get(EXPIRATION_KEY),
        Some((NOW_MS + 10 * 60 * 1000).to_string())
    );
    assert!(storage.get(USER_KEY).unwrap().contains("student@campus.edu"));
    assert!(client.session().is_authenticated());

    let req = server.last_request();
    assert_eq!(req.uri, "/api/user/login");
    assert_eq!(
        req.json(),
        json!({ "email": "student@campus.edu", "password": "hunter22" })
    );

    clock.advance(Duration::minutes(11));

    assert!(!client.session().is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(EXPIRATION_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
}

#[tokio::test]
async fn rejected_login_leaves_session_empty() {
    let server = MockServer::always(
        StatusCode::UNAUTHORIZED,
        json!({ "message": "Invalid credentials" }),
    )
    .await;
    let (client, storage, _) = client_for(&server);

    let err = client.login(&login_form()).await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[tokio::test]
async fn invalid_login_form_never_reaches_network() {
    let server = MockServer::always(StatusCode::OK, json!({})).await;
    let (client, _, _) = client_for(&server);

    let form = LoginForm {
        email: "not-an-email".into(),
        password: String::new(),
    };
    let err = client.login(&form).await.unwrap_err();

    assert_matches!(err, ClientError::Core(CoreError::Validation(fields)) => {
        assert!(fields.get("email").is_some());
        assert!(fields.get("password").is_some());
    });
    assert_eq!(server.calls(), 0);
}

#[tokio::test]
async fn verify_starts_a_session_with_expiration() {
    let server = MockServer::always(
        StatusCode::OK,
        json!({ "message": "Verified", "token": "fresh", "user": "student@campus.edu" }),
    )
    .await;
    let (client, storage, _) = client_for(&server);

    let form = dormspace_core::validation::VerifyForm {
        email: "student@campus.edu".into(),
        otp: "123456".into(),
    };
    client.verify(&form).await.unwrap();

    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("fresh"));
    assert!(storage.get(EXPIRATION_KEY).is_some());
}

// ---------------------------------------------------------------------------
// Test: logout always clears local state
// ---------------------------------------------------------------------------

#[tokio::test]
async fn logout_clears_session_even_when_backend_fails() {
    let server = MockServer::always(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "message": "boom" }),
    )
    .await;
    let client = signed_in_client(&server, "bye-token");
    client.session().set_user(&json!({ "id": 1 }));

    let handle = client.logout().expect("notification is spawned");
    assert!(client.session().token().is_none());
    handle.await.unwrap();

    assert_eq!(server.calls(), 1);
    let req = server.last_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.uri, "/api/user/logout");
    assert_eq!(req.header("authorization"), Some("Bearer bye-token"));
    assert!(!client.session().is_authenticated());
    assert!(client.session().user::<serde_json::Value>().is_none());
}

// ---------------------------------------------------------------------------
// Test: capacity guard runs before any request
// ---------------------------------------------------------------------------

#[tokio::test]
async fn oversize_asset_rejected_without_post() {
    let server = MockServer::always(StatusCode::CREATED, json!({})).await;
    let client = signed_in_client(&server, "t");

    let existing = vec![asset(1, 200.0, 200.0)];
    let form = AssetForm::for_room(1, "Wardrobe").with_dimensions(300.0, 300.0, 200.0);

    let err = client
        .create_asset_in(&room_4x3(), &existing, &form)
        .await
        .unwrap_err();

    assert_matches!(
        err,
        ClientError::Core(CoreError::Capacity(CapacityViolation {
            room_area_cm2,
            used_area_cm2,
            candidate_area_cm2,
        })) => {
            assert_eq!(room_area_cm2, 120_000.0);
            assert_eq!(used_area_cm2, 40_000.0);
            assert_eq!(candidate_area_cm2, 90_000.0);
        }
    );
    assert_eq!(server.calls(), 0);
}

#[tokio::test]
async fn create_asset_fetches_room_contents_before_checking() {
    let server = MockServer::start(|req| {
        if req.method == Method::GET {
            let body = json!({ "data": [{
                "id": 1, "roomId": 1, "name": "Bed", "lengthCm": 200.0, "widthCm": 200.0
            }] });
            (StatusCode::OK, body.to_string())
        } else {
            (StatusCode::CREATED, json!({}).to_string())
        }
    })
    .await;
    let client = signed_in_client(&server, "t");

    let form = AssetForm::for_room(1, "Wardrobe").with_dimensions(300.0, 300.0, 200.0);
    let err = client.create_asset(&room_4x3(), &form).await.unwrap_err();

    assert_matches!(err, ClientError::Core(CoreError::Capacity(_)));
    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].uri, "/api/assets/room/1");
}

#[tokio::test]
async fn fitting_asset_is_posted_in_camel_case() {
    let server = MockServer::always(
        StatusCode::CREATED,
        json!({ "data": {
            "id": 5, "roomId": 1, "name": "Desk", "lengthCm": 100.0, "widthCm": 60.0,
            "clearanceSidesCm": 10.0
        } }),
    )
    .await;
    let client = signed_in_client(&server, "t");

    let form = AssetForm::for_room(1, "Desk")
        .with_dimensions(100.0, 60.0, 75.0)
        .with_clearances(0.0, 10.0, 0.0);
    let created = client
        .create_asset_in(&room_4x3(), &[], &form)
        .await
        .unwrap();

    assert_eq!(created.id, 5);
    let sent = server.last_request().json();
    assert_eq!(sent["roomId"], 1);
    assert_eq!(sent["lengthCm"], 100.0);
    assert_eq!(sent["clearanceSidesCm"], 10.0);
}

// ---------------------------------------------------------------------------
// Test: rooms
// ---------------------------------------------------------------------------

#[tokio::test]
async fn rooms_are_paged_via_query_string() {
    let server = MockServer::always(
        StatusCode::OK,
        json!({
            "data": [{ "id": 1, "name": "A", "lengthM": 4.0, "widthM": 3.0 }],
            "total": 1, "page": 2, "pageSize": 5, "totalPages": 1
        }),
    )
    .await;
    let client = signed_in_client(&server, "t");

    let page = client.rooms(PageRequest::new(2, 5)).await.unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.page, Some(2));
    assert_eq!(server.last_request().uri, "/api/rooms?page=2&pageSize=5");
}

#[tokio::test]
async fn invalid_room_form_is_rejected_locally() {
    let server = MockServer::always(StatusCode::CREATED, json!({})).await;
    let client = signed_in_client(&server, "t");

    let form = RoomForm {
        name: String::new(),
        length_m: 0.0,
        width_m: 3.0,
        ..RoomForm::default()
    };
    let err = client.create_room(&form).await.unwrap_err();

    assert_matches!(err, ClientError::Core(CoreError::Validation(fields)) => {
        assert!(fields.get("name").is_some());
        assert!(fields.get("lengthM").is_some());
        assert!(fields.get("widthM").is_none());
    });
    assert_eq!(server.calls(), 0);
}

// ---------------------------------------------------------------------------
// Test: reports degrade to empty lists
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dashboard_stats_aggregate_rooms_and_assets() {
    let server = MockServer::start(|req| {
        let body = if req.uri.starts_with("/api/rooms") {
            json!({ "data": [
                { "id": 1, "name": "A", "lengthM": 4.0, "widthM": 3.0 },
                { "id": 2, "name": "B", "lengthM": 2.0, "widthM": 2.0 }
            ] })
        } else {
            json!({ "data": [
                { "id": 1, "roomId": 1, "name": "Bed", "lengthCm": 200.0, "widthCm": 90.0, "purchasePrice": 120.0 },
                { "id": 2, "roomId": 2, "name": "Lamp", "lengthCm": 30.0, "widthCm": 30.0, "purchasePrice": 30.0 }
            ] })
        };
        (StatusCode::OK, body.to_string())
    })
    .await;
    let client = signed_in_client(&server, "t");

    let stats = client.dashboard_stats().await;

    assert_eq!(stats.total_rooms, 2);
    assert_eq!(stats.total_assets, 2);
    assert_eq!(stats.total_value, 150.0);
    assert_eq!(stats.total_area_m2, 16.0);
}

#[tokio::test]
async fn reports_survive_backend_failure() {
    let server = MockServer::always(
        StatusCode::SERVICE_UNAVAILABLE,
        json!({ "message": "down" }),
    )
    .await;
    let client = signed_in_client(&server, "t");

    let report = client.inventory_report().await;
    assert_eq!(report.stats.total_rooms, 0);
    assert!(report.assets_by_category.is_empty());

    let usage = client.room_utilization(&room_4x3()).await;
    assert_eq!(usage.asset_count, 0);
    assert_eq!(usage.room_area_m2, 12.0);
}

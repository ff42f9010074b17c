//! Handlers for the `/api/assets` routes.
//!
//! The capacity guard runs client-side; the gateway relays asset payloads
//! as they are.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use dormspace_core::messages;
use dormspace_core::paths;
use dormspace_core::types::DbId;
use reqwest::Method;
use serde_json::Value;

use crate::error::GatewayResult;
use crate::handlers::{json_body, resource_id};
use crate::middleware::auth::BearerToken;
use crate::query::PageParams;
use crate::state::AppState;

/// GET /api/assets?page=&pageSize=
pub async fn list_assets(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    query: Result<Query<PageParams>, QueryRejection>,
) -> GatewayResult<Json<Value>> {
    let path = PageParams::from_query(query)?.append_to(paths::ASSETS);
    let data = state
        .backend
        .forward_json(Method::GET, &path, &token, None, messages::FETCH_ASSETS_FAILED)
        .await?;
    Ok(Json(data))
}

/// POST /api/assets
pub async fn create_asset(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    body: Result<Json<Value>, JsonRejection>,
) -> GatewayResult<(StatusCode, Json<Value>)> {
    let body = json_body(body)?;
    let data = state
        .backend
        .forward_json(
            Method::POST,
            paths::ASSETS,
            &token,
            Some(&body),
            messages::CREATE_ASSET_FAILED,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(data)))
}

/// GET /api/assets/{id}
pub async fn get_asset(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    id: Result<Path<DbId>, PathRejection>,
) -> GatewayResult<Json<Value>> {
    let id = resource_id(id)?;
    let data = state
        .backend
        .forward_json(
            Method::GET,
            &paths::asset_by_id(id),
            &token,
            None,
            messages::FETCH_ASSET_FAILED,
        )
        .await?;
    Ok(Json(data))
}

/// PUT /api/assets/{id}
pub async fn update_asset(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    id: Result<Path<DbId>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> GatewayResult<Json<Value>> {
    let id = resource_id(id)?;
    let body = json_body(body)?;
    let data = state
        .backend
        .forward_json(
            Method::PUT,
            &paths::asset_by_id(id),
            &token,
            Some(&body),
            messages::UPDATE_ASSET_FAILED,
        )
        .await?;
    Ok(Json(data))
}

/// DELETE /api/assets/{id}
pub async fn delete_asset(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    id: Result<Path<DbId>, PathRejection>,
) -> GatewayResult<Json<Value>> {
    let id = resource_id(id)?;
    let data = state
        .backend
        .forward_json(
            Method::DELETE,
            &paths::asset_by_id(id),
            &token,
            None,
            messages::DELETE_ASSET_FAILED,
        )
        .await?;
    Ok(Json(data))
}

/// GET /api/assets/room/{room_id}
pub async fn list_room_assets(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    room_id: Result<Path<DbId>, PathRejection>,
) -> GatewayResult<Json<Value>> {
    let room_id = resource_id(room_id)?;
    let data = state
        .backend
        .forward_json(
            Method::GET,
            &paths::assets_by_room(room_id),
            &token,
            None,
            messages::FETCH_ROOM_ASSETS_FAILED,
        )
        .await?;
    Ok(Json(data))
}

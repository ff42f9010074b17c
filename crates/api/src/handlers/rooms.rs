//! Handlers for the `/api/rooms` routes.
//!
//! Bodies are relayed untouched in both directions.

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

/// GET /api/rooms?page=&pageSize=
pub async fn list_rooms(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    query: Result<Query<PageParams>, QueryRejection>,
) -> GatewayResult<Json<Value>> {
    let path = PageParams::from_query(query)?.append_to(paths::ROOMS);
    let data = state
        .backend
        .forward_json(Method::GET, &path, &token, None, messages::FETCH_ROOMS_FAILED)
        .await?;
    Ok(Json(data))
}

/// POST /api/rooms
pub async fn create_room(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    body: Result<Json<Value>, JsonRejection>,
) -> GatewayResult<(StatusCode, Json<Value>)> {
    let body = json_body(body)?;
    let data = state
        .backend
        .forward_json(
            Method::POST,
            paths::ROOMS,
            &token,
            Some(&body),
            messages::CREATE_ROOM_FAILED,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(data)))
}

/// GET /api/rooms/{id}
pub async fn get_room(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    id: Result<Path<DbId>, PathRejection>,
) -> GatewayResult<Json<Value>> {
    let id = resource_id(id)?;
    let data = state
        .backend
        .forward_json(
            Method::GET,
            &paths::room_by_id(id),
            &token,
            None,
            messages::FETCH_ROOM_FAILED,
        )
        .await?;
    Ok(Json(data))
}

/// PUT /api/rooms/{id}
pub async fn update_room(
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
            &paths::room_by_id(id),
            &token,
            Some(&body),
            messages::UPDATE_ROOM_FAILED,
        )
        .await?;
    Ok(Json(data))
}

/// DELETE /api/rooms/{id}
pub async fn delete_room(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    id: Result<Path<DbId>, PathRejection>,
) -> GatewayResult<Json<Value>> {
    let id = resource_id(id)?;
    let data = state
        .backend
        .forward_json(
            Method::DELETE,
            &paths::room_by_id(id),
            &token,
            None,
            messages::DELETE_ROOM_FAILED,
        )
        .await?;
    Ok(Json(data))
}

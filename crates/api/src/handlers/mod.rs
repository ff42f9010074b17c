//! Route handlers.
//!
//! Each handler authenticates (where required), forwards one request to a
//! fixed backend endpoint and relays the answer.

pub mod assets;
pub mod categories;
pub mod rooms;
pub mod user;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use dormspace_core::messages;
use dormspace_core::types::DbId;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::error::{GatewayError, GatewayResult};

/// Inbound JSON body, answering 400 `{message}` when it does not parse.
pub(crate) fn json_body(body: Result<Json<Value>, JsonRejection>) -> GatewayResult<Value> {
    body.map(|Json(value)| value).map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected request body");
        GatewayError::BadRequest(messages::INVALID_BODY.into())
    })
}

/// Inbound JSON body decoded into a typed form. Missing fields take their
/// defaults; wrong types answer 400.
pub(crate) fn form_body<T: DeserializeOwned>(
    body: Result<Json<Value>, JsonRejection>,
) -> GatewayResult<T> {
    serde_json::from_value(json_body(body)?).map_err(|e| {
        tracing::debug!(error = %e, "Request body has the wrong shape");
        GatewayError::BadRequest(messages::INVALID_BODY.into())
    })
}

/// Numeric `{id}` path segment.
pub(crate) fn resource_id(path: Result<Path<DbId>, PathRejection>) -> GatewayResult<DbId> {
    path.map(|Path(id)| id)
        .map_err(|_| GatewayError::BadRequest(messages::INVALID_ID.into()))
}

/// Fallback for unknown routes.
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": messages::ROUTE_NOT_FOUND })),
    )
}

//! Handler for `/api/asset-categories`.

use axum::extract::State;
use axum::Json;
use dormspace_core::messages;
use dormspace_core::paths;
use reqwest::Method;
use serde_json::Value;

use crate::error::GatewayResult;
use crate::middleware::auth::BearerToken;
use crate::state::AppState;

/// GET /api/asset-categories
pub async fn list_categories(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> GatewayResult<Json<Value>> {
    let data = state
        .backend
        .forward_json(
            Method::GET,
            paths::ASSET_CATEGORIES,
            &token,
            None,
            messages::FETCH_CATEGORIES_FAILED,
        )
        .await?;
    Ok(Json(data))
}

//! Route definitions for assets.

use axum::routing::get;
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// ```text
/// GET    /api/assets                  -> list_assets
/// POST   /api/assets                  -> create_asset
/// GET    /api/assets/{id}             -> get_asset
/// PUT    /api/assets/{id}             -> update_asset
/// DELETE /api/assets/{id}             -> delete_asset
/// GET    /api/assets/room/{room_id}   -> list_room_assets
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/assets", get(assets::list_assets).post(assets::create_asset))
        .route(
            "/api/assets/{id}",
            get(assets::get_asset)
                .put(assets::update_asset)
                .delete(assets::delete_asset),
        )
        .route("/api/assets/room/{room_id}", get(assets::list_room_assets))
}

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// `GET /api/asset-categories -> list_categories`
pub fn router() -> Router<AppState> {
    Router::new().route("/api/asset-categories", get(categories::list_categories))
}

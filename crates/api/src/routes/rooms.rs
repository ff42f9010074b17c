//! Route definitions for rooms.

use axum::routing::get;
use axum::Router;

use crate::handlers::rooms;
use crate::state::AppState;

/// ```text
/// GET    /api/rooms        -> list_rooms
/// POST   /api/rooms        -> create_room
/// GET    /api/rooms/{id}   -> get_room
/// PUT    /api/rooms/{id}   -> update_room
/// DELETE /api/rooms/{id}   -> delete_room
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/rooms", get(rooms::list_rooms).post(rooms::create_room))
        .route(
            "/api/rooms/{id}",
            get(rooms::get_room)
                .put(rooms::update_room)
                .delete(rooms::delete_room),
        )
}

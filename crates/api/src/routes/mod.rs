pub mod assets;
pub mod categories;
pub mod health;
pub mod rooms;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /api/user/register                 register (public, form-encoded upstream)
/// /api/user/login                    login (public, sets session cookie)
/// /api/user/logout                   logout (best effort, always 200)
/// /api/user/verify                   OTP verification (public)
/// /api/user/forgot-password          password reset email (public)
/// /api/user/resend-otp               resend OTP (public)
/// /api/user/reset-password           reset password (public)
/// /api/user/auth/me                  current user
///
/// /api/rooms                         list (paged), create
/// /api/rooms/{id}                    get, update, delete
///
/// /api/assets                        list (paged), create
/// /api/assets/{id}                   get, update, delete
/// /api/assets/room/{room_id}         assets in a room
///
/// /api/asset-categories              list
/// ```
///
/// Every route except the public account routes and logout requires a
/// bearer token in the `Authorization` header or the session cookie.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(user::router())
        .merge(rooms::router())
        .merge(assets::router())
        .merge(categories::router())
}

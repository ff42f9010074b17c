//! Route definitions for the account lifecycle.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Account routes under `/api/user`.
///
/// ```text
/// POST /api/user/register         -> register
/// POST /api/user/login            -> login
/// POST /api/user/logout           -> logout
/// POST /api/user/verify           -> verify
/// POST /api/user/forgot-password  -> forgot_password
/// POST /api/user/resend-otp       -> resend_otp
/// POST /api/user/reset-password   -> reset_password
/// GET  /api/user/auth/me          -> me
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/user/register", post(user::register))
        .route("/api/user/login", post(user::login))
        .route("/api/user/logout", post(user::logout))
        .route("/api/user/verify", post(user::verify))
        .route("/api/user/forgot-password", post(user::forgot_password))
        .route("/api/user/resend-otp", post(user::resend_otp))
        .route("/api/user/reset-password", post(user::reset_password))
        .route("/api/user/auth/me", get(user::me))
}

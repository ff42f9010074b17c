//! Bearer token extractor for the protected gateway routes.
//!
//! The gateway checks presence only; validity and expiry are the backend's
//! call.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::cookie::read_cookie;
use crate::error::GatewayError;
use crate::state::AppState;

/// The caller's opaque bearer token.
///
/// Use this as an extractor parameter in any handler that forwards on the
/// caller's behalf. A request without a token is answered with 401 before
/// the handler runs, so nothing reaches the backend:
///
/// ```ignore
/// async fn my_handler(State(state): State<AppState>, BearerToken(token): BearerToken) {
///     tracing::debug!(len = token.len(), "forwarding");
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

impl FromRequestParts<AppState> for BearerToken {
    type Rejection = GatewayError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        extract_token(&parts.headers, &state.config.session_cookie_name)
            .map(BearerToken)
            .ok_or(GatewayError::Unauthorized)
    }
}

/// Token from a non-empty `Authorization: Bearer` header, falling back to
/// the session cookie.
pub fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .or_else(|| read_cookie(headers, cookie_name))
}

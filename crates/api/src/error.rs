use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dormspace_core::messages;
use serde_json::json;

/// Gateway-level error type for HTTP handlers.
///
/// Every variant renders as `{ "message": ... }`. Transport, decode and
/// configuration faults are logged and answered with a 500 and a safe
/// message; nothing escapes as an unhandled fault.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// No bearer token in the `Authorization` header or session cookie.
    #[error("{}", messages::NO_TOKEN)]
    Unauthorized,

    /// The inbound request is unusable; nothing was forwarded.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The backend answered non-2xx; relayed with its status.
    #[error("Backend responded {status}: {message}")]
    Backend { status: StatusCode, message: String },

    /// The backend could not be reached or timed out.
    #[error("Backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a body that is not JSON.
    #[error("Malformed backend response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The gateway is missing configuration it needs to forward.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request outlived the gateway's overall deadline.
    #[error("Request timed out")]
    Timeout,

    /// A middleware fault outside any handler.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type GatewayResult<T> = Result<T, GatewayError>;

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            GatewayError::Unauthorized => (StatusCode::UNAUTHORIZED, messages::NO_TOKEN.to_string()),
            GatewayError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            GatewayError::Backend { status, message } => (status, message),
            GatewayError::Transport(err) => {
                tracing::error!(error = %err, "Backend request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    messages::INTERNAL_ERROR.to_string(),
                )
            }
            GatewayError::Decode(err) => {
                tracing::error!(error = %err, "Malformed backend response");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    messages::INTERNAL_ERROR.to_string(),
                )
            }
            GatewayError::Config(msg) => {
                tracing::error!(error = %msg, "Gateway misconfigured");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            GatewayError::Timeout => {
                tracing::error!("Request exceeded the gateway deadline");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    messages::INTERNAL_ERROR.to_string(),
                )
            }
            GatewayError::Internal(msg) => {
                tracing::error!(error = %msg, "Middleware failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    messages::INTERNAL_ERROR.to_string(),
                )
            }
        };

        (status, axum::Json(json!({ "message": message }))).into_response()
    }
}

use dormspace_core::envelope::extract_message;
use dormspace_core::error::CoreError;
use dormspace_core::messages::GENERIC_CLIENT_ERROR;
use serde_json::Value;

/// A non-2xx response from the gateway.
///
/// Carries the human-readable message, the numeric status and the parsed
/// body so callers can branch on `status` (401 re-auth, 404 not found, 5xx
/// transient) and still inspect whatever the server sent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: u16,
    pub data: Value,
}

impl ApiError {
    /// Build from a failed response, preferring the body's `message`, then
    /// its `error`, then a generic fallback.
    pub fn from_response(status: u16, data: Value) -> Self {
        let message = extract_message(&data)
            .unwrap_or(GENERIC_CLIENT_ERROR)
            .to_string();
        Self {
            message,
            status,
            data,
        }
    }
}

/// Every failure the client layer can produce.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The gateway answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request never completed (connection refused, DNS, TLS, ...).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx body that is not the JSON we expected.
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Rejected locally by form validation or the capacity guard; nothing
    /// was sent.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience alias for client call results.
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// HTTP status, when the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api(err) => Some(err.status),
            ClientError::Transport(err) => err.status().map(|s| s.as_u16()),
            ClientError::Decode(_) | ClientError::Core(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api(err) => match err.status {
                401 => "Unauthorized. Please log in again.".to_string(),
                403 => "You don't have permission to perform this action.".to_string(),
                404 => "Resource not found.".to_string(),
                422 => "Validation error. Please check your input.".to_string(),
                s if s >= 500 => "Server error. Please try again later.".to_string(),
                _ => err.message.clone(),
            },
            ClientError::Transport(_) => "Network error occurred".to_string(),
            ClientError::Decode(_) => "An unexpected error occurred".to_string(),
            ClientError::Core(CoreError::Validation(_)) => "Validation failed".to_string(),
            ClientError::Core(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn message_taken_from_body() {
        let err = ApiError::from_response(404, json!({ "message": "Not found" }));
        assert_eq!(err.status, 404);
        assert_eq!(err.message, "Not found");
        assert_eq!(err.to_string(), "Not found");
    }

    #[test]
    fn error_field_used_when_message_missing() {
        let err = ApiError::from_response(400, json!({ "error": "Bad dimensions" }));
        assert_eq!(err.message, "Bad dimensions");
    }

    #[test]
    fn empty_body_falls_back_to_generic_message() {
        let err = ApiError::from_response(500, json!({}));
        assert_eq!(err.message, GENERIC_CLIENT_ERROR);
        assert_eq!(err.data, json!({}));
    }

    #[test]
    fn user_message_depends_on_status() {
        let unauthorized = ClientError::from(ApiError::from_response(401, json!({})));
        assert!(unauthorized.is_unauthorized());
        assert_eq!(unauthorized.user_message(), "Unauthorized. Please log in again.");

        let conflict = ClientError::from(ApiError::from_response(
            409,
            json!({ "message": "Room name taken" }),
        ));
        assert_eq!(conflict.user_message(), "Room name taken");

        let server = ClientError::from(ApiError::from_response(503, Value::Null));
        assert_eq!(server.user_message(), "Server error. Please try again later.");
    }
}

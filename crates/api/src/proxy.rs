//! Forwarding to the backend API.
//!
//! [`BackendClient`] sends one request to `backend_url + path`, parses the
//! JSON answer and splits it into a relayable body or a [`GatewayError`].

use std::time::Duration;

use dormspace_core::envelope::extract_message;
use dormspace_core::messages;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;

use crate::error::{GatewayError, GatewayResult};

/// HTTP client bound to the configured backend.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Option<String>,
}

impl BackendClient {
    /// Build a client with `timeout` applied to every backend request.
    pub fn new(base_url: Option<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// Forward a JSON request carrying `token` as a bearer credential.
    ///
    /// `body` is attached only for POST, PUT and PATCH. A non-2xx answer
    /// becomes [`GatewayError::Backend`] with the backend's message, or
    /// `failure_message` when it has none.
    pub async fn forward_json(
        &self,
        method: Method,
        path: &str,
        token: &str,
        body: Option<&Value>,
        failure_message: &str,
    ) -> GatewayResult<Value> {
        let url = self.url(path)?;
        tracing::debug!(%method, %url, "Forwarding to backend");

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            if method == Method::POST || method == Method::PUT || method == Method::PATCH {
                request = request.body(serde_json::to_vec(body)?);
            }
        }

        let response = request.send().await?;
        Self::relay(response, failure_message).await
    }

    /// Forward an unauthenticated form-encoded POST.
    pub async fn forward_form(
        &self,
        path: &str,
        fields: &[(&str, &str)],
        failure_message: &str,
    ) -> GatewayResult<Value> {
        let url = self.url(path)?;
        tracing::debug!(%url, "Forwarding form to backend");

        let response = self.http.post(&url).form(fields).send().await?;
        Self::relay(response, failure_message).await
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> GatewayResult<String> {
        let base = self
            .base_url
            .as_deref()
            .ok_or_else(|| GatewayError::Config(messages::CONFIG_ERROR.into()))?;
        Ok(format!("{base}{path}"))
    }

    /// Parse the body (empty reads as `null`) and split on status.
    async fn relay(response: reqwest::Response, failure_message: &str) -> GatewayResult<Value> {
        let status = response.status();
        let bytes = response.bytes().await?;
        let data: Value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        if !status.is_success() {
            tracing::debug!(%status, "Backend rejected request");
            return Err(GatewayError::Backend {
                status,
                message: extract_message(&data).unwrap_or(failure_message).to_string(),
            });
        }

        Ok(data)
    }
}

//! HTTP client for the gateway routes.
//!
//! Every call goes through [`ApiClient::request`], which injects the bearer
//! token from the [`SessionStore`], parses the body whatever the status, and
//! turns non-2xx responses into [`ApiError`]. Successful bodies are returned
//! as-is; envelope unwrapping belongs to [`crate::endpoints`].

use async_trait::async_trait;
use dormspace_core::paths;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ApiError, ClientResult};
use crate::session::{LogoutNotifier, SessionStore};

/// Client bound to one gateway origin and one session.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
    token_ttl_minutes: i64,
    default_page_size: u32,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: SessionStore) -> Self {
        Self::with_client(reqwest::Client::new(), config, session)
    }

    /// Reuse an existing [`reqwest::Client`] (shared connection pool).
    pub fn with_client(http: reqwest::Client, config: &ClientConfig, session: SessionStore) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
            token_ttl_minutes: config.token_ttl_minutes,
            default_page_size: config.default_page_size,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token_ttl_minutes(&self) -> i64 {
        self.token_ttl_minutes
    }

    pub fn default_page_size(&self) -> u32 {
        self.default_page_size
    }

    // ---- verbs ----

    pub async fn get(&self, path: &str) -> ClientResult<Value> {
        self.request(Method::GET, path, None::<&()>).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<Value> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// POST with no body at all.
    pub async fn post_empty(&self, path: &str) -> ClientResult<Value> {
        self.request(Method::POST, path, None::<&()>).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<Value> {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<Value> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> ClientResult<Value> {
        self.request(Method::DELETE, path, None::<&()>).await
    }

    /// Send `method path` with the current session token.
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<Value> {
        let token = self.session.token();
        self.send(method, path, body, token.as_deref()).await
    }

    // ---- private helpers ----

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> ClientResult<Value> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        match token {
            Some(token) => request = request.header(AUTHORIZATION, format!("Bearer {token}")),
            None => tracing::warn!(%method, path, "No auth token found for request"),
        }

        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await?;
        Self::parse_response(response).await
    }

    /// Read the body as JSON regardless of status, then split on success.
    ///
    /// An empty body reads as `null`. A non-JSON error body still yields an
    /// [`ApiError`] carrying the status; a non-JSON success body is a decode
    /// failure.
    async fn parse_response(response: reqwest::Response) -> ClientResult<Value> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            if bytes.is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_slice(&bytes)?);
        }

        let data = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        Err(ApiError::from_response(status.as_u16(), data).into())
    }
}

#[async_trait]
impl LogoutNotifier for ApiClient {
    async fn notify_logout(&self, token: Option<&str>) -> ClientResult<()> {
        self.send(Method::POST, paths::USER_LOGOUT, None::<&()>, token)
            .await
            .map(|_| ())
    }
}

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, Method, Request, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use dormspace_api::config::ServerConfig;
use dormspace_api::router::build_app_router;
use dormspace_api::state::AppState;

// ---------------------------------------------------------------------------
// Mock backend
// ---------------------------------------------------------------------------

/// One request as seen by the mock backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    /// Path plus query string.
    pub uri: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

type Responder = dyn Fn(&RecordedRequest) -> (StatusCode, String) + Send + Sync;

#[derive(Clone)]
struct MockState {
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responder: Arc<Responder>,
    delay: Duration,
}

/// A throwaway backend on `127.0.0.1:0` that counts calls and records every
/// request it receives.
pub struct MockBackend {
    pub url: String,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&RecordedRequest) -> (StatusCode, String) + Send + Sync + 'static,
    {
        Self::start_delayed(Duration::ZERO, responder).await
    }

    /// Like [`MockBackend::start`], but every answer is held back by `delay`.
    pub async fn start_delayed<F>(delay: Duration, responder: F) -> Self
    where
        F: Fn(&RecordedRequest) -> (StatusCode, String) + Send + Sync + 'static,
    {
        let state = MockState {
            calls: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            responder: Arc::new(responder),
            delay,
        };
        let calls = state.calls.clone();
        let requests = state.requests.clone();

        let app = Router::new().fallback(record).with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{addr}"),
            calls,
            requests,
        }
    }

    /// Backend answering every request with `status` and a JSON body.
    pub async fn always(status: StatusCode, body: Value) -> Self {
        let body = body.to_string();
        Self::start(move |_| (status, body.clone())).await
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.calls.fetch_add(1, Ordering::SeqCst);

    let recorded = RecordedRequest {
        method,
        uri: uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_default(),
        headers: headers
            .iter()
            .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
            .collect(),
        body: String::from_utf8_lossy(&body).into_owned(),
    };

    let (status, body) = (state.responder)(&recorded);
    state.requests.lock().unwrap().push(recorded);

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    (status, [("content-type", "application/json")], body).into_response()
}

// ---------------------------------------------------------------------------
// Gateway under test
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` pointing at `backend_url`.
pub fn test_config(backend_url: Option<&str>) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 35,
        backend_url: backend_url.map(str::to_string),
        backend_timeout_secs: 5,
        session_cookie_name: "authToken".to_string(),
        session_cookie_max_age_secs: 600,
        cookie_secure: false,
        app_env: "development".to_string(),
    }
}

/// Build the full application router (same middleware stack as production)
/// forwarding to `backend`.
pub fn build_test_app(backend: &MockBackend) -> Router {
    build_app_with(test_config(Some(&backend.url)))
}

pub fn build_app_with(config: ServerConfig) -> Router {
    let state = AppState::new(config.clone()).unwrap();
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_with_token(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn json_with_token(
    app: Router,
    method: Method,
    uri: &str,
    token: &str,
    body: &Value,
) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Decode an `application/x-www-form-urlencoded` body into a map.
pub fn form_fields(body: &str) -> HashMap<String, String> {
    reqwest::Url::parse(&format!("http://form.local/?{body}"))
        .unwrap()
        .query_pairs()
        .into_owned()
        .collect()
}

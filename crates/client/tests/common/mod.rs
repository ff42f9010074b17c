#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::Value;

use dormspace_client::session::clock::ManualClock;
use dormspace_client::session::storage::MemoryStorage;
use dormspace_client::{ApiClient, ClientConfig, SessionStore};

/// Fixed instant every test clock starts at.
pub const NOW_MS: i64 = 1_700_000_000_000;

/// One request as seen by the mock gateway.
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
}

/// A throwaway HTTP server on `127.0.0.1:0` answering every request through
/// a scripted responder.
pub struct MockServer {
    pub url: String,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&RecordedRequest) -> (StatusCode, String) + Send + Sync + 'static,
    {
        let state = MockState {
            calls: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            responder: Arc::new(responder),
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

    /// Server answering every request with `status` and a JSON body.
    pub async fn always(status: StatusCode, body: Value) -> Self {
        let body = body.to_string();
        Self::start(move |_| (status, body.clone())).await
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("no request recorded")
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

    (status, [("content-type", "application/json")], body).into_response()
}

/// Client pointed at `server` with an in-memory session and a frozen clock.
pub fn client_for(server: &MockServer) -> (ApiClient, Arc<MemoryStorage>, Arc<ManualClock>) {
    let storage = Arc::new(MemoryStorage::new());
    let clock = Arc::new(ManualClock::at_millis(NOW_MS));
    let session = SessionStore::with_clock(storage.clone(), clock.clone());
    let client = ApiClient::new(&ClientConfig::new(server.url.clone()), session);
    (client, storage, clock)
}

/// Client whose session already holds a live `token`.
pub fn signed_in_client(server: &MockServer, token: &str) -> ApiClient {
    let (client, _, _) = client_for(server);
    client.session().set_token(token, 10);
    client
}

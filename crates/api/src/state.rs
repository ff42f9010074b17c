use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::proxy::BackendClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the gateway keeps no per-request mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (cookie settings, backend URL).
    pub config: Arc<ServerConfig>,
    /// Forwarder for the configured backend.
    pub backend: BackendClient,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let backend = BackendClient::new(
            config.backend_url.clone(),
            Duration::from_secs(config.backend_timeout_secs),
        )?;
        Ok(Self {
            config: Arc::new(config),
            backend,
        })
    }
}

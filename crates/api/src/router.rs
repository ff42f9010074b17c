//! Gateway router and middleware stack.
//!
//! [`build_app_router`] is shared by the binary and the integration tests so
//! both exercise the same layers.

use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Method;
use axum::{BoxError, Router};
use tower::timeout::error::Elapsed;
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::error::GatewayError;
use crate::handlers;
use crate::routes;
use crate::state::AppState;

/// Build the gateway [`Router`].
///
/// Layers, outermost first:
///
/// - CORS for the configured origins, with credentials so the session
///   cookie crosses origins.
/// - `x-request-id` assigned on the way in and echoed on the way out, with
///   request tracing in between.
/// - An overall deadline. It should sit above `backend_timeout_secs` so a
///   slow backend is reported by the forwarder; if it fires anyway the
///   caller still gets a 500 `{message}` body.
/// - Panic recovery around the handlers.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(HandleErrorLayer::new(handle_middleware_error))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(CatchPanicLayer::new());

    Router::new()
        .merge(routes::health::router())
        .merge(routes::api_routes())
        .fallback(handlers::not_found)
        .layer(middleware)
        // Applied separately (still outermost) so CORS sees axum's `Body`,
        // which satisfies its `ResBody: Default` bound.
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// Render a failure raised by the middleware itself.
async fn handle_middleware_error(err: BoxError) -> GatewayError {
    if err.is::<Elapsed>() {
        GatewayError::Timeout
    } else {
        GatewayError::Internal(err.to_string())
    }
}

/// CORS layer for `config.cors_origins`.
///
/// Panics at startup on an origin that is not a valid header value.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

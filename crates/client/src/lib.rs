//! Browser-side half of dormspace: the persisted session and the HTTP
//! client that talks to the proxy gateway.
//!
//! - [`session`] -- token + expiration bookkeeping over pluggable storage.
//! - [`http`] -- [`http::ApiClient`], bearer injection and error normalization.
//! - [`endpoints`] -- typed calls for auth, rooms, assets and reports.

pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod session;

pub use config::ClientConfig;
pub use error::{ApiError, ClientError, ClientResult};
pub use http::ApiClient;
pub use session::SessionStore;

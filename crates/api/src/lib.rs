//! dormspace proxy gateway library.
//!
//! Authenticates inbound calls by bearer token (header or session cookie),
//! forwards each to one fixed backend endpoint and relays the answer as
//! `{ "message": ... }` on failure. Exposed as a library so integration tests
//! and the binary entrypoint share the same router.

pub mod config;
pub mod cookie;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod proxy;
pub mod query;
pub mod router;
pub mod routes;
pub mod state;

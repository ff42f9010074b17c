//! Request extractors shared by the protected routes.
//!
//! - [`auth::BearerToken`] -- the caller's token from the `Authorization`
//!   header or the session cookie.

pub mod auth;

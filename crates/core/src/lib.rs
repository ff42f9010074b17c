//! Domain layer for the dormspace room and asset manager.
//!
//! Pure types and logic shared by the browser-side client and the proxy
//! gateway: room/asset models, the floor-area capacity guard, reporting
//! aggregates, form validation and the backend envelope conventions.

pub mod capacity;
pub mod envelope;
pub mod error;
pub mod messages;
pub mod paths;
pub mod report;
pub mod types;
pub mod validation;

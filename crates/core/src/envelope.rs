//! Backend response envelope conventions.
//!
//! The backend wraps payloads as `{ "data": ..., "message": ... }` and
//! paginated lists as `{ "data": [...], "total", "page", "pageSize",
//! "totalPages" }`. Error bodies carry a human-readable `message` (or, from
//! some endpoints, an `error`) field.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// First page number.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Upper bound accepted for `pageSize`.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Standard `{ "data": T }` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A page of results. A missing `data` array reads as empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: None,
            page: None,
            page_size: None,
            total_pages: None,
        }
    }
}

/// Pagination request (`?page=&pageSize=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// Build a request, clamping `page` to at least 1 and `page_size` to
    /// `1..=MAX_PAGE_SIZE`.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Render as a query string without the leading `?`.
    pub fn to_query(&self) -> String {
        format!("page={}&pageSize={}", self.page, self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}

/// Pull a human-readable message out of an error body.
///
/// Prefers a non-empty `message` string, then a non-empty `error` string.
pub fn extract_message(body: &Value) -> Option<&str> {
    ["message", "error"]
        .iter()
        .filter_map(|key| body.get(key).and_then(Value::as_str))
        .find(|msg| !msg.is_empty())
}

/// Unwrap the user profile from a backend body: `data`, then `user`, then the
/// body itself.
pub fn unwrap_user(body: &Value) -> Value {
    body.get("data")
        .filter(|v| !v.is_null())
        .or_else(|| body.get("user").filter(|v| !v.is_null()))
        .unwrap_or(body)
        .clone()
}

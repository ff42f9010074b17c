//! Shared query parameter types for gateway handlers.

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use dormspace_core::envelope::{PageRequest, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use dormspace_core::messages;
use serde::Deserialize;

use crate::error::{GatewayError, GatewayResult};

/// Pagination parameters (`?page=&pageSize=`).
///
/// Missing values take the defaults; out-of-range values are clamped.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageParams {
    /// Accept the extracted query, answering 400 `{message}` when it does
    /// not parse.
    pub fn from_query(query: Result<Query<PageParams>, QueryRejection>) -> GatewayResult<Self> {
        query.map(|Query(params)| params).map_err(|rejection| {
            tracing::debug!(error = %rejection, "Rejected pagination query");
            GatewayError::BadRequest(messages::INVALID_QUERY.into())
        })
    }

    pub fn to_page_request(&self) -> PageRequest {
        PageRequest::new(
            self.page.unwrap_or(DEFAULT_PAGE),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }

    /// `path?page=..&pageSize=..`
    pub fn append_to(&self, path: &str) -> String {
        format!("{path}?{}", self.to_page_request().to_query())
    }
}

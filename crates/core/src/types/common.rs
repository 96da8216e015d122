//! Envelope types shared by every router.

use serde::{Deserialize, Serialize};

/// Generic `{"message": ...}` response returned by mutations and by
/// endpoints that only report an outcome (e.g. `GET /v1/role`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultResponse {
    /// Human-readable outcome, shown verbatim to the end user.
    pub message: String,
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page, 1-indexed.
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
    /// Total items across all pages.
    pub total_item: u64,
    /// Total number of pages.
    pub total_page: u32,
}

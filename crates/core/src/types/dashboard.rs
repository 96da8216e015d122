//! Admin dashboard aggregate bodies.

use serde::{Deserialize, Serialize};

/// Response of `GET /v1/admin/dashboard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetDashboard {
    /// Registered user count.
    pub total_user: u64,
    /// Lifetime order count.
    pub total_order: u64,
    /// Listed product count.
    pub total_product: u64,
    /// Lifetime income, including shipping.
    pub total_sales: i64,
}

/// One point on the sales chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalePoint {
    /// Bucket label, pre-formatted server-side (e.g. "Jun 2025").
    pub date: String,
    /// Income in the bucket.
    pub total: i64,
}

/// Response of `GET /v1/admin/sales`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSales {
    /// Chronological sales buckets.
    pub data: Vec<SalePoint>,
}

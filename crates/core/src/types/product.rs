//! Product catalogue bodies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::Pagination;

/// A product teaser in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// Product identifier.
    pub id: Uuid,
    /// Product title.
    pub title: String,
    /// Unit price.
    pub price: i64,
    /// Absolute image URL.
    pub image: String,
}

/// Response of `GET /v1/products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetProducts {
    /// Products on the requested page.
    pub data: Vec<ProductSummary>,
    /// Page metadata.
    pub pagination: Pagination,
}

/// Response of `GET /v1/products/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetDetailProduct {
    /// Product identifier.
    pub id: Uuid,
    /// Product title.
    pub title: String,
    /// Unit price.
    pub price: i64,
    /// Absolute image URLs.
    pub images: Vec<String>,
    /// Brand name.
    pub brand: String,
    /// Condition label (e.g. "Brand New").
    pub condition: String,
    /// Available size labels.
    pub size: Vec<String>,
    /// Free-text description.
    pub product_detail: String,
    /// Owning category identifier.
    pub category_id: Uuid,
    /// Owning category title.
    pub category_name: String,
}

/// Filter, sort, and pagination options for `GET /v1/products`.
///
/// Every field is optional; `None` fields are omitted from the request
/// URL so the server applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListParams {
    /// Page, 1-indexed.
    pub page: Option<u32>,
    /// Items per page.
    pub page_size: Option<u32>,
    /// Sort key (e.g. "Price a_z").
    pub sort_by: Option<String>,
    /// Restrict to one category.
    pub category: Option<Uuid>,
    /// Restrict to one condition label.
    pub condition: Option<String>,
    /// Case-insensitive title search.
    pub product_name: Option<String>,
}

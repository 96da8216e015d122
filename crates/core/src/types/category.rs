//! Category CRUD bodies.
//!
//! The backend field `type` is a Rust keyword; DTOs expose it as `kind`
//! and rename it on the wire.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier.
    pub id: Uuid,
    /// Display title.
    pub title: String,
    /// Category type (e.g. clothing section).
    #[serde(rename = "type")]
    pub kind: String,
}

/// Response of `GET /v1/categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCategory {
    /// All categories.
    pub data: Vec<Category>,
}

/// Response of `GET /v1/categories/detail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailCategory {
    /// Category identifier.
    pub id: Uuid,
    /// Display title.
    pub title: String,
    /// Category type.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Payload for `POST /v1/categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategory {
    /// Display title.
    pub title: String,
    /// Category type.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Payload for `PUT /v1/categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCategory {
    /// Replacement title.
    pub title: String,
    /// Replacement type.
    #[serde(rename = "type")]
    pub kind: String,
}

//! Typed failure taxonomy for API calls.
//!
//! Every call fails with exactly one [`ApiError`]. The client never
//! retries or recovers; callers decide what a failure means for them.

use thiserror::Error;

/// Errors that can terminate an API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 422: the server rejected the request's field values. The
    /// body carries the server's validation payload verbatim.
    #[error("validation failed (HTTP 422): {}", summarize_body(.body))]
    Validation {
        /// Parsed response body, forwarded unchanged.
        body: serde_json::Value,
    },

    /// Any other non-2xx response.
    #[error("API error (HTTP {status}): {}", summarize_body(.body))]
    Api {
        /// HTTP status code.
        status: u16,
        /// Parsed response body (best effort).
        body: serde_json::Value,
    },

    /// The request never produced a response (DNS, connect, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response body did not match the declared success type.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// A request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The call was cancelled before it settled. Not a server failure.
    #[error("call cancelled")]
    Cancelled,
}

impl ApiError {
    /// HTTP status of the failure, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Validation { .. } => Some(422),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server's human-readable message, if the error body carries
    /// one under `message` (documented shape) or `detail` (FastAPI).
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Validation { body } | Self::Api { body, .. } => body
                .get("message")
                .and_then(serde_json::Value::as_str)
                .or_else(|| body.get("detail").and_then(serde_json::Value::as_str)),
            _ => None,
        }
    }

    /// Whether this is an HTTP 422 validation failure.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Whether the call was cancelled rather than failed.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Parse a non-2xx response body. Falls back to wrapping the raw text,
/// or to an empty object for an empty body, so callers always get JSON.
pub(crate) fn parse_error_body(text: &str) -> serde_json::Value {
    if text.is_empty() {
        return serde_json::Value::Object(serde_json::Map::new());
    }
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::json!({ "message": text }))
}

fn summarize_body(body: &serde_json::Value) -> String {
    let message = body
        .get("message")
        .and_then(serde_json::Value::as_str)
        .or_else(|| body.get("detail").and_then(serde_json::Value::as_str));
    match message {
        Some(message) => message.to_string(),
        None if body.as_object().is_some_and(serde_json::Map::is_empty) => {
            "(empty body)".to_string()
        }
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validation_error_reports_status_422() {
        let err = ApiError::Validation {
            body: json!({"detail": [{"loc": ["body", "email"], "msg": "invalid email"}]}),
        };
        assert_eq!(err.status(), Some(422));
        assert!(err.is_validation());
    }

    #[test]
    fn api_error_display_uses_message_field() {
        let err = ApiError::Api {
            status: 404,
            body: json!({"message": "Category not found"}),
        };
        assert_eq!(
            err.to_string(),
            "API error (HTTP 404): Category not found"
        );
        assert_eq!(err.message(), Some("Category not found"));
    }

    #[test]
    fn api_error_display_falls_back_to_detail() {
        let err = ApiError::Api {
            status: 400,
            body: json!({"detail": "Cart is empty"}),
        };
        assert_eq!(err.message(), Some("Cart is empty"));
    }

    #[test]
    fn parse_error_body_passes_json_through() {
        let body = parse_error_body(r#"{"detail": "Category not found"}"#);
        assert_eq!(body, json!({"detail": "Category not found"}));
    }

    #[test]
    fn parse_error_body_wraps_plain_text() {
        let body = parse_error_body("upstream timed out");
        assert_eq!(body, json!({"message": "upstream timed out"}));
    }

    #[test]
    fn parse_error_body_empty_is_empty_object() {
        assert_eq!(parse_error_body(""), json!({}));
    }

    #[test]
    fn cancelled_has_no_status() {
        let err = ApiError::Cancelled;
        assert_eq!(err.status(), None);
        assert!(err.is_cancelled());
        assert_eq!(err.to_string(), "call cancelled");
    }

    #[test]
    fn empty_body_display() {
        let err = ApiError::Api {
            status: 502,
            body: json!({}),
        };
        assert_eq!(err.to_string(), "API error (HTTP 502): (empty body)");
    }
}

//! Integration tests for the Thriftwear API client.
//!
//! Every test runs against an in-process `httpmock` server, so the suite
//! needs no network access and no running backend.
//!
//! # Test Categories
//!
//! - `client_requests` - URL, method, and body-encoding fidelity
//! - `client_responses` - success/error decoding and the error taxonomy
//! - `client_cancellation` - cancellation and concurrent-call behavior

#![cfg_attr(not(test), forbid(unsafe_code))]

use httpmock::MockServer;
use thriftwear_client::{ApiClient, ApiConfig};

/// Build a client pointed at a mock server.
///
/// # Panics
///
/// Panics if the mock server URL is unparsable, which indicates a broken
/// test environment rather than a client defect.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn client_for(server: &MockServer) -> ApiClient {
    let config = ApiConfig::new(server.base_url().parse().unwrap());
    ApiClient::new(config).unwrap()
}

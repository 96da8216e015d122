//! Thriftwear Core - Shared wire types library.
//!
//! This crate provides the request and response body types spoken by the
//! Thriftwear `/v1` REST API, shared by every component that talks to it:
//! - `client` - Typed API client
//! - `integration-tests` - End-to-end tests against a mock server
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Every
//! type mirrors the backend schema field-for-field so that a 2xx response
//! body deserializes without translation.
//!
//! # Modules
//!
//! - [`types`] - Wire DTOs grouped by API router, plus the shipping quote

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

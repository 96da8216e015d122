//! Thriftwear API client.
//!
//! A typed, cancelable REST client for the Thriftwear `/v1` e-commerce
//! API: one method per endpoint, a single generic dispatch routine, and
//! a typed error taxonomy. The client owns no business rules beyond the
//! checkout shipping quote (re-exported from [`types`]); validation,
//! pricing, and inventory live server-side.
//!
//! # Architecture
//!
//! - [`ApiConfig`] - process-wide base URL, default headers, and token
//! - [`ApiClient`] - shared connection pool plus the dispatch routine
//! - [`Call`] - cancelable handle for one in-flight request
//! - [`ApiError`] - validation / application / transport / cancelled
//!
//! Endpoint methods are grouped by backend router in `endpoints/` and
//! all hang off [`ApiClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use thriftwear_client::{ApiClient, ApiConfig};
//! use thriftwear_client::types::SignInForm;
//!
//! let client = ApiClient::new(ApiConfig::from_env()?)?;
//!
//! let user = client
//!     .sign_in(SignInForm {
//!         username: "buyer@example.com".into(),
//!         password: "hunter2!".into(),
//!     })
//!     .await?;
//! client.set_token(user.access_token).await;
//!
//! // Cancelable: drop the page, abort the fetch.
//! let call = client.get_best_seller();
//! let cancel = call.cancel_handle();
//! cancel.cancel();
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod call;
mod client;
mod config;
mod endpoints;
mod error;
mod request;

pub use call::{Call, CancelHandle};
pub use client::ApiClient;
pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;

/// Wire types spoken by the API, re-exported for convenience.
pub use thriftwear_core as types;

//! Endpoint methods, one module per backend router.
//!
//! Each module extends [`crate::ApiClient`] with the typed methods for
//! its router. Inputs are caller-supplied and assumed pre-validated; the
//! client performs no schema validation of its own.

mod auth;
mod carts;
mod categories;
mod dashboard;
mod home;
mod orders;
mod products;
mod users;
mod wishlists;

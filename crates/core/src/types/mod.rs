//! Wire types for the Thriftwear `/v1` API.
//!
//! One module per backend router, mirroring the schema names the server
//! uses. All monetary amounts are integers in the smallest currency unit.

pub mod auth;
pub mod cart;
pub mod category;
pub mod common;
pub mod dashboard;
pub mod home;
pub mod order;
pub mod product;
pub mod shipping;
pub mod user;
pub mod wishlist;

pub use auth::*;
pub use cart::*;
pub use category::*;
pub use common::*;
pub use dashboard::*;
pub use home::*;
pub use order::*;
pub use product::*;
pub use shipping::*;
pub use user::*;
pub use wishlist::*;

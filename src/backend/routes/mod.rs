//! Route Configuration Module
//!
//! - **`router`** - top-level router, version prefix and service-wide layers
//! - **`api_routes`** - endpoint table, split into public and protected routes

pub mod router;

pub mod api_routes;

pub use router::{create_router, API_PREFIX};

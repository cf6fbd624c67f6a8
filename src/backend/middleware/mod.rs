//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - bearer-token gate for protected routes and the `AuthUser` extractor
//!
//! # Example
//!
//! ```rust,ignore
//! use auctionhouse::backend::middleware::auth_middleware;
//! use axum::middleware::from_fn_with_state;
//!
//! let protected = Router::new()
//!     .route("/products", get(list_products))
//!     .route_layer(from_fn_with_state(tokens, auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, authenticate, AuthUser, AuthenticatedUser};

//! Backend Module
//!
//! All server-side code: an Axum HTTP API for identities, sessions, profiles
//! and auction listings.
//!
//! # Architecture
//!
//! - **`validation`** - field validator and the decode + validate pipeline
//! - **`auth`** - credentials, session tokens, identity workflow, auth handlers
//! - **`middleware`** - bearer-token authentication gate
//! - **`users`** - profile endpoints
//! - **`products`** - auction listing endpoints and store contract
//! - **`store`** - PostgreSQL and in-memory store implementations
//! - **`error`** - `BackendError` and its HTTP translation
//! - **`server`** - configuration, state, initialization
//! - **`routes`** - router assembly
//!
//! # Request Flow
//!
//! ```text
//! request ─▶ TraceLayer ─▶ TimeoutLayer ─▶ [auth_middleware] ─▶ ValidatedJson<T> ─▶ handler
//!                                                                                     │
//!                                      IdentityService / stores ◀─────────────────────┘
//! ```
//!
//! # Thread Safety
//!
//! Services are immutable after construction and shared through `Arc`. The
//! in-memory stores use `tokio::sync::RwLock`; the PostgreSQL pool is
//! thread-safe. bcrypt runs on the blocking pool and never under a lock.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`; module errors convert with `?`.
//! Internal failures are logged in full and returned as a generic 500.

pub mod validation;

pub mod auth;

pub mod middleware;

pub mod users;

pub mod products;

pub mod store;

pub mod error;

pub mod server;

pub mod routes;

pub use error::BackendError;
pub use server::create_app;

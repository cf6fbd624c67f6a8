//! Backend Error Module
//!
//! This module defines the error type returned at the HTTP boundary and its
//! translation into responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and its status mapping
//! └── conversion.rs - IntoResponse and From conversions
//! ```
//!
//! # Propagation
//!
//! Domain modules return their own `thiserror` enums. Those are converted into
//! `BackendError` at the handler edge, where each variant becomes a status code
//! and a generic message. Internal details are logged server-side and never
//! returned to the client.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{BackendError, INTERNAL_ERROR_MESSAGE};

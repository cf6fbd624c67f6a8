//! Store Module
//!
//! Implementations of the user and product store contracts.
//!
//! - **`postgres`** - sqlx-backed stores used when `DATABASE_URL` is configured
//! - **`memory`** - in-process stores used without a database and in tests
//!
//! Both report failures through [`StoreError`].

use thiserror::Error;

pub mod memory;

pub mod postgres;

pub use memory::{MemoryProductStore, MemoryUserStore};
pub use postgres::{PgProductStore, PgUserStore};

#[derive(Debug, Error)]
pub enum StoreError {
    /// Email is already bound to another identity
    #[error("email already exists")]
    DuplicateEmail,

    #[error("record not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

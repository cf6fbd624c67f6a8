//! Server Module
//!
//! Configuration, shared state and application assembly.
//!
//! - **`config`** - `AppConfig` from the environment, database connection
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - builds the router from a configuration
//!
//! # Example
//!
//! ```rust,no_run
//! use auctionhouse::backend::server::{config::AppConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{AppConfig, ConfigError};
pub use init::{build_app, build_state, create_app};
pub use state::AppState;

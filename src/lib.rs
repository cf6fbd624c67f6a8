//! Auction House - Main Library
//!
//! Credential and session authentication for an auction marketplace API,
//! with the profile and listing endpoints built on top of it.
//!
//! # Overview
//!
//! - Password hashing and verification (bcrypt, cost 12)
//! - Signed, two-hour session tokens (HS256) and a bearer-token gate
//! - A decode-then-validate pipeline in front of every mutating endpoint
//! - The identity workflow: signup, login, password change
//! - User profiles and auction listings over PostgreSQL or in-memory stores
//!
//! # Usage
//!
//! ```rust,no_run
//! use auctionhouse::backend::server::{config::AppConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::builder().jwt_secret("change-me").build()?;
//! let app = create_app(&config).await;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! See [`backend`] for the module map.

/// Backend server-side code
pub mod backend;

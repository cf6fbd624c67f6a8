/**
 * Server Configuration
 *
 * This module loads the server configuration from the process environment
 * and opens the optional PostgreSQL connection.
 *
 * # Configuration Sources
 *
 * | Key | Required | Default |
 * |---|---|---|
 * | `JWT_SECRET` | yes | none |
 * | `JWT_ISSUER` | no | `auctionhouse` |
 * | `SERVER_PORT` | no | `8080` |
 * | `DATABASE_URL` | no | in-memory stores |
 * | `REQUEST_TIMEOUT_SECS` | no | `10` |
 *
 * The binary loads `.env` before reading these. The resulting `AppConfig` is
 * immutable and injected where needed; nothing reads the environment later.
 *
 * # Error Handling
 *
 * A missing or invalid value is a `ConfigError` and stops startup. Database
 * connection problems are logged and the server falls back to in-memory
 * stores.
 */

use std::time::Duration;

use sqlx::PgPool;
use thiserror::Error;

pub const DEFAULT_ISSUER: &str = "auctionhouse";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// HMAC key for session tokens
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub server_port: u16,
    /// `None` selects the in-memory stores
    pub database_url: Option<String>,
    pub request_timeout: Duration,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("jwt_secret", &"<redacted>")
            .field("jwt_issuer", &self.jwt_issuer)
            .field("server_port", &self.server_port)
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, one call per key
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = AppConfig::builder();

        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(issuer) = lookup("JWT_ISSUER") {
            builder = builder.jwt_issuer(issuer);
        }
        if let Some(port) = lookup("SERVER_PORT") {
            let port = port.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                value: port.clone(),
            })?;
            builder = builder.server_port(port);
        }
        if let Some(url) = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            builder = builder.database_url(url);
        }
        if let Some(secs) = lookup("REQUEST_TIMEOUT_SECS") {
            let secs = secs
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: "REQUEST_TIMEOUT_SECS",
                    value: secs.clone(),
                })?;
            builder = builder.request_timeout(Duration::from_secs(secs));
        }

        builder.build()
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    jwt_secret: Option<String>,
    jwt_issuer: Option<String>,
    server_port: Option<u16>,
    database_url: Option<String>,
    request_timeout: Option<Duration>,
}

impl AppConfigBuilder {
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn jwt_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.jwt_issuer = Some(issuer.into());
        self
    }

    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build the configuration
    ///
    /// Fails when the signing secret is missing or blank.
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let jwt_secret = self
            .jwt_secret
            .filter(|secret| !secret.trim().is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let jwt_issuer = self
            .jwt_issuer
            .filter(|issuer| !issuer.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ISSUER.to_string());

        Ok(AppConfig {
            jwt_secret,
            jwt_issuer,
            server_port: self.server_port.unwrap_or(DEFAULT_PORT),
            database_url: self.database_url,
            request_timeout: self
                .request_timeout
                .unwrap_or(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)),
        })
    }
}

/// Open the database connection pool and run migrations
///
/// # Returns
///
/// - `Some(PgPool)` if the database is reachable
/// - `None` if no URL is configured or the connection fails
pub async fn load_database(config: &AppConfig) -> Option<PgPool> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Using in-memory stores; data is lost on restart.");
        return None;
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Falling back to in-memory stores.");
            return None;
        }
    };

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(()) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}

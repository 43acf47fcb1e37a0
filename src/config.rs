//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;

/// Secret used when `JWT_SECRET` is not set.
pub const DEFAULT_JWT_SECRET: &str = "MY_SECRET_TOKEN";

/// Cost range accepted by bcrypt.
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection URL
    pub database_url: String,

    /// Maximum database connections in pool
    pub database_max_connections: u32,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Secret used to sign and verify bearer tokens
    pub jwt_secret: String,

    /// bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,

    /// Whether the transaction and summary routes sit behind the auth guard
    pub require_auth: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let database_url = var("DATABASE_URL", "sqlite://expenseTracker.db");

        let database_max_connections = var("DATABASE_MAX_CONNECTIONS", "1")
            .parse()
            .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS"))?;

        let host = var("HOST", "127.0.0.1");

        let port = var("PORT", "3000")
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PORT"))?;

        let environment = var("ENVIRONMENT", "development");

        let jwt_secret = var("JWT_SECRET", DEFAULT_JWT_SECRET);
        if jwt_secret.is_empty() {
            return Err(ConfigError::InvalidValue("JWT_SECRET"));
        }

        let bcrypt_cost: u32 = var("BCRYPT_COST", "10")
            .parse()
            .map_err(|_| ConfigError::InvalidValue("BCRYPT_COST"))?;
        if !BCRYPT_COST_RANGE.contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue("BCRYPT_COST"));
        }

        let require_auth = parse_bool(&var("REQUIRE_AUTH", "false"))
            .ok_or(ConfigError::InvalidValue("REQUIRE_AUTH"))?;

        Ok(Self {
            database_url,
            database_max_connections,
            host,
            port,
            environment,
            jwt_secret,
            bcrypt_cost,
            require_auth,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Check if tokens are signed with the built-in fallback secret
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}

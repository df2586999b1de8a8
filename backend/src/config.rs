//! # Configuration
//!
//! Settings are read from the process environment, optionally seeded from a
//! `.env` file. Every value has a default suitable for local development.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use axum::http::HeaderValue;
use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:uniportal.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_STATIC_DIR: &str = "wwwroot";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    /// sqlx connection URL, e.g. `sqlite:uniportal.db`
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub bind_addr: SocketAddr,
    /// Directory served for every non-API path (the UI page shell)
    pub static_dir: PathBuf,
    pub cors_origin: HeaderValue,
    /// When set, an admin account with this hash is created on startup if none exists
    pub admin_password_hash: Option<String>,
}

impl Settings {
    /// Load settings from the environment, after applying any `.env` file
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("UNIPORTAL_DATABASE_URL")
            .or_else(|| lookup("DATABASE_URL"))
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let max_connections = parse_or(
            &lookup,
            "UNIPORTAL_DB_MAX_CONNECTIONS",
            DEFAULT_MAX_CONNECTIONS,
        )?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "UNIPORTAL_DB_MAX_CONNECTIONS",
                message: "must be at least 1".to_string(),
            });
        }

        let acquire_timeout_secs = parse_or(
            &lookup,
            "UNIPORTAL_DB_ACQUIRE_TIMEOUT_SECS",
            DEFAULT_ACQUIRE_TIMEOUT_SECS,
        )?;

        let bind_addr = lookup("UNIPORTAL_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            key: "UNIPORTAL_BIND_ADDR",
            message: format!("'{}' is not a socket address: {}", bind_addr, e),
        })?;

        let static_dir = lookup("UNIPORTAL_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let cors_origin = lookup("UNIPORTAL_CORS_ORIGIN")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());
        let cors_origin = HeaderValue::from_str(&cors_origin).map_err(|e| ConfigError::Invalid {
            key: "UNIPORTAL_CORS_ORIGIN",
            message: e.to_string(),
        })?;

        let admin_password_hash = lookup("UNIPORTAL_ADMIN_PASSWORD_HASH")
            .filter(|hash| !hash.trim().is_empty());

        Ok(Self {
            database: DatabaseSettings {
                url,
                max_connections,
                acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            },
            bind_addr,
            static_dir,
            cors_origin,
            admin_password_hash,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: format!("'{}': {}", raw, e),
        }),
        None => Ok(default),
    }
}

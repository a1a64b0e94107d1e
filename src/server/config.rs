use dioxus_logger::tracing::Level;
use std::{net::SocketAddr, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:9090";
const DEFAULT_LOG_LEVEL: &str = "info";

pub struct Config {
    pub database_url: String,

    pub server_addr: SocketAddr,
    pub log_level: Level,

    /// Origin allowed by CORS; any origin when unset.
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            server_addr: parse_var("SERVER_ADDR", DEFAULT_SERVER_ADDR)?,
            log_level: parse_var("LOG_LEVEL", DEFAULT_LOG_LEVEL)?,
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
        })
    }
}

/// Reads an optional variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = std::env::var(name).unwrap_or_else(|_| default.to_string());

    value.parse().map_err(|err: T::Err| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.clone(),
        reason: err.to_string(),
    })
}

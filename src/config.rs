//! Service configuration from the environment (a `.env` file is loaded first when present).

use crate::error::ConfigError;
use crate::guid::DEFAULT_GUID_SERVICE_URL;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:9000";

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub database: DatabaseConfig,
    /// GUID allocation service. `None` means ids are always generated locally.
    pub guid_service_url: Option<String>,
    pub bind_addr: SocketAddr,
    /// Bearer token required on API routes when set.
    pub api_token: Option<String>,
    /// Create tables at startup when missing.
    pub ensure_schema: bool,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup. `from_env` uses the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = DatabaseConfig {
            url: database_url(&lookup)?,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            acquire_timeout_secs: parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 30)?,
        };

        let guid_service_url = match lookup("GUID_SERVICE_URL") {
            Some(url) if url.trim().is_empty() => None,
            Some(url) => Some(url.trim().to_string()),
            None => Some(DEFAULT_GUID_SERVICE_URL.to_string()),
        };

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_addr.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            var: "BIND_ADDR",
            reason: e.to_string(),
        })?;

        let api_token = lookup("API_TOKEN").map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        let ensure_schema = parse_or(&lookup, "ENSURE_SCHEMA", false)?;

        Ok(ServiceConfig {
            database,
            guid_service_url,
            bind_addr,
            api_token,
            ensure_schema,
        })
    }
}

/// `DATABASE_URL` wins; otherwise the URL is assembled from `DB_USER`, `DB_PASS`, `DB_HOST`, `DB_PORT` and `DB_NAME`.
fn database_url<F>(lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("DATABASE_URL").filter(|s| !s.is_empty()) {
        return Ok(url);
    }
    let user = lookup("DB_USER").filter(|s| !s.is_empty()).ok_or(ConfigError::Missing("DB_USER"))?;
    let name = lookup("DB_NAME").filter(|s| !s.is_empty()).ok_or(ConfigError::Missing("DB_NAME"))?;
    let host = lookup("DB_HOST").filter(|s| !s.is_empty()).unwrap_or_else(|| "localhost".into());
    let port: u16 = parse_or(lookup, "DB_PORT", 5432)?;
    let credentials = match lookup("DB_PASS").filter(|s| !s.is_empty()) {
        Some(pass) => format!("{}:{}", user, pass),
        None => user,
    };
    Ok(format!("postgres://{}@{}:{}/{}", credentials, host, port, name))
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var).filter(|s| !s.trim().is_empty()) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

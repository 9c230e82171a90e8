//! Host server configuration parsed from environment variables.
//!
//! Required:
//! - `BACKEND_URL`: base URL of the attendance backend (`/api/*` is forwarded there)
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `BACKEND_TIMEOUT_SECS`: default 30
//! - `BACKEND_CONNECT_TIMEOUT_SECS`: default 10

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("BACKEND_URL is required")]
    MissingBackendUrl,
    #[error("BACKEND_URL must start with http:// or https://, got {0:?}")]
    InvalidBackendUrl(String),
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend base URL without a trailing slash.
    pub backend_url: String,
    pub timeouts: BackendTimeouts,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend_url = lookup("BACKEND_URL")
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingBackendUrl)?;
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBackendUrl(backend_url));
        }

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let timeouts = BackendTimeouts {
            request_secs: parse_u64(
                lookup("BACKEND_TIMEOUT_SECS"),
                DEFAULT_BACKEND_TIMEOUT_SECS,
            ),
            connect_secs: parse_u64(
                lookup("BACKEND_CONNECT_TIMEOUT_SECS"),
                DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS,
            ),
        };

        Ok(Self { port, backend_url, timeouts })
    }
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}

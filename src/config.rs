//! Client configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Every value has a default so a bare checkout talks to a local backend on
//! port 3000. `from_lookup` takes the variable source as a closure so tests
//! can exercise parsing without touching the process environment.

pub const DEFAULT_API_BASE: &str = "http://localhost:3000/api";
pub const DEFAULT_API_HOST: &str = "http://localhost:3000";
pub const DEFAULT_FALLBACK_USER_ID: i64 = 1;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

pub const API_BASE_VAR: &str = "PANTRY_API_URL";
pub const API_HOST_VAR: &str = "PANTRY_API_HOST";
pub const FALLBACK_USER_ID_VAR: &str = "PANTRY_FALLBACK_USER_ID";
pub const REQUEST_TIMEOUT_VAR: &str = "PANTRY_REQUEST_TIMEOUT_SECS";
pub const CONNECT_TIMEOUT_VAR: &str = "PANTRY_CONNECT_TIMEOUT_SECS";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while building configuration or the HTTP transport.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    /// A URL variable is not an absolute http(s) URL.
    #[error("invalid URL for {key}: {value:?}")]
    InvalidUrl { key: String, value: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// CONFIG
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every API path is appended to. Never ends with `/`.
    pub api_base: String,
    /// Origin serving uploaded assets such as receipt images.
    pub api_host: String,
    /// Identity used when no session is stored. Anonymous/development mode
    /// only: every use is logged at `warn`.
    pub fallback_user_id: i64,
    pub timeouts: Timeouts,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            api_host: DEFAULT_API_HOST.to_owned(),
            fallback_user_id: DEFAULT_FALLBACK_USER_ID,
            timeouts: Timeouts::default(),
        }
    }
}

impl ClientConfig {
    /// Build config from the process environment, loading `.env` first.
    ///
    /// Optional:
    /// - `PANTRY_API_URL`: default `http://localhost:3000/api`
    /// - `PANTRY_API_HOST`: default `http://localhost:3000`
    /// - `PANTRY_FALLBACK_USER_ID`: default 1
    /// - `PANTRY_REQUEST_TIMEOUT_SECS`: default 30
    /// - `PANTRY_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if a URL is malformed or the fallback id is not an integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`ClientConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = parse_url(API_BASE_VAR, lookup(API_BASE_VAR), DEFAULT_API_BASE)?;
        let api_host = parse_url(API_HOST_VAR, lookup(API_HOST_VAR), DEFAULT_API_HOST)?;

        let fallback_user_id = match lookup(FALLBACK_USER_ID_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidValue { key: FALLBACK_USER_ID_VAR.to_owned(), value: raw })?,
            None => DEFAULT_FALLBACK_USER_ID,
        };

        let timeouts = Timeouts {
            request_secs: parse_u64(lookup(REQUEST_TIMEOUT_VAR), DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(lookup(CONNECT_TIMEOUT_VAR), DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { api_base, api_host, fallback_user_id, timeouts })
    }

    /// Resolve a server-relative asset path against `api_host`.
    /// Absolute `http(s)` URLs are returned unchanged.
    #[must_use]
    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        format!("{}/{}", self.api_host, path.trim_start_matches('/'))
    }
}

fn parse_url(key: &str, raw: Option<String>, default: &str) -> Result<String, ConfigError> {
    let value = raw.unwrap_or_else(|| default.to_owned());
    let trimmed = value.trim().trim_end_matches('/');
    match reqwest::Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(trimmed.to_owned()),
        _ => Err(ConfigError::InvalidUrl { key: key.to_owned(), value }),
    }
}

/// Zero would make every request time out immediately, so it reads as unset.
fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

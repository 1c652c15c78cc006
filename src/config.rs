//! Configuration management for the JioSaavn gateway.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Every value has a default so the gateway starts
//! without any configuration at all.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults

use std::{env, path::PathBuf, str::FromStr, time::Duration};

use crate::saavn::retry::RetryPolicy;

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:3500";
pub const DEFAULT_SAAVN_BASE_URL: &str = "https://www.jiosaavn.com/api.php";

/// Loads environment variables from `.env` files.
///
/// Variables already present in the process environment are never
/// overwritten. A `.env` in the working directory is read first, then the
/// one in the platform-specific local data directory:
/// - Linux: `~/.local/share/saavn-gateway/.env`
/// - macOS: `~/Library/Application Support/saavn-gateway/.env`
/// - Windows: `%LOCALAPPDATA%/saavn-gateway/.env`
///
/// Missing files are not an error.
///
/// # Errors
///
/// Returns an error string if a `.env` file exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    match dotenv::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e.to_string()),
    }

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("saavn-gateway/.env");
    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn var_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Returns the address the HTTP server binds to (`SERVER_ADDRESS`).
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "0.0.0.0:3500"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the upstream API endpoint (`SAAVN_BASE_URL`).
///
/// Overridden in tests to point at a mock server.
pub fn saavn_base_url() -> String {
    env::var("SAAVN_BASE_URL").unwrap_or_else(|_| DEFAULT_SAAVN_BASE_URL.to_string())
}

/// Maximum number of upstream attempts per request (`UPSTREAM_RETRIES`).
pub fn upstream_retries() -> u32 {
    var_or("UPSTREAM_RETRIES", 3u32).max(1)
}

/// Base delay of the linear backoff between attempts (`UPSTREAM_BACKOFF_MS`).
pub fn upstream_backoff() -> Duration {
    Duration::from_millis(var_or("UPSTREAM_BACKOFF_MS", 1000u64))
}

/// Timeout of a single upstream attempt (`UPSTREAM_TIMEOUT_SECS`).
pub fn upstream_timeout() -> Duration {
    Duration::from_secs(var_or("UPSTREAM_TIMEOUT_SECS", 10u64))
}

/// Wall-clock budget of a whole inbound request (`REQUEST_TIMEOUT_SECS`).
///
/// When it is exceeded the in-flight handler is dropped and the client gets
/// a 504.
pub fn request_timeout() -> Duration {
    Duration::from_secs(var_or("REQUEST_TIMEOUT_SECS", 25u64))
}

/// Whether successful GET responses are memoized (`ENABLE_CACHE`).
pub fn cache_enabled() -> bool {
    env::var("ENABLE_CACHE")
        .map(|v| crate::utils::parse_bool(&v))
        .unwrap_or(false)
}

/// Lifetime of a cached response (`CACHE_TTL`, seconds).
pub fn cache_ttl() -> Duration {
    Duration::from_secs(var_or("CACHE_TTL", 3600u64))
}

/// Fully resolved runtime settings.
///
/// Built once at startup from the environment; tests construct it directly.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server_addr: String,
    pub base_url: String,
    pub retry: RetryPolicy,
    pub upstream_timeout: Duration,
    pub request_timeout: Duration,
    pub cache_enabled: bool,
    pub cache_ttl: Duration,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server_addr: server_addr(),
            base_url: saavn_base_url(),
            retry: RetryPolicy::new(upstream_retries(), upstream_backoff()),
            upstream_timeout: upstream_timeout(),
            request_timeout: request_timeout(),
            cache_enabled: cache_enabled(),
            cache_ttl: cache_ttl(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_addr: DEFAULT_SERVER_ADDRESS.to_string(),
            base_url: DEFAULT_SAAVN_BASE_URL.to_string(),
            retry: RetryPolicy::default(),
            upstream_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(25),
            cache_enabled: false,
            cache_ttl: Duration::from_secs(3600),
        }
    }
}

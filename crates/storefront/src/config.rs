//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SHOPFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `SHOPFRONT_PORT` - Listen port (default: 3000)
//! - `SHOPFRONT_DATA_DIR` - Directory for persisted shop state (default: `.shopfront`).
//!   Set to an empty string to keep state in memory only.
//! - `SHOPFRONT_LOG_FORMAT` - `json` for structured logs, anything else for text
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate, 0.0-1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Performance trace sample rate, 0.0-1.0 (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".shopfront";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory holding persisted shop state; `None` keeps state in memory
    pub data_dir: Option<PathBuf>,
    /// Emit logs as flattened JSON instead of text
    pub log_json: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced
    pub sentry_traces_sample_rate: f32,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_or_default(&lookup, "SHOPFRONT_HOST", IpAddr::from([127, 0, 0, 1]))?;
        let port = parse_or_default(&lookup, "SHOPFRONT_PORT", 3000_u16)?;

        let data_dir = match lookup("SHOPFRONT_DATA_DIR") {
            Some(dir) if dir.trim().is_empty() => None,
            Some(dir) => Some(PathBuf::from(dir)),
            None => Some(PathBuf::from(DEFAULT_DATA_DIR)),
        };

        let log_json = lookup("SHOPFRONT_LOG_FORMAT")
            .is_some_and(|format| format.trim().eq_ignore_ascii_case("json"));

        let sentry_sample_rate = parse_or_default(&lookup, "SENTRY_SAMPLE_RATE", 1.0_f32)?;
        validate_rate("SENTRY_SAMPLE_RATE", sentry_sample_rate)?;
        let sentry_traces_sample_rate =
            parse_or_default(&lookup, "SENTRY_TRACES_SAMPLE_RATE", 0.0_f32)?;
        validate_rate("SENTRY_TRACES_SAMPLE_RATE", sentry_traces_sample_rate)?;

        Ok(Self {
            host,
            port,
            data_dir,
            log_json,
            sentry_dsn: non_empty(lookup("SENTRY_DSN")),
            sentry_environment: non_empty(lookup("SENTRY_ENVIRONMENT")),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable if set, otherwise return the default.
fn parse_or_default<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}

fn validate_rate(key: &str, rate: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.socket_addr(), "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.data_dir, Some(PathBuf::from(".shopfront")));
        assert!(config.sentry_dsn.is_none());
        assert!((config.sentry_sample_rate - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("SHOPFRONT_HOST", "0.0.0.0"),
            ("SHOPFRONT_PORT", "8080"),
            ("SHOPFRONT_DATA_DIR", "/var/lib/shopfront"),
            ("SENTRY_DSN", "https://key@sentry.invalid/1"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr(), "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.data_dir, Some(PathBuf::from("/var/lib/shopfront")));
        assert!(config.sentry_dsn.is_some());
    }

    #[test]
    fn test_empty_data_dir_means_memory() {
        let config = config_from(&[("SHOPFRONT_DATA_DIR", "")]).unwrap();
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("SHOPFRONT_PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "SHOPFRONT_PORT"));
    }

    #[test]
    fn test_rate_out_of_range() {
        let err = config_from(&[("SENTRY_TRACES_SAMPLE_RATE", "1.5")]).unwrap_err();
        assert!(err.to_string().contains("SENTRY_TRACES_SAMPLE_RATE"));
    }

    #[test]
    fn test_log_format() {
        assert!(!config_from(&[]).unwrap().log_json);
        assert!(config_from(&[("SHOPFRONT_LOG_FORMAT", "JSON")]).unwrap().log_json);
        assert!(!config_from(&[("SHOPFRONT_LOG_FORMAT", "text")]).unwrap().log_json);
    }

    #[test]
    fn test_blank_sentry_dsn_ignored() {
        let config = config_from(&[("SENTRY_DSN", "  ")]).unwrap();
        assert!(config.sentry_dsn.is_none());
    }
}

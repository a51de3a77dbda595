//! Runtime configuration for the relay transport.
//!
//! The site's own identity (name, emails, WhatsApp, socials) is static and lives in
//! [`crate::site::SiteConfig`]. This module only covers the knobs an operator may
//! want to change without rebuilding: where the relay lives, how long to wait for it,
//! and how chatty the logs are.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default relay host.
pub const DEFAULT_RELAY_BASE_URL: &str = "https://formsubmit.co";

/// Configuration for the relay transport and logging.
#[derive(Debug, Clone)]
pub struct Config {
    /// Relay base URL; the destination address is appended as the last path segment
    pub relay_base_url: String,

    /// HTTP request timeout in seconds (default: 0, meaning no timeout)
    pub request_timeout_secs: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `RELAY_BASE_URL`: relay host (default: `https://formsubmit.co`)
    /// - `RELAY_TIMEOUT_SECS`: HTTP timeout in seconds, 0 disables it (default: 0)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout, which carries MCP traffic
        let _ = dotenvy::dotenv();

        let relay_base_url =
            env::var("RELAY_BASE_URL").unwrap_or_else(|_| DEFAULT_RELAY_BASE_URL.to_string());

        if !relay_base_url.starts_with("http://") && !relay_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "RELAY_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout_secs = Self::parse_env_u64("RELAY_TIMEOUT_SECS", 0)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            relay_base_url,
            request_timeout_secs,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            relay_base_url: DEFAULT_RELAY_BASE_URL.to_string(),
            request_timeout_secs: 0,
            log_level: "error".to_string(),
        }
    }
}

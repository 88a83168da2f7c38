//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// Configuration is read once at startup and never mutated afterwards; each
/// component receives its values through its constructor.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Page size used for the cached default listing page
    pub default_page_size: u32,
    /// Time-to-live in seconds for cached pagination envelopes
    pub cache_ttl_secs: u64,
    /// Background sweep task interval in seconds
    pub sweep_interval_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `DEFAULT_PAGE_SIZE` - Cached default page size (default: 6)
    /// - `CACHE_TTL_SECS` - Envelope TTL in seconds (default: 1800)
    /// - `SWEEP_INTERVAL_SECS` - Sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            default_page_size: env::var("DEFAULT_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(6),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1800),
            sweep_interval_secs: env::var("SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 5000,
            default_page_size: 6,
            cache_ttl_secs: 1800,
            sweep_interval_secs: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.default_page_size, 6);
        assert_eq!(config.cache_ttl_secs, 1800);
        assert_eq!(config.sweep_interval_secs, 60);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("DEFAULT_PAGE_SIZE");
        env::remove_var("CACHE_TTL_SECS");
        env::remove_var("SWEEP_INTERVAL_SECS");

        let config = Config::from_env();
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.default_page_size, 6);
        assert_eq!(config.cache_ttl_secs, 1800);
        assert_eq!(config.sweep_interval_secs, 60);
    }
}

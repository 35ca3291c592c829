//! Service configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Lift pass pricing configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind address
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// PostgreSQL connection string; in-memory store when unset
    pub database_url: Option<String>,

    /// Max pooled database connections
    pub database_max_connections: u32,

    /// TTL for cached base prices and holidays
    pub cache_ttl: Duration,

    /// Emit JSON log lines
    pub log_json: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        Ok(AppConfig {
            host: var("HOST", "0.0.0.0"),

            port: var("PORT", "4567")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,

            database_url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),

            database_max_connections: var("DATABASE_MAX_CONNECTIONS", "5")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,

            cache_ttl: var("CACHE_TTL_SECS", "300")
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidValue("CACHE_TTL_SECS".to_string()))?,

            log_json: var("LOG_JSON", "false")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("LOG_JSON".to_string()))?,
        })
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("HOST".to_string()))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 4567);
        assert_eq!(config.database_url, None);
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.cache_ttl, Duration::from_secs(300));
        assert!(!config.log_json);
        assert_eq!(config.bind_addr().unwrap().port(), 4567);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_URL", "postgres://localhost/lift"),
            ("CACHE_TTL_SECS", "10"),
            ("LOG_JSON", "true"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/lift"));
        assert_eq!(config.cache_ttl, Duration::from_secs(10));
        assert!(config.log_json);
    }

    #[test]
    fn test_empty_database_url_means_in_memory() {
        let config = load(&[("DATABASE_URL", "")]).unwrap();
        assert_eq!(config.database_url, None);
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}

//! Server configuration loaded from environment variables.
//!
//! Every setting has a default so the demo starts with zero configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use biglove_shared::constants::{APP_NAME, DEFAULT_HTTP_PORT};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address for the HTTP API.
    /// Env: `HTTP_ADDR`, or `PORT` to listen on `0.0.0.0:<PORT>`.
    /// Default: `0.0.0.0:3000`
    pub http_addr: SocketAddr,

    /// JSON seed file replacing the built-in demo data.
    /// Env: `FIXTURE_PATH`
    /// Default: none (built-in English fixture).
    pub fixture_path: Option<PathBuf>,

    /// Name shown in the startup banner.
    /// Env: `INSTANCE_NAME`
    /// Default: `"Big Love Forum"`
    pub instance_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: ([0, 0, 0, 0], DEFAULT_HTTP_PORT).into(),
            fixture_path: None,
            instance_name: APP_NAME.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(addr) = var("HTTP_ADDR") {
            match addr.parse::<SocketAddr>() {
                Ok(parsed) => config.http_addr = parsed,
                Err(_) => tracing::warn!(value = %addr, "Invalid HTTP_ADDR, using default"),
            }
        } else if let Some(port) = var("PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => config.http_addr.set_port(port),
                Err(_) => tracing::warn!(value = %port, "Invalid PORT, using default"),
            }
        }

        if let Some(path) = var("FIXTURE_PATH") {
            if !path.is_empty() {
                config.fixture_path = Some(PathBuf::from(path));
            }
        }

        if let Some(name) = var("INSTANCE_NAME") {
            config.instance_name = name;
        }

        // RUST_LOG is read by tracing-subscriber's EnvFilter directly.

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.http_addr, ([0, 0, 0, 0], 3000).into());
        assert!(config.fixture_path.is_none());
        assert_eq!(config.instance_name, "Big Love Forum");
    }

    #[test]
    fn test_port_only() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "8081")]));
        assert_eq!(config.http_addr, ([0, 0, 0, 0], 8081).into());
    }

    #[test]
    fn test_http_addr_wins_over_port() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("HTTP_ADDR", "127.0.0.1:9000"),
            ("PORT", "8081"),
        ]));
        assert_eq!(config.http_addr, ([127, 0, 0, 1], 9000).into());
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")]));
        assert_eq!(config.http_addr.port(), 3000);

        let config = ServerConfig::from_lookup(lookup(&[("HTTP_ADDR", "nowhere")]));
        assert_eq!(config.http_addr.port(), 3000);
    }

    #[test]
    fn test_fixture_path() {
        let config = ServerConfig::from_lookup(lookup(&[("FIXTURE_PATH", "/srv/seed.zh.json")]));
        assert_eq!(config.fixture_path, Some(PathBuf::from("/srv/seed.zh.json")));

        let config = ServerConfig::from_lookup(lookup(&[("FIXTURE_PATH", "")]));
        assert!(config.fixture_path.is_none());
    }
}

//! Application configuration

use std::net::SocketAddr;

use common::error::{Error, Result};
use config_lookup::{EnvSource, ProcessEnv};

/// Default listen host
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default listen port, used when `PORT` is unset or unparsable
pub const DEFAULT_PORT: u16 = 5000;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Debug logging enabled
    pub debug: bool,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: false,
            log_format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Create a new configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_source(&ProcessEnv::new())
    }

    /// Create a new configuration from any environment mapping
    pub fn from_source(env: &dyn EnvSource) -> Self {
        Self {
            host: env
                .get("HOST")
                .filter(|h| !h.is_empty())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: env
                .get("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            debug: env.get("DEBUG").map(|v| v == "1").unwrap_or(false),
            log_format: match env.get("LOG_FORMAT").as_deref() {
                Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        }
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// Socket address to listen on
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        // Bracket bare IPv6 hosts so "::" parses
        let addr = if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        };
        addr.parse()
            .map_err(|e| Error::Configuration(format!("invalid listen address {}: {}", addr, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config_lookup::MapEnv;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_source(&MapEnv::new());
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn test_reads_environment() {
        let env = MapEnv::new()
            .with("HOST", "127.0.0.1")
            .with("PORT", "8080")
            .with("DEBUG", "1")
            .with("LOG_FORMAT", "JSON");
        let config = AppConfig::from_source(&env);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.debug);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = AppConfig::from_source(&MapEnv::new().with("PORT", "eighty"));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_overrides_win() {
        let config = AppConfig::from_source(&MapEnv::new().with("PORT", "8080"))
            .with_overrides(Some("::1".to_string()), Some(9000));
        assert_eq!(config.socket_addr().unwrap().to_string(), "[::1]:9000");
    }

    #[test]
    fn test_invalid_host_is_configuration_error() {
        let config = AppConfig::default().with_overrides(Some("not a host".to_string()), None);
        assert!(matches!(config.socket_addr(), Err(Error::Configuration(_))));
    }
}

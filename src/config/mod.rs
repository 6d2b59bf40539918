// Configuration module entry point
// Loads typed configuration with built-in defaults matching the mock's
// fixed contract (localhost:8000); an optional config file or SERVER_*
// environment variables can override them during development.

mod types;

use std::net::{SocketAddr, ToSocketAddrs};

// Re-export public types
pub use types::{Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig};

impl Config {
    /// Load configuration from the default "config.toml" location.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "localhost")?
            .set_default("server.port", 8000)?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .build()?;

        settings.try_deserialize()
    }

    /// Resolve the configured host/port to a bindable socket address.
    ///
    /// Goes through `ToSocketAddrs` so hostnames like `localhost`
    /// resolve instead of failing a literal parse.
    pub fn socket_addr(&self) -> std::io::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.to_socket_addrs()?.next().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::AddrNotAvailable,
                format!("no address resolved for {addr}"),
            )
        })
    }

    /// The analyze endpoint URL as printed in the startup banner.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        format!(
            "http://{}:{}{}",
            self.server.host,
            self.server.port,
            crate::handler::ANALYZE_PATH
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_mock_contract() {
        let cfg = Config::load_from("no_such_config_file").unwrap();
        assert_eq!(cfg.server.host, "localhost");
        assert_eq!(cfg.server.port, 8000);
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.http.max_body_size, 1_048_576);
    }

    #[test]
    fn test_localhost_resolves_to_loopback() {
        let cfg = Config::load_from("no_such_config_file").unwrap();
        let addr = cfg.socket_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 8000);
    }

    #[test]
    fn test_endpoint_url_points_at_analyze_path() {
        let cfg = Config::load_from("no_such_config_file").unwrap();
        assert_eq!(
            cfg.endpoint_url(),
            "http://localhost:8000/scanner/quick-analyze/"
        );
    }
}

//! Configuration loaded from environment variables.

use std::env;
use std::net::{IpAddr, SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use region_core::DEFAULT_GEOJSON_PATH;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8050;

/// Map server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Region boundary dataset. Not configurable.
    pub geojson_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `HOST` | Bind host | `127.0.0.1` |
    /// | `PORT` | Bind port, usually set by the hosting platform | `8050` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let port = match port {
            Some(port) => port.trim().parse().map_err(|_| ConfigError::InvalidPort(port))?,
            None => DEFAULT_PORT,
        };

        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let addr = resolve_addr(host.trim(), port).ok_or(ConfigError::InvalidAddr(host))?;

        Ok(Self {
            addr,
            geojson_path: PathBuf::from(DEFAULT_GEOJSON_PATH),
        })
    }
}

/// Bind address for `host`, which may be an IPv4/IPv6 literal or a hostname.
fn resolve_addr(host: &str, port: u16) -> Option<SocketAddr> {
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Some(SocketAddr::new(ip, port));
    }
    (host, port).to_socket_addrs().ok()?.next()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid HOST: {0}")]
    InvalidAddr(String),

    #[error("Invalid PORT: {0}")]
    InvalidPort(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config.addr, "127.0.0.1:8050".parse::<SocketAddr>().unwrap());
        assert_eq!(config.geojson_path, PathBuf::from("polska-wojewodztwa.geojson"));
    }

    #[test]
    fn test_host_and_port() {
        let config = Config::from_vars(Some("0.0.0.0".into()), Some("10000".into())).unwrap();
        assert_eq!(config.addr, "0.0.0.0:10000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_ipv6_host() {
        let config = Config::from_vars(Some("::".into()), None).unwrap();
        assert_eq!(config.addr, "[::]:8050".parse::<SocketAddr>().unwrap());

        let config = Config::from_vars(Some("::1".into()), Some("9000".into())).unwrap();
        assert_eq!(config.addr, "[::1]:9000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_hostname_host() {
        let config = Config::from_vars(Some("localhost".into()), None).unwrap();
        assert!(config.addr.ip().is_loopback());
        assert_eq!(config.addr.port(), 8050);
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_vars(None, Some("http".into())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(p) if p == "http"));

        let err = Config::from_vars(None, Some("70000".into())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }

    #[test]
    fn test_invalid_host() {
        let err = Config::from_vars(Some("not a host".into()), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr(_)));
    }
}

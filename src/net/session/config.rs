#![deny(missing_docs)]

use std::net::{Ipv6Addr, SocketAddr};

use serde::Deserialize;
use tokio::net::lookup_host;

use crate::consts::{DEFAULT_HOST, DEFAULT_PORT};

use super::SessionError;

/// A struct that contains the configuration for a remote control session.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SessionConfig {
    /// The host of the router.
    pub host: String,
    /// The port of the router.
    pub port: u16,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl SessionConfig {
    /// Create a new session config. Neither value is checked.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// The `host:port` address of the session target.
    pub fn addr(&self) -> String {
        // IPv6 literals need brackets to be told apart from the port.
        let ip = self.host.split('%').next().unwrap_or_default();
        if ip.parse::<Ipv6Addr>().is_ok() {
            return format!("[{}]:{}", self.host, self.port);
        }
        format!("{}:{}", self.host, self.port)
    }

    /// Resolve the session target into socket addresses.
    ///
    /// This only performs a lookup; no connection is opened.
    pub async fn resolve(&self) -> Result<Vec<SocketAddr>, SessionError> {
        log::debug!("Resolving session target: {}", self.addr());
        let addrs: Vec<SocketAddr> = lookup_host((self.host.as_str(), self.port))
            .await?
            .collect();
        if addrs.is_empty() {
            return Err(SessionError::NoAddress(self.addr()));
        }
        log::debug!("Resolved {} to {:?}", self.addr(), addrs);
        Ok(addrs)
    }
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr, SocketAddr};

    use super::SessionConfig;
    use crate::net::session::SessionError;

    #[test]
    fn test_new_stores_values() {
        let config = SessionConfig::new("127.0.0.1", 7657);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 7657);
    }

    #[test]
    fn test_new_accepts_empty_values() {
        let config = SessionConfig::new("", 0);
        assert_eq!(config.host, "");
        assert_eq!(config.port, 0);
    }

    #[test]
    fn test_fields_are_mutable() {
        let mut config = SessionConfig::new("127.0.0.1", 7657);
        config.host = "router.local".to_string();
        assert_eq!(config.host, "router.local");
        assert_eq!(config.port, 7657);

        config.port = 7650;
        assert_eq!(config.port, 7650);
        assert_eq!(config.addr(), "router.local:7650");
    }

    #[test]
    fn test_default() {
        let config = SessionConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 7650);
    }

    #[tokio::test]
    async fn test_resolve_ip_literal() {
        let config = SessionConfig::new("127.0.0.1", 7657);
        let addrs = config.resolve().await.unwrap();
        assert_eq!(
            addrs,
            vec![SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 7657)]
        );
    }

    #[tokio::test]
    async fn test_resolve_ipv6_literal() {
        let config = SessionConfig::new("::1", 7650);
        let addrs = config.resolve().await.unwrap();
        assert_eq!(config.addr(), "[::1]:7650");
        assert_eq!(addrs, vec![config.addr().parse::<SocketAddr>().unwrap()]);
    }

    #[test]
    fn test_addr_ipv6_with_scope_id() {
        let config = SessionConfig::new("fe80::1%lo", 7650);
        assert_eq!(config.addr(), "[fe80::1%lo]:7650");
    }

    #[tokio::test]
    async fn test_resolve_empty_host() {
        let config = SessionConfig::new("", 0);
        let err = config.resolve().await.unwrap_err();
        assert!(matches!(err, SessionError::Resolve(_)));
    }

    // A successful lookup with zero results can't be produced portably, so
    // NoAddress is only checked for the address it reports.
    #[test]
    fn test_no_address_message() {
        let config = SessionConfig::new("fe80::1%lo", 7650);
        let err = SessionError::NoAddress(config.addr());
        assert_eq!(err.to_string(), "No address found for [fe80::1%lo]:7650");
    }
}

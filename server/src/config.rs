//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid HOST '{0}': expected an IP address")]
    InvalidHost(String),
    #[error("invalid PORT '{0}': expected an integer in 1..=65535")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory served at `/public` (NGO and project images).
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `SITE_ASSETS_DIR`: default `<server crate>/../public`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `HOST` or `PORT` is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let host = match lookup("HOST") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => DEFAULT_HOST,
        };
        let port = match lookup("PORT") {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };
        let assets_dir =
            lookup("SITE_ASSETS_DIR").map_or_else(default_assets_dir, PathBuf::from);

        Ok(Self {
            host,
            port,
            assets_dir,
        })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(raw.to_owned())),
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

//! Host configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Errors produced while reading host configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    /// `HOST` is set but is not an IP address.
    #[error("invalid HOST: {0}")]
    InvalidHost(String),

    /// The Leptos site configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `HOST`: default `0.0.0.0`
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::parse(std::env::var("PORT").ok().as_deref(), std::env::var("HOST").ok().as_deref())
    }

    fn parse(port: Option<&str>, host: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
        };
        let host = match host.map(str::trim) {
            None | Some("") => DEFAULT_HOST,
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost(raw.to_owned()))?,
        };
        Ok(Self { host, port })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

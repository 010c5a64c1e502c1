//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {value}")]
    InvalidPort { value: String },
    #[error("invalid BIND_ADDR: {value}")]
    InvalidBindAddr { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Static site root served at `/`.
    pub website_dir: PathBuf,
    /// Compiled WASM bundle served at `/pkg`.
    pub pkg_dir: PathBuf,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `WEBSITE_DIR`: default `website/` at the workspace root
    /// - `PKG_DIR`: default `<WEBSITE_DIR>/pkg`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `PORT` or `BIND_ADDR` is set but does not
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort { value: raw })?,
            Err(_) => DEFAULT_PORT,
        };
        let bind_addr = match std::env::var("BIND_ADDR") {
            Ok(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidBindAddr { value: raw })?,
            Err(_) => DEFAULT_BIND_ADDR,
        };
        let website_dir = std::env::var("WEBSITE_DIR").map_or_else(|_| default_website_dir(), PathBuf::from);
        let pkg_dir = std::env::var("PKG_DIR").map_or_else(|_| website_dir.join("pkg"), PathBuf::from);

        Ok(Self { bind_addr, port, website_dir, pkg_dir })
    }

    /// Config serving `website_dir` on an ephemeral loopback port.
    #[must_use]
    pub fn local(website_dir: PathBuf) -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            pkg_dir: website_dir.join("pkg"),
            website_dir,
        }
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

/// `website/` next to the workspace root.
#[must_use]
pub fn default_website_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../website")
}

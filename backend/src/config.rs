//! Server settings loaded via OrthoConfig.
//!
//! Values layer from defaults, configuration files, `PETSTORE_*` environment
//! variables and command-line flags. Unset values fall back to the
//! historical `0.0.0.0:8080` listener.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `host` is not an IP address.
    #[error("invalid bind host '{host}': {source}")]
    InvalidHost {
        /// Offending value.
        host: String,
        /// Parser failure.
        #[source]
        source: std::net::AddrParseError,
    },
    /// `workers` was set to zero.
    #[error("worker count must be at least 1")]
    ZeroWorkers,
}

/// Configuration values controlling the HTTP listener.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PETSTORE")]
pub struct ServerSettings {
    /// IP address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Worker thread count; Actix picks one per physical core when unset.
    pub workers: Option<usize>,
}

impl ServerSettings {
    /// Return the configured host, falling back to the default.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Socket address the listener binds to.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidHost`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.host();
        let ip: IpAddr = host.parse().map_err(|source| ConfigError::InvalidHost {
            host: host.to_owned(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }

    /// Validated worker count, if one was configured.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroWorkers`] when set to zero.
    pub fn workers(&self) -> Result<Option<usize>, ConfigError> {
        match self.workers {
            Some(0) => Err(ConfigError::ZeroWorkers),
            other => Ok(other),
        }
    }
}

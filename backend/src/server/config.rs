//! HTTP server configuration object.

use std::net::SocketAddr;

use backend::config::{ConfigError, ServerSettings};

/// Listener configuration derived from validated [`ServerSettings`].
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) workers: Option<usize>,
}

impl ServerConfig {
    /// Validate loaded settings into a listener configuration.
    ///
    /// # Errors
    /// Propagates [`ConfigError`] for an unparsable host or a zero worker
    /// count.
    pub fn from_settings(settings: &ServerSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: settings.bind_addr()?,
            workers: settings.workers()?,
        })
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

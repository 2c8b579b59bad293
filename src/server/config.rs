//! HTTP server configuration object.

use std::net::SocketAddr;

use crate::outbound::persistence::StoreConfig;

/// Settings for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: StoreConfig,
}

impl ServerConfig {
    /// Construct a server configuration from its parts.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, store: StoreConfig) -> Self {
        Self { bind_addr, store }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

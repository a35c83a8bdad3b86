//! Listener settings loaded via OrthoConfig.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 18080;

/// Where the HTTP listener binds, read from CLI flags and `CLASSIFIEDS_*`
/// environment variables.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CLASSIFIEDS")]
pub struct ServerSettings {
    /// Interface address to bind, e.g. `127.0.0.1`.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
}

impl ServerSettings {
    /// Resolve the configured host and port into a socket address.
    ///
    /// # Errors
    /// Returns [`std::net::AddrParseError`] when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        let host = match self.host.as_deref() {
            Some(raw) => raw.parse()?,
            None => DEFAULT_HOST,
        };
        Ok(SocketAddr::new(host, self.port.unwrap_or(DEFAULT_PORT)))
    }
}

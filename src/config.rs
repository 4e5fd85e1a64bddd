use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// The catalog always listens on this port; front-ends are built against it.
pub const PORT: u16 = 8081;

const DEFAULT_LOG_FILTER: &str = "info,catalog_service=debug";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_filter: String,
}

impl Config {
    /// Only the log filter comes from the environment; the bind address is fixed.
    pub fn from_env() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: PORT,
            log_filter: std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

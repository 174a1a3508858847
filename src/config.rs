use std::net::SocketAddr;

const DEFAULT_PORT: u16 = 8000;

/// Listener settings, read from the process environment once at startup.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub port: u16,
}

impl Settings {
    /// `PORT` unset or unparsable falls back to 8000.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { port }
    }

    /// Listens on all interfaces.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

//! Development server configuration.
//!
//! Resolves the loaded `SandboxConfig` into a bindable socket address.

use crate::cli::DevArgs;
use crate::config::{parse_host, SandboxConfig};
use crate::error::{ConfigError, Result};
use std::net::{IpAddr, SocketAddr};

/// Development server configuration.
#[derive(Debug, Clone)]
pub struct DevConfig {
    /// Loaded and validated project configuration
    pub base: SandboxConfig,

    /// Server socket address (IP + port)
    pub addr: SocketAddr,

    /// Open browser automatically on start
    pub open: bool,
}

impl DevConfig {
    /// Create DevConfig from CLI arguments.
    ///
    /// Loads configuration (CLI > env > file > defaults), validates it and
    /// picks the first free port starting at the configured one.
    pub fn from_args(args: &DevArgs) -> Result<Self> {
        let base = SandboxConfig::load(&args.overrides())?;
        Self::from_config(base)
    }

    /// Create DevConfig from an already loaded configuration.
    pub fn from_config(base: SandboxConfig) -> Result<Self> {
        base.validate()?;

        let ip = parse_host(&base.server.host)?;
        let addr = Self::find_available_port(ip, base.server.port)?;

        Ok(Self {
            open: base.server.open,
            base,
            addr,
        })
    }

    /// Find an available port starting from the requested port.
    ///
    /// Tries the requested port first, then the next ten.
    fn find_available_port(ip: IpAddr, requested_port: u16) -> Result<SocketAddr> {
        use std::net::TcpListener;

        if requested_port < 1024 {
            crate::ui::warning(&format!(
                "Port {} is in privileged range, may require root access",
                requested_port
            ));
        }

        let addr = SocketAddr::new(ip, requested_port);
        if TcpListener::bind(addr).is_ok() {
            return Ok(addr);
        }

        for offset in 1..=10 {
            let port = requested_port.saturating_add(offset);
            let addr = SocketAddr::new(ip, port);
            if TcpListener::bind(addr).is_ok() {
                crate::ui::warning(&format!(
                    "Port {} is busy, using port {} instead",
                    requested_port, port
                ));
                return Ok(addr);
            }
        }

        Err(ConfigError::InvalidValue {
            field: "server.port".to_string(),
            value: requested_port.to_string(),
            hint: format!(
                "Ports {}-{} are all in use. Try a different port range.",
                requested_port,
                requested_port.saturating_add(10)
            ),
        }
        .into())
    }

    /// Get the server URL as a string.
    pub fn server_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// URL opened in the browser when `open` is set.
    pub fn open_url(&self) -> String {
        format!("{}{}", self.server_url(), self.base.server.open_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use std::path::PathBuf;

    fn localhost() -> IpAddr {
        IpAddr::from([127, 0, 0, 1])
    }

    fn config(addr: &str) -> DevConfig {
        DevConfig {
            base: SandboxConfig {
                root: PathBuf::from("/work/project"),
                ..SandboxConfig::default()
            },
            addr: addr.parse().unwrap(),
            open: false,
        }
    }

    #[test]
    fn test_find_available_port_success() {
        let listener = match TcpListener::bind(("127.0.0.1", 0)) {
            Ok(listener) => listener,
            Err(err) => {
                eprintln!(
                    "Skipping test_find_available_port_success: unable to bind socket ({})",
                    err
                );
                return;
            }
        };

        let start_port = listener.local_addr().unwrap().port();
        drop(listener);

        let addr = DevConfig::find_available_port(localhost(), start_port).expect("should find port");
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert!(addr.port() >= start_port);
    }

    #[test]
    fn test_find_available_port_skips_busy_port() {
        let listener = match TcpListener::bind(("127.0.0.1", 0)) {
            Ok(listener) => listener,
            Err(_) => return,
        };
        let busy_port = listener.local_addr().unwrap().port();

        if let Ok(addr) = DevConfig::find_available_port(localhost(), busy_port) {
            assert_ne!(addr.port(), busy_port);
        }
    }

    #[test]
    fn test_server_and_open_urls() {
        let mut config = config("127.0.0.1:8030");
        assert_eq!(config.server_url(), "http://127.0.0.1:8030");
        assert_eq!(config.open_url(), "http://127.0.0.1:8030/");

        config.base.server.open_path = "/counter/".to_string();
        assert_eq!(config.open_url(), "http://127.0.0.1:8030/counter/");
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let mut base = SandboxConfig {
            root: PathBuf::from("/work/project"),
            ..SandboxConfig::default()
        };
        base.server.port = 0;
        assert!(DevConfig::from_config(base).is_err());
    }
}

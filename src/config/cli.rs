use clap::Parser;
use std::net::SocketAddr;

use crate::utils::error::{Result, WatchError};

#[derive(Debug, Clone, Parser)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Listen port; each binary picks its own default
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ServerArgs {
    pub fn bind_addr(&self, default_port: u16) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port.unwrap_or(default_port));
        addr.parse().map_err(|e| WatchError::Validation {
            field: "host".to_string(),
            value: addr.clone(),
            reason: format!("Invalid bind address: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr_uses_default_port() {
        let args = ServerArgs::parse_from(["property-watch", "--host", "0.0.0.0"]);
        assert_eq!(args.bind_addr(8000).unwrap().port(), 8000);
    }

    #[test]
    fn test_bind_addr_explicit_port() {
        let args = ServerArgs::parse_from(["property-watch", "--host", "127.0.0.1", "--port", "9100"]);
        assert_eq!(args.bind_addr(8000).unwrap().to_string(), "127.0.0.1:9100");
    }

    #[test]
    fn test_bind_addr_rejects_hostnames() {
        let args = ServerArgs::parse_from(["property-watch", "--host", "not a host"]);
        assert!(args.bind_addr(8000).is_err());
    }
}

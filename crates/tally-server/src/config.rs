//! Server configuration, built from CLI arguments with environment
//! fallbacks.

use std::net::SocketAddr;

use clap::Parser;

const DEFAULT_BIND: &str = "127.0.0.1:8000";

/// Command-line arguments for the Tally server.
#[derive(Debug, Parser)]
#[command(name = "tally-server", about = "Receipt points HTTP service")]
pub struct CliArgs {
    /// Socket address to listen on.
    #[arg(long, env = "TALLY_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,
}

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
}

impl ServerConfig {
    pub fn from_args(args: CliArgs) -> Self {
        Self {
            bind_address: args.bind,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND.parse().expect("default bind address is valid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_address() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address.port(), 8000);
    }

    #[test]
    fn test_bind_from_cli() {
        let args = CliArgs::parse_from(["tally-server", "--bind", "0.0.0.0:9000"]);
        let config = ServerConfig::from_args(args);
        assert_eq!(config.bind_address, "0.0.0.0:9000".parse().unwrap());
    }
}

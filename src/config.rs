use std::{net::SocketAddr, path::PathBuf};

use clap::{Parser, ValueEnum};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// Newline-delimited JSON-RPC over stdin/stdout
    Stdio,
    /// JSON-RPC over plain HTTP at POST /mcp
    Http,
    /// JSON-RPC over HTTPS at POST /mcp (requires --cert and --key)
    Https,
}

/// Favorite Colors MCP Server
///
/// A Model Context Protocol server for managing favorite colors.
#[derive(Debug, Parser)]
#[command(name = "favorite-colors-mcp", version, about, long_about = None)]
#[command(after_help = "Available tools: add_color, get_colors, remove_color, clear_colors")]
pub struct Cli {
    /// Transport to serve MCP over
    #[arg(long, value_enum, env = "MCP_TRANSPORT", default_value_t = Transport::Stdio)]
    pub transport: Transport,

    /// Address to bind for HTTP/HTTPS transport
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind_addr: String,

    /// Port for HTTP/HTTPS transport (e.g. 8080 or :8080)
    #[arg(long, env = "BIND_PORT", default_value = "8080", value_parser = parse_port)]
    pub port: u16,

    /// TLS certificate file (PEM) for HTTPS
    #[arg(long, env = "TLS_CERT", value_name = "FILE")]
    pub cert: Option<PathBuf>,

    /// TLS private key file (PEM) for HTTPS
    #[arg(long, env = "TLS_KEY", value_name = "FILE")]
    pub key: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsPaths {
    pub cert: PathBuf,
    pub key: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub transport: Transport,
    pub bind_addr: String,
    pub bind_port: u16,
    pub tls: Option<TlsPaths>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HTTPS transport requires both --cert and --key")]
    MissingTlsMaterial,
    #[error("invalid bind address or port")]
    InvalidSocket,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let tls = match (cli.transport, cli.cert, cli.key) {
            (Transport::Https, Some(cert), Some(key)) => Some(TlsPaths { cert, key }),
            (Transport::Https, _, _) => return Err(ConfigError::MissingTlsMaterial),
            _ => None,
        };

        let config = Self {
            transport: cli.transport,
            bind_addr: cli.bind_addr,
            bind_port: cli.port,
            tls,
        };

        if config.transport != Transport::Stdio {
            config.bind_socket()?;
        }
        Ok(config)
    }

    pub fn bind_socket(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, self.bind_port)
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidSocket)
    }

    pub fn scheme(&self) -> &'static str {
        match self.transport {
            Transport::Https => "https",
            Transport::Stdio | Transport::Http => "http",
        }
    }

    pub fn mcp_url(&self) -> String {
        format!("{}://localhost:{}/mcp", self.scheme(), self.bind_port)
    }
}

fn parse_port(value: &str) -> Result<u16, String> {
    value
        .trim()
        .trim_start_matches(':')
        .parse::<u16>()
        .map_err(|_| format!("`{value}` is not a valid port"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("favorite-colors-mcp").chain(args.iter().copied()))
            .expect("cli should parse")
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_defaults() {
        let config = Config::from_cli(parse(&[])).expect("config should build");

        assert_eq!(config.transport, Transport::Stdio);
        assert_eq!(config.bind_addr, "0.0.0.0");
        assert_eq!(config.bind_port, 8080);
        assert_eq!(config.tls, None);
    }

    #[test]
    fn port_accepts_leading_colon() {
        let cli = parse(&["--transport", "http", "--port", ":9000"]);
        let config = Config::from_cli(cli).expect("config should build");

        assert_eq!(config.bind_port, 9000);
        assert_eq!(config.mcp_url(), "http://localhost:9000/mcp");
    }

    #[test]
    fn invalid_transport_is_rejected() {
        let result = Cli::try_parse_from(["favorite-colors-mcp", "--transport", "carrier-pigeon"]);
        assert!(result.is_err());
    }

    #[test]
    fn https_requires_cert_and_key() {
        let cli = parse(&["--transport", "https", "--cert", "server.crt"]);

        let err = Config::from_cli(cli).expect_err("expected missing tls error");
        assert!(matches!(err, ConfigError::MissingTlsMaterial));
    }

    #[test]
    fn https_with_tls_material_builds() {
        let cli = parse(&[
            "--transport",
            "https",
            "--port",
            "8443",
            "--cert",
            "server.crt",
            "--key",
            "server.key",
        ]);

        let config = Config::from_cli(cli).expect("config should build");
        assert_eq!(
            config.tls,
            Some(TlsPaths {
                cert: PathBuf::from("server.crt"),
                key: PathBuf::from("server.key"),
            })
        );
        assert_eq!(config.mcp_url(), "https://localhost:8443/mcp");
    }

    #[test]
    fn invalid_bind_addr_fails_for_http() {
        let cli = parse(&["--transport", "http", "--bind-addr", "not an address"]);

        let err = Config::from_cli(cli).expect_err("expected invalid socket error");
        assert!(matches!(err, ConfigError::InvalidSocket));
    }
}

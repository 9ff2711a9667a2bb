//! Command line configuration for the three binaries.
//!
//! Every flag has a fixed default, so running a binary with no arguments
//! reproduces the stock deployment: server on 8080, gateway on 8081.

use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_GATEWAY_ADDR: &str = "0.0.0.0:8081";
pub const DEFAULT_STORE_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_GATEWAY_TIMEOUT_MS: u64 = 1_000;
pub const DEFAULT_CLIENT_TIMEOUT_MS: u64 = 5_000;

#[derive(Parser, Debug)]
#[command(author, version, about = "In-memory message store RPC server", long_about = None)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(short, long, default_value_t = DEFAULT_SERVER_ADDR.to_string())]
    pub listen: String,
}

/// How the gateway turns RPC errors into HTTP statuses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ErrorMapping {
    /// Every RPC error becomes 500
    #[default]
    Collapsed,
    /// 400 / 404 / 504 / 502 by error kind
    Typed,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "HTTP/JSON gateway for the message store", long_about = None)]
pub struct GatewayConfig {
    /// Address to serve HTTP on
    #[arg(short, long, default_value_t = DEFAULT_GATEWAY_ADDR.to_string())]
    pub listen: String,
    #[command(flatten)]
    pub store: StoreArgs,
    #[arg(long, value_enum, default_value_t = ErrorMapping::Collapsed)]
    pub error_mapping: ErrorMapping,
}

#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// Address of the store service
    #[arg(long = "store", default_value_t = DEFAULT_STORE_ADDR.to_string())]
    pub addr: String,
    /// Per-call timeout in milliseconds
    #[arg(long = "timeout-ms")]
    pub timeout_ms: Option<u64>,
}

impl StoreArgs {
    pub fn timeout_or(&self, default_ms: u64) -> Duration {
        Duration::from_millis(self.timeout_ms.unwrap_or(default_ms))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Command line client for the message store", long_about = None)]
pub struct ClientConfig {
    #[command(flatten)]
    pub store: StoreArgs,
    #[command(subcommand)]
    pub command: Option<ClientCommand>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ClientCommand {
    /// Store a value under a key
    Submit { key: String, value: String },
    /// Read the value stored under a key
    Get { key: String },
    /// Submit the sample N250 record and read it back
    Demo,
}

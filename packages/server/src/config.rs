//! Server configuration (command line and environment).

use clap::Parser;

/// Room-based WebSocket chat relay
#[derive(Debug, Clone, Parser)]
#[command(name = "heya-server", version, about)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "HEYA_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Default log level when RUST_LOG is not set
    #[arg(long, env = "HEYA_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    /// `host:port` string suitable for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

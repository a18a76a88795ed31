//! Server configuration from command-line flags and environment variables.

use clap::Parser;

use crate::domain::DEFAULT_HISTORY_CAPACITY;

/// Runtime configuration for the chat hub
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "huddle-server")]
#[command(about = "Real-time chat hub over WebSocket", long_about = None)]
pub struct ServerConfig {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HUDDLE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Number of broadcast messages kept in history
    #[arg(
        long,
        env = "HUDDLE_HISTORY_CAPACITY",
        default_value_t = DEFAULT_HISTORY_CAPACITY,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub history_capacity: usize,

    /// Origin allowed to call the HTTP API from a browser
    #[arg(long, env = "CLIENT_URL", default_value = "http://localhost:5173")]
    pub client_origin: String,

    /// Default log level when RUST_LOG is not set
    #[arg(long, env = "HUDDLE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    /// Address string suitable for `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

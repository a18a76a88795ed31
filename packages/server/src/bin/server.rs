//! Real-time chat hub server.
//!
//! Tracks presence, typing state, reactions and read receipts, and broadcasts
//! them to every connected WebSocket client.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin huddle-server
//! cargo run --bin huddle-server -- --host 0.0.0.0 --port 3000
//! ```

use clap::Parser;
use huddle_server::{config::ServerConfig, ui::Server};
use huddle_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_PKG_NAME"), &config.log_level);
    tracing::debug!("Loaded configuration: {:?}", config);

    let server = Server::with_history_capacity(config.history_capacity)
        .with_client_origin(config.client_origin.clone());
    if let Err(e) = server.run(&config.bind_addr()).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

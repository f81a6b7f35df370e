//! Room-based WebSocket chat relay server.
//!
//! Clients create or join rooms and every chat message is broadcast to the
//! members of the room.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin heya-server -- --port 8000
//! ```

use clap::Parser;
use heya_server::ServerConfig;
use heya_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = heya_server::run_server(&config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

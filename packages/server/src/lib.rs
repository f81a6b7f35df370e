//! Room-based WebSocket chat relay.
//!
//! Clients create or join rooms identified by 8-character codes and exchange
//! text messages with everyone in the same room.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use error::ServerError;
pub use ui::run as run_server;

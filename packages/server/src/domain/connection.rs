//! Connection port.
//!
//! The domain never owns sockets. It only sees this trait, implemented by the
//! transport layer for each client channel.

use std::sync::Arc;

use super::ConnectionId;

/// One client's bidirectional channel, as seen by the room registry.
#[cfg_attr(test, mockall::automock)]
pub trait Connection: Send + Sync {
    /// Stable key of this connection.
    fn id(&self) -> ConnectionId;

    /// Queue a text frame for delivery. Must not block.
    fn send(&self, frame: String);

    /// Whether the channel can still accept frames.
    fn is_open(&self) -> bool;
}

/// Shared handle to a connection
pub type ConnectionHandle = Arc<dyn Connection>;

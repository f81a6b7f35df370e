//! Channel-backed implementation of the domain `Connection` port.
//!
//! Frames are queued onto an unbounded mpsc channel drained by the socket's
//! writer task. The connection counts as open for as long as that task holds
//! the receiver.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::domain::{Connection, ConnectionId};

/// Close code for a normal, client-requested closure
pub const CLOSE_NORMAL: u16 = 1000;

/// Item consumed by the socket writer task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    Text(String),
    Close { code: u16, reason: String },
}

pub struct ChannelConnection {
    id: ConnectionId,
    sender: UnboundedSender<Outbound>,
}

impl ChannelConnection {
    /// Create a connection and the receiver its writer task should drain.
    pub fn new(id: ConnectionId) -> (Self, UnboundedReceiver<Outbound>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { id, sender }, receiver)
    }

    /// Ask the writer task to send a close frame and stop.
    pub fn close(&self, code: u16, reason: impl Into<String>) {
        let frame = Outbound::Close {
            code,
            reason: reason.into(),
        };
        if self.sender.send(frame).is_err() {
            tracing::debug!("Connection '{}' already closed", self.id);
        }
    }
}

impl Connection for ChannelConnection {
    fn id(&self) -> ConnectionId {
        self.id
    }

    fn send(&self, frame: String) {
        if self.sender.send(Outbound::Text(frame)).is_err() {
            tracing::warn!("Failed to queue frame for connection '{}'", self.id);
        }
    }

    fn is_open(&self) -> bool {
        !self.sender.is_closed()
    }
}

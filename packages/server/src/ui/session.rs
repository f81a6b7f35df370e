//! Per-connection protocol handling.
//!
//! A [`Session`] is attached to one socket for its whole lifetime. It decodes
//! inbound frames, dispatches them to the usecases and writes replies back to
//! the same connection. Errors are never broadcast.

use std::sync::Arc;

use crate::{
    domain::{ConnectionHandle, RoomId, RoomRepository},
    infrastructure::dto::websocket::{
        ClientMessage, ErrorMessage, JoinedRoomMessage, RoomCreatedMessage, SystemMessage,
        WireMessage,
    },
    usecase::{
        CreateRoomUseCase, DisconnectParticipantUseCase, JoinRoomUseCase, SendMessageUseCase,
    },
};

/// System message sent as soon as a client connects
pub const WELCOME_MESSAGE: &str = "Connected to WebSocket Server";

/// Close reason used when the client sends `{"type":"disconnect"}`
pub const DISCONNECT_REASON: &str = "User requested disconnection.";

const INVALID_ROOM_ID: &str = "Invalid room ID";
const COULD_NOT_DELIVER: &str = "Could not deliver message";

/// Where the session stands with respect to rooms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Not a member of any room yet
    Unbound,
    /// Member of the most recently created or joined room
    Bound(RoomId),
}

/// What the transport should do after a frame was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionControl {
    Continue,
    /// Close the socket normally
    Close,
}

pub struct Session {
    connection: ConnectionHandle,
    state: SessionState,
    create_room: CreateRoomUseCase,
    join_room: JoinRoomUseCase,
    send_message: SendMessageUseCase,
    disconnect: DisconnectParticipantUseCase,
}

impl Session {
    /// Attach a session to a freshly connected channel and greet the client.
    pub fn open(connection: ConnectionHandle, repository: Arc<dyn RoomRepository>) -> Self {
        connection.send(SystemMessage::new(WELCOME_MESSAGE).to_json());
        tracing::info!("New connection established: '{}'", connection.id());

        Self {
            connection,
            state: SessionState::Unbound,
            create_room: CreateRoomUseCase::new(repository.clone()),
            join_room: JoinRoomUseCase::new(repository.clone()),
            send_message: SendMessageUseCase::new(repository.clone()),
            disconnect: DisconnectParticipantUseCase::new(repository),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Decode and dispatch one inbound text frame.
    pub async fn handle_text(&mut self, raw: &str) -> SessionControl {
        let message = match ClientMessage::decode(raw) {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!("Rejected frame from '{}': {}", self.connection.id(), e);
                self.reply(&ErrorMessage::new(e.to_string()));
                return SessionControl::Continue;
            }
        };

        match message {
            ClientMessage::Create(payload) => {
                let room_id = self
                    .create_room
                    .execute(self.connection.clone(), payload.username)
                    .await;
                self.reply(&RoomCreatedMessage::new(room_id.as_str()));
                self.state = SessionState::Bound(room_id);
            }
            ClientMessage::Join(payload) => {
                match self
                    .join_room
                    .execute(payload.room_id, self.connection.clone(), payload.username)
                    .await
                {
                    Ok(room_id) => {
                        self.reply(&JoinedRoomMessage::new(room_id.as_str()));
                        self.state = SessionState::Bound(room_id);
                    }
                    Err(e) => {
                        tracing::info!("Join failed for '{}': {}", self.connection.id(), e);
                        self.reply(&ErrorMessage::new(INVALID_ROOM_ID));
                    }
                }
            }
            ClientMessage::Chat(payload) => {
                if let Err(e) = self
                    .send_message
                    .execute(payload.room_id, self.connection.id(), payload.message)
                    .await
                {
                    tracing::info!("Relay rejected for '{}': {}", self.connection.id(), e);
                    self.reply(&ErrorMessage::new(COULD_NOT_DELIVER));
                }
            }
            ClientMessage::Disconnect => {
                tracing::info!("Client '{}' requested disconnection", self.connection.id());
                return SessionControl::Close;
            }
        }

        SessionControl::Continue
    }

    /// Tear the session down after the socket closed or failed.
    ///
    /// Returns the rooms the connection was removed from.
    pub async fn close(self) -> Vec<RoomId> {
        let connection_id = self.connection.id();
        let left = self.disconnect.execute(connection_id).await;
        tracing::info!(
            "Connection '{}' closed (left {} room(s))",
            connection_id,
            left.len()
        );
        left
    }

    fn reply<M: WireMessage>(&self, message: &M) {
        self.connection.send(message.to_json());
    }
}

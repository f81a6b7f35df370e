//! UseCase 層のエラー定義

use thiserror::Error;

/// Errors returned by [`JoinRoomUseCase`](super::JoinRoomUseCase)
///
/// Both variants are reported to the client as the same "Invalid room ID" reply.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinRoomError {
    /// The room id is not 8 alphanumeric characters
    #[error("Malformed room id: {0:?}")]
    MalformedRoomId(String),

    /// No room with this id exists
    #[error("Room not found: {0}")]
    RoomNotFound(String),
}

/// Errors returned by [`SendMessageUseCase`](super::SendMessageUseCase)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    /// The message is empty after trimming whitespace
    #[error("Message is empty")]
    EmptyMessage,

    /// The room id is not 8 alphanumeric characters
    #[error("Malformed room id: {0:?}")]
    MalformedRoomId(String),

    /// No room with this id exists
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    /// The sender is not a member of the room
    #[error("Sender is not a member of room {0}")]
    NotAMember(String),
}

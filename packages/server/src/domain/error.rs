//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// RoomId invalid format error (not exactly 8 ASCII alphanumerics)
    #[error("RoomId must be {len} alphanumeric characters (got: {actual:?})")]
    RoomIdInvalidFormat { len: usize, actual: String },

    /// MessageContent validation error
    #[error("MessageContent cannot be empty or whitespace only")]
    MessageContentEmpty,
}

/// Errors returned by room registry operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No room is registered under the given id
    #[error("Room '{0}' not found")]
    RoomNotFound(String),

    /// The connection is not a member of the room
    #[error("Connection '{connection_id}' is not a member of room '{room_id}'")]
    NotAMember {
        room_id: String,
        connection_id: String,
    },
}

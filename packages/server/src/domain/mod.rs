//! Domain layer for the chat relay.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod connection;
pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use connection::{Connection, ConnectionHandle};
pub use entity::{BroadcastReport, Participant, Room};
pub use error::{RepositoryError, ValueObjectError};
pub use factory::RoomIdFactory;
pub use repository::RoomRepository;
pub use value_object::{ConnectionId, MessageContent, RoomId, Timestamp, Username};

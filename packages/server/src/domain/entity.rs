//! Core domain models for the chat relay.

use std::{collections::HashMap, fmt};

use super::{
    connection::ConnectionHandle,
    value_object::{ConnectionId, RoomId, Timestamp, Username},
};

/// Represents a chat room and its current members
///
/// A room is only ever constructed with a first participant; the registry drops it
/// once the last one leaves.
#[derive(Debug, Clone)]
pub struct Room {
    /// Room identifier
    pub id: RoomId,
    /// Current members keyed by connection
    participants: HashMap<ConnectionId, Participant>,
    /// Timestamp when the room was created
    pub created_at: Timestamp,
}

/// Result of fanning a frame out to a room
#[derive(Debug, Default)]
pub struct BroadcastReport {
    /// Number of members the frame was handed to
    pub delivered: usize,
    /// Members dropped because their channel was closed
    pub evicted: Vec<Participant>,
}

impl Room {
    /// Create a room whose sole member is `owner`
    pub fn new(id: RoomId, owner: Participant, created_at: Timestamp) -> Self {
        let mut participants = HashMap::new();
        participants.insert(owner.connection_id(), owner);
        Self {
            id,
            participants,
            created_at,
        }
    }

    /// Add a participant, replacing the display name if the connection is already a member
    ///
    /// Returns the previous membership record, if any.
    pub fn upsert_participant(&mut self, participant: Participant) -> Option<Participant> {
        self.participants
            .insert(participant.connection_id(), participant)
    }

    /// Remove a participant from the room by connection
    pub fn remove_participant(&mut self, connection_id: &ConnectionId) -> Option<Participant> {
        self.participants.remove(connection_id)
    }

    /// Get a participant by connection
    pub fn get_participant(&self, connection_id: &ConnectionId) -> Option<&Participant> {
        self.participants.get(connection_id)
    }

    pub fn contains(&self, connection_id: &ConnectionId) -> bool {
        self.participants.contains_key(connection_id)
    }

    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.participants.values()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Send `frame` to every member whose channel is open.
    ///
    /// Closed members are swept first and removed before anything is sent, so the
    /// membership map is never mutated while being iterated for delivery.
    pub fn broadcast(&mut self, frame: &str) -> BroadcastReport {
        let closed: Vec<ConnectionId> = self
            .participants
            .iter()
            .filter(|(_, p)| !p.connection.is_open())
            .map(|(id, _)| *id)
            .collect();

        let evicted: Vec<Participant> = closed
            .iter()
            .filter_map(|id| self.participants.remove(id))
            .collect();

        for participant in self.participants.values() {
            participant.connection.send(frame.to_string());
        }

        BroadcastReport {
            delivered: self.participants.len(),
            evicted,
        }
    }
}

/// Represents a member of a chat room
#[derive(Clone)]
pub struct Participant {
    /// Channel of the member
    pub connection: ConnectionHandle,
    /// Display name chosen on create/join
    pub username: Username,
    /// Timestamp when the participant joined
    pub joined_at: Timestamp,
}

impl Participant {
    /// Create a new participant
    pub fn new(connection: ConnectionHandle, username: Username, joined_at: Timestamp) -> Self {
        Self {
            connection,
            username,
            joined_at,
        }
    }

    pub fn connection_id(&self) -> ConnectionId {
        self.connection.id()
    }
}

impl fmt::Debug for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Participant")
            .field("connection", &self.connection.id())
            .field("username", &self.username)
            .field("joined_at", &self.joined_at)
            .finish()
    }
}

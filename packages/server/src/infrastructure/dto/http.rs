//! HTTP API response DTOs for the chat relay.

use serde::{Deserialize, Serialize};

/// Registry counters for the stats endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsDto {
    pub rooms: usize,
    pub participants: usize,
}

/// Room detail for detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDetailDto {
    pub id: String,
    pub participants: Vec<ParticipantDetailDto>,
    pub created_at: String, // RFC 3339
}

/// Participant detail for room detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantDetailDto {
    pub username: String,
    pub joined_at: String, // RFC 3339
}

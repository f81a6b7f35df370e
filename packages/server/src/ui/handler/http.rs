//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use heya_shared::time::millis_to_rfc3339;

use crate::{
    domain::RoomId,
    infrastructure::dto::http::{ParticipantDetailDto, RoomDetailDto, StatsDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Registry counters
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsDto> {
    Json(StatsDto {
        rooms: state.repository.count_rooms().await,
        participants: state.repository.count_participants().await,
    })
}

/// Get room detail by ID
///
/// Rooms are not listable; a caller must already know the code.
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailDto>, StatusCode> {
    let room_id = RoomId::new(room_id).map_err(|_| StatusCode::NOT_FOUND)?;
    let room = state
        .repository
        .get_room(&room_id)
        .await
        .map_err(|_| StatusCode::NOT_FOUND)?;

    let mut participants: Vec<_> = room.participants().collect();
    participants.sort_by_key(|p| p.joined_at);

    let room_detail = RoomDetailDto {
        id: room.id.as_str().to_string(),
        participants: participants
            .into_iter()
            .map(|p| ParticipantDetailDto {
                username: p.username.as_str().to_string(),
                joined_at: millis_to_rfc3339(p.joined_at.value()),
            })
            .collect(),
        created_at: millis_to_rfc3339(room.created_at.value()),
    };

    Ok(Json(room_detail))
}

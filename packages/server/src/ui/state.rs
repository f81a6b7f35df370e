//! Server state shared by all handlers.

use std::sync::Arc;

use crate::domain::RoomRepository;

/// Shared application state
pub struct AppState {
    /// Repository（Room Registry の抽象化）
    pub repository: Arc<dyn RoomRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }
}

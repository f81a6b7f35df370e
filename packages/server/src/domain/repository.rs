//! Repository trait（Room Registry の抽象化）
//!
//! ドメイン層が定義し、インフラ層が実装します（依存性の逆転）。
//! 各操作は他の全ての操作に対してアトミックに実行されなければなりません。

use async_trait::async_trait;

use super::{
    ConnectionHandle, ConnectionId, MessageContent, RepositoryError, Room, RoomId, Username,
};

/// Authoritative registry of rooms and their members
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Register a new room whose sole member is `connection`, returning its fresh id
    async fn create_room(&self, connection: ConnectionHandle, username: Username) -> RoomId;

    /// Add `connection` to an existing room and announce it to every member
    ///
    /// Re-joining overwrites the display name.
    async fn join_room(
        &self,
        room_id: &RoomId,
        connection: ConnectionHandle,
        username: Username,
    ) -> Result<(), RepositoryError>;

    /// Remove `connection` from every room it belongs to
    ///
    /// Returns the ids of the rooms it was removed from; empty when it was in none.
    async fn leave_all(&self, connection_id: &ConnectionId) -> Vec<RoomId>;

    /// Fan a chat message from `sender` out to every member of the room
    ///
    /// Returns the number of members the message was delivered to.
    async fn relay(
        &self,
        room_id: &RoomId,
        sender: &ConnectionId,
        content: MessageContent,
    ) -> Result<usize, RepositoryError>;

    /// Snapshot of one room
    async fn get_room(&self, room_id: &RoomId) -> Result<Room, RepositoryError>;

    async fn count_rooms(&self) -> usize;

    async fn count_participants(&self) -> usize;
}

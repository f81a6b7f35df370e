//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。
//!
//! 全ての操作は単一の Mutex の下で実行されます。ブロードキャストも同じ
//! クリティカルセクション内で行いますが、`Connection::send` はチャンネルへの
//! キューイングのみでブロックしません。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{
        ConnectionHandle, ConnectionId, MessageContent, Participant, RepositoryError, Room, RoomId,
        RoomIdFactory, RoomRepository, Timestamp, Username,
    },
    infrastructure::dto::websocket::{ChatMessage, SystemMessage, WireMessage},
};

type Rooms = HashMap<RoomId, Room>;

/// Room ID の生成元
type IdGenerator = Box<dyn Fn() -> RoomId + Send + Sync>;

/// インメモリ Room Repository 実装
///
/// HashMap をインメモリ DB として使用する実装。
/// ドメイン層の RoomRepository trait を実装します（依存性の逆転）。
pub struct InMemoryRoomRepository {
    /// Room ID → Room（メンバーが 1 人以上いる Room のみ）
    rooms: Mutex<Rooms>,
    generate_id: IdGenerator,
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::with_id_generator(RoomIdFactory::generate)
    }
}

impl InMemoryRoomRepository {
    /// 新しい空の InMemoryRoomRepository を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// Room ID の生成元を指定して作成
    ///
    /// 生成された ID が既存の Room と衝突した場合は、衝突しなくなるまで再生成する。
    pub fn with_id_generator(generate_id: impl Fn() -> RoomId + Send + Sync + 'static) -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
            generate_id: Box::new(generate_id),
        }
    }

    /// Room 内の全メンバーにフレームを送信する
    ///
    /// 閉じたチャンネルのメンバーは削除され、Room が空になった場合は Room も削除する。
    /// 送信できたメンバー数を返す。
    fn broadcast_in(rooms: &mut Rooms, room_id: &RoomId, frame: &str) -> usize {
        let Some(room) = rooms.get_mut(room_id) else {
            return 0;
        };

        let report = room.broadcast(frame);
        for participant in &report.evicted {
            tracing::info!(
                "Removed '{}' from room {} (connection closed)",
                participant.username,
                room_id
            );
        }

        if room.is_empty() {
            rooms.remove(room_id);
            tracing::info!("Room {} deleted (empty)", room_id);
        }

        report.delivered
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn create_room(&self, connection: ConnectionHandle, username: Username) -> RoomId {
        let mut rooms = self.rooms.lock().await;

        // 衝突確率は 62^-8 なので、ほぼ 1 回で終わる
        let room_id = loop {
            let candidate = (self.generate_id)();
            if !rooms.contains_key(&candidate) {
                break candidate;
            }
            tracing::debug!("Room id {} already taken, regenerating", candidate);
        };

        let now = Timestamp::now();
        tracing::info!("Room {} created by '{}'", room_id, username);
        let owner = Participant::new(connection, username, now);
        rooms.insert(room_id.clone(), Room::new(room_id.clone(), owner, now));

        room_id
    }

    async fn join_room(
        &self,
        room_id: &RoomId,
        connection: ConnectionHandle,
        username: Username,
    ) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;

        let room = rooms
            .get_mut(room_id)
            .ok_or_else(|| RepositoryError::RoomNotFound(room_id.to_string()))?;

        let frame = SystemMessage::new(format!("{username} joined the room")).to_json();
        tracing::info!("'{}' joined room {}", username, room_id);
        room.upsert_participant(Participant::new(connection, username, Timestamp::now()));

        Self::broadcast_in(&mut rooms, room_id, &frame);
        Ok(())
    }

    async fn leave_all(&self, connection_id: &ConnectionId) -> Vec<RoomId> {
        let mut rooms = self.rooms.lock().await;

        let member_of: Vec<RoomId> = rooms
            .values()
            .filter(|room| room.contains(connection_id))
            .map(|room| room.id.clone())
            .collect();

        for room_id in &member_of {
            let Some(room) = rooms.get_mut(room_id) else {
                continue;
            };
            let Some(participant) = room.remove_participant(connection_id) else {
                continue;
            };
            tracing::info!("'{}' left room {}", participant.username, room_id);

            if room.is_empty() {
                rooms.remove(room_id);
                tracing::info!("Room {} deleted (empty)", room_id);
            } else {
                let frame =
                    SystemMessage::new(format!("{} left the room", participant.username)).to_json();
                Self::broadcast_in(&mut rooms, room_id, &frame);
            }
        }

        member_of
    }

    async fn relay(
        &self,
        room_id: &RoomId,
        sender: &ConnectionId,
        content: MessageContent,
    ) -> Result<usize, RepositoryError> {
        let mut rooms = self.rooms.lock().await;

        let room = rooms
            .get(room_id)
            .ok_or_else(|| RepositoryError::RoomNotFound(room_id.to_string()))?;
        let sender_name = room
            .get_participant(sender)
            .map(|p| p.username.to_string())
            .ok_or_else(|| RepositoryError::NotAMember {
                room_id: room_id.to_string(),
                connection_id: sender.to_string(),
            })?;

        let frame = ChatMessage::new(sender_name, content.into_string()).to_json();
        Ok(Self::broadcast_in(&mut rooms, room_id, &frame))
    }

    async fn get_room(&self, room_id: &RoomId) -> Result<Room, RepositoryError> {
        let rooms = self.rooms.lock().await;
        rooms
            .get(room_id)
            .cloned()
            .ok_or_else(|| RepositoryError::RoomNotFound(room_id.to_string()))
    }

    async fn count_rooms(&self) -> usize {
        self.rooms.lock().await.len()
    }

    async fn count_participants(&self) -> usize {
        let rooms = self.rooms.lock().await;
        rooms.values().map(Room::len).sum()
    }
}

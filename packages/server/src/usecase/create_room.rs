//! UseCase: ルーム作成処理

use std::sync::Arc;

use crate::domain::{ConnectionHandle, RoomId, RoomRepository, Username};

/// ルーム作成のユースケース
pub struct CreateRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl CreateRoomUseCase {
    /// 新しい CreateRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// ルーム作成を実行
    ///
    /// # Arguments
    ///
    /// * `connection` - 作成者の接続
    /// * `username` - 作成者の表示名
    ///
    /// # Returns
    ///
    /// 新しく割り当てられた Room ID（作成者が唯一のメンバー）
    pub async fn execute(&self, connection: ConnectionHandle, username: String) -> RoomId {
        self.repository
            .create_room(connection, Username::from(username))
            .await
    }
}

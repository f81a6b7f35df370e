//! UseCase: ルーム参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - Room ID の形式検証と、存在する Room への参加
//!
//! ### なぜこのテストが必要か
//! - 不正な Room ID はどのような状態でも RoomNotFound 相当として扱う必要がある
//! - 参加通知が既存メンバーと参加者本人の両方に届くことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：既存 Room への参加
//! - 異常系：形式不正な Room ID、存在しない Room

use std::sync::Arc;

use crate::domain::{ConnectionHandle, RoomId, RoomRepository, Username};

use super::error::JoinRoomError;

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// ルーム参加を実行
    ///
    /// # Arguments
    ///
    /// * `room_id` - 参加する Room の ID（未検証の文字列）
    /// * `connection` - 参加者の接続
    /// * `username` - 参加者の表示名
    ///
    /// # Returns
    ///
    /// * `Ok(RoomId)` - 参加成功
    /// * `Err(JoinRoomError)` - 参加失敗（状態は変更されない）
    pub async fn execute(
        &self,
        room_id: String,
        connection: ConnectionHandle,
        username: String,
    ) -> Result<RoomId, JoinRoomError> {
        // 1. Room ID の形式チェック
        let room_id = RoomId::new(room_id.clone())
            .map_err(|_| JoinRoomError::MalformedRoomId(room_id))?;

        // 2. Repository 経由で参加（参加通知のブロードキャストを含む）
        self.repository
            .join_room(&room_id, connection, Username::from(username))
            .await
            .map_err(|_| JoinRoomError::RoomNotFound(room_id.to_string()))?;

        Ok(room_id)
    }
}

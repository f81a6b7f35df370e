//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - メッセージの検証と Room 内へのブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - 空メッセージはメンバーシップに関わらず拒否する
//! - メンバーでない送信者のメッセージは誰にも届かないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：送信者を含む全メンバーへの配信
//! - 異常系：空メッセージ、存在しない Room、メンバーでない送信者

use std::sync::Arc;

use crate::domain::{ConnectionId, MessageContent, RepositoryError, RoomId, RoomRepository};

use super::error::SendMessageError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `room_id` - 送信先 Room の ID（未検証の文字列）
    /// * `sender` - 送信者の接続 ID
    /// * `message` - メッセージ本文
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - 配信したメンバー数
    /// * `Err(SendMessageError)` - 送信拒否（何も送信されない）
    pub async fn execute(
        &self,
        room_id: String,
        sender: ConnectionId,
        message: String,
    ) -> Result<usize, SendMessageError> {
        // 1. 本文の検証（空白のみも拒否）
        let content =
            MessageContent::new(message).map_err(|_| SendMessageError::EmptyMessage)?;

        // 2. Room ID の形式チェック
        let room_id = RoomId::new(room_id.clone())
            .map_err(|_| SendMessageError::MalformedRoomId(room_id))?;

        // 3. Repository 経由でブロードキャスト
        self.repository
            .relay(&room_id, &sender, content)
            .await
            .map_err(|e| match e {
                RepositoryError::RoomNotFound(id) => SendMessageError::RoomNotFound(id),
                RepositoryError::NotAMember { room_id, .. } => {
                    SendMessageError::NotAMember(room_id)
                }
            })
    }
}

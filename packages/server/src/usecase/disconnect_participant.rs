//! UseCase: 参加者切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectParticipantUseCase::execute() メソッド
//! - 切断時に所属していた全ての Room から退出すること
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加者の切断と残りのメンバーへの通知
//! - エッジケース：最後の参加者の切断（Room 削除、通知なし）
//! - エッジケース：どの Room にも所属していない接続の切断（何もしない）

use std::sync::Arc;

use crate::domain::{ConnectionId, RoomId, RoomRepository};

/// 参加者切断のユースケース
pub struct DisconnectParticipantUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl DisconnectParticipantUseCase {
    /// 新しい DisconnectParticipantUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 参加者切断を実行
    ///
    /// # Returns
    ///
    /// 退出した Room の ID リスト（どこにも所属していなければ空）
    pub async fn execute(&self, connection_id: ConnectionId) -> Vec<RoomId> {
        self.repository.leave_all(&connection_id).await
    }
}

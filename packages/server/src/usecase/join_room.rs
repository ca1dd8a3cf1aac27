//! UseCase: ルーム参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - 参加処理（存在チェック、定員チェック、スナップショット取得、購読）
//!
//! ### なぜこのテストが必要か
//! - 参加者への履歴再生は「参加した瞬間の履歴と正確に一致」が契約
//! - 満室・存在しないルームのエラーが参加者だけに閉じることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系: 参加とメンバーリスト更新の通知
//! - 異常系: 存在しないルーム、満室のルーム

use std::sync::Arc;

use crate::domain::{ConnectionId, JoinSnapshot, MessagePusher, RoomId, RoomRepository, Username};

use super::error::JoinError;

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    /// Repository（ルームストアの抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// ルーム参加を実行
    ///
    /// # Arguments
    ///
    /// * `connection_id` - 参加する接続の ID
    /// * `room_id` - 参加先のルーム ID
    /// * `username` - 参加者の表示名
    ///
    /// # Returns
    ///
    /// * `Ok(JoinSnapshot)` - 参加成功。追加後のメンバーリストと、参加時点の
    ///   チャット履歴（参加者への再生用）
    /// * `Err(JoinError)` - ルームが存在しない、または満室
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        room_id: &RoomId,
        username: Username,
    ) -> Result<JoinSnapshot, JoinError> {
        let snapshot = self.repository.join_room(room_id, username).await?;

        self.message_pusher
            .subscribe(connection_id, room_id.clone())
            .await;

        Ok(snapshot)
    }

    /// メンバーリストの更新を参加者を含む全メンバーにブロードキャスト
    ///
    /// # Arguments
    ///
    /// * `room_id` - 対象のルーム ID
    /// * `message` - ブロードキャストするメッセージ（JSON）
    pub async fn broadcast_user_joined(&self, room_id: &RoomId, message: &str) {
        self.message_pusher.publish(room_id, message).await;
    }
}

//! UseCase: チャットメッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - タイムスタンプの採番、履歴への追加、存在しないルームの無視
//!
//! ### なぜこのテストが必要か
//! - タイムスタンプはサーバー採番が契約（クライアントの申告時刻は使わない）
//! - 存在しないルームへの送信はエラーを返さず黙って破棄する契約
//!   （1 クライアントの不正イベントが他に波及しない）
//!
//! ### どのような状況を想定しているか
//! - 正常系: メッセージの採番・追加・ブロードキャスト
//! - 異常系: 存在しないルームへの送信（silent no-op）
//! - エッジケース: 履歴上限到達時の最古メッセージ破棄

use std::sync::Arc;

use sopify_shared::time::Clock;

use crate::domain::{
    ChatMessage, MessageContent, MessagePusher, RepositoryError, RoomId, RoomRepository,
    Timestamp, Username,
};

/// チャットメッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Repository（ルームストアの抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// Clock（メッセージ到着時刻の採番）
    clock: Arc<dyn Clock>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            clock,
        }
    }

    /// メッセージ送信を実行
    ///
    /// サーバー到着時刻でタイムスタンプを採番し、ルームの履歴に追加します。
    /// 履歴が上限（50 件）に達している場合は最古のメッセージが破棄されます。
    /// メッセージ内容のバリデーションは行いません（長さ・頻度とも無制限）。
    ///
    /// # Arguments
    ///
    /// * `room_id` - 送信先のルーム ID
    /// * `username` - 送信者の表示名
    /// * `content` - メッセージ本文
    ///
    /// # Returns
    ///
    /// * `Some(ChatMessage)` - 履歴に追加されたメッセージ（採番済み）
    /// * `None` - ルームが存在しない（黙って破棄、送信者にエラーは返さない）
    pub async fn execute(
        &self,
        room_id: &RoomId,
        username: Username,
        content: MessageContent,
    ) -> Option<ChatMessage> {
        let message = ChatMessage::new(
            username,
            content,
            Timestamp::new(self.clock.now_utc_millis()),
        );

        match self
            .repository
            .append_message(room_id, message.clone())
            .await
        {
            Ok(()) => Some(message),
            Err(RepositoryError::RoomNotFound) => {
                tracing::debug!(
                    "Dropping chat message for unknown room '{}' (silent no-op)",
                    room_id
                );
                None
            }
            Err(e) => {
                tracing::warn!("Failed to append chat message to room '{}': {}", room_id, e);
                None
            }
        }
    }

    /// 新着メッセージを送信者を含む全メンバーにブロードキャスト
    ///
    /// # Arguments
    ///
    /// * `room_id` - 対象のルーム ID
    /// * `message` - ブロードキャストするメッセージ（JSON）
    pub async fn broadcast_message(&self, room_id: &RoomId, message: &str) {
        self.message_pusher.publish(room_id, message).await;
    }
}

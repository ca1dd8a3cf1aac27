//! UseCase: 再生同期イベントの中継処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SyncPlaybackUseCase の broadcast_play() / broadcast_pause()
//! - 送信者を含むグループ全員への配信
//!
//! ### なぜこのテストが必要か
//! - 再生同期は送信者を除外しない契約（送信者クライアント自身も受信した
//!   イベントに対して冪等にドリフト補正する前提）
//! - 存在しないルームへの中継が no-op になり、配送以上の存在チェックを
//!   持たないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系: play / pause イベントのグループ配信
//! - エッジケース: 購読者のいないルーム ID への配信

use std::sync::Arc;

use crate::domain::{MessagePusher, RoomId};

/// 再生同期イベント中継のユースケース
///
/// ルームストアには関与しません。配信先の解決はブロードキャストグループ
/// だけで行い、グループが存在しなければ何も起きません。
pub struct SyncPlaybackUseCase {
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl SyncPlaybackUseCase {
    /// 新しい SyncPlaybackUseCase を作成
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// 再生開始イベントを送信者を含む全メンバーに配信
    ///
    /// # Arguments
    ///
    /// * `room_id` - 対象のルーム ID
    /// * `message` - 配信するメッセージ（JSON、楽曲 URL と再生位置を含む）
    pub async fn broadcast_play(&self, room_id: &RoomId, message: &str) {
        self.message_pusher.publish(room_id, message).await;
    }

    /// 一時停止イベントを全メンバーに配信
    ///
    /// # Arguments
    ///
    /// * `room_id` - 対象のルーム ID
    /// * `message` - 配信するメッセージ（JSON、ペイロードなし）
    pub async fn broadcast_pause(&self, room_id: &RoomId, message: &str) {
        self.message_pusher.publish(room_id, message).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConnectionId;
    use crate::infrastructure::message_pusher::WebSocketMessagePusher;

    fn create_test_usecase() -> (SyncPlaybackUseCase, Arc<WebSocketMessagePusher>) {
        let message_pusher = Arc::new(WebSocketMessagePusher::new());
        let usecase = SyncPlaybackUseCase::new(message_pusher.clone());
        (usecase, message_pusher)
    }

    #[tokio::test]
    async fn test_broadcast_play_reaches_all_members_including_sender() {
        // テスト項目: play イベントが送信者を含む全メンバーに届く
        // given (前提条件):
        let (usecase, pusher) = create_test_usecase();
        let room_id = RoomId::new("x7x2pq".to_string());
        let (tx1, mut rx1) = tokio::sync::mpsc::unbounded_channel();
        let (tx2, mut rx2) = tokio::sync::mpsc::unbounded_channel();
        let sender_conn = ConnectionId::generate();
        let other_conn = ConnectionId::generate();
        pusher.register_connection(sender_conn, tx1).await;
        pusher.register_connection(other_conn, tx2).await;
        pusher.subscribe(sender_conn, room_id.clone()).await;
        pusher.subscribe(other_conn, room_id.clone()).await;

        // when (操作):
        usecase
            .broadcast_play(&room_id, r#"{"type":"sync-play"}"#)
            .await;

        // then (期待する結果): 送信者も受信する
        assert_eq!(rx1.recv().await, Some(r#"{"type":"sync-play"}"#.to_string()));
        assert_eq!(rx2.recv().await, Some(r#"{"type":"sync-play"}"#.to_string()));
    }

    #[tokio::test]
    async fn test_broadcast_pause_reaches_all_members() {
        // テスト項目: pause イベントが全メンバーに届く
        // given (前提条件):
        let (usecase, pusher) = create_test_usecase();
        let room_id = RoomId::new("x7x2pq".to_string());
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let connection_id = ConnectionId::generate();
        pusher.register_connection(connection_id, tx).await;
        pusher.subscribe(connection_id, room_id.clone()).await;

        // when (操作):
        usecase
            .broadcast_pause(&room_id, r#"{"type":"sync-pause"}"#)
            .await;

        // then (期待する結果):
        assert_eq!(
            rx.recv().await,
            Some(r#"{"type":"sync-pause"}"#.to_string())
        );
    }

    #[tokio::test]
    async fn test_broadcast_to_unknown_room_is_noop() {
        // テスト項目: 購読者のいないルームへの配信が no-op になる
        // given (前提条件):
        let (usecase, _pusher) = create_test_usecase();

        // when (操作):
        usecase
            .broadcast_play(&RoomId::new("nosuch".to_string()), r#"{"type":"sync-play"}"#)
            .await;

        // then (期待する結果):
        // 何も起きない（パニックもエラーもなし）
    }
}

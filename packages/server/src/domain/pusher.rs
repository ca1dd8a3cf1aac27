//! MessagePusher trait 定義
//!
//! 接続レジストリとルームのブロードキャストグループへのインターフェースを
//! 定義します。具体的な実装は Infrastructure 層が提供します。
//!
//! ## 設計ノート
//!
//! ブロードキャストは「名前付き購読者集合への publish」として明示的に
//! モデル化します。グループ（ルーム ID → 接続集合）はルームストアと対称に
//! 維持され、接続の登録解除はその接続を全てのグループから取り除きます。
//! 配送はベストエフォートの fire-and-forget で、ACK もリトライもありません。

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use super::value_object::{ConnectionId, RoomId};

/// クライアントへの送信チャンネル
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// メッセージ送信のエラー
#[derive(Debug, Error)]
pub enum MessagePushError {
    /// 対象の接続が登録されていない
    #[error("connection '{0}' is not registered")]
    ConnectionNotFound(String),
    /// チャンネルへの送信失敗
    #[error("failed to push message: {0}")]
    PushFailed(String),
}

/// MessagePusher trait
///
/// UseCase 層はこの trait に依存し、WebSocket などのトランスポート実装には
/// 依存しません。
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 接続を登録する
    async fn register_connection(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// 接続を登録解除する
    ///
    /// その接続が購読していた全てのグループからも取り除かれます。
    async fn unregister_connection(&self, connection_id: &ConnectionId);

    /// 接続をルームのブロードキャストグループに加える
    async fn subscribe(&self, connection_id: ConnectionId, room_id: RoomId);

    /// ルームのブロードキャストグループを破棄する（ルーム終了時）
    async fn drop_group(&self, room_id: &RoomId);

    /// 特定の接続にメッセージを送信する
    async fn push_to(&self, connection_id: &ConnectionId, content: &str)
    -> Result<(), MessagePushError>;

    /// ルームのグループ全員にメッセージを配信する
    ///
    /// 送信者の除外は行いません。存在しない・空のグループへの publish は
    /// no-op です。個々の接続への送信失敗は許容されます。
    async fn publish(&self, room_id: &RoomId, content: &str);
}

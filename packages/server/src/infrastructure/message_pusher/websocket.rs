//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続レジストリ: 接続 ID と WebSocket の `UnboundedSender` の対応を管理
//! - ブロードキャストグループ: ルーム ID と購読中の接続集合の対応を管理
//! - クライアントへのメッセージ送信（push_to, publish）
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`src/ui/handler/websocket.rs`）で行われます。
//! この実装は生成された `UnboundedSender` を受け取り、メッセージ送信に
//! 使用します。これにより「WebSocket の生成」と「メッセージの送信」が
//! 分離されます。
//!
//! グループとレジストリは 1 つの Mutex で保護し、対称に維持します。
//! 接続の登録解除はその接続を全てのグループから取り除くため、切断済みの
//! 接続が購読者として残り続けることはありません。

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, MessagePushError, MessagePusher, PusherChannel, RoomId};

/// 接続レジストリとブロードキャストグループ
#[derive(Default)]
struct Registry {
    /// 接続中のクライアントの WebSocket sender
    clients: HashMap<ConnectionId, PusherChannel>,
    /// ルームごとの購読者集合
    groups: HashMap<RoomId, HashSet<ConnectionId>>,
}

/// WebSocket を使った MessagePusher 実装
pub struct WebSocketMessagePusher {
    registry: Mutex<Registry>,
}

impl WebSocketMessagePusher {
    /// 新しい WebSocketMessagePusher を作成（空のレジストリで初期化）
    pub fn new() -> Self {
        Self {
            registry: Mutex::new(Registry::default()),
        }
    }
}

impl Default for WebSocketMessagePusher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_connection(&self, connection_id: ConnectionId, sender: PusherChannel) {
        let mut registry = self.registry.lock().await;
        registry.clients.insert(connection_id, sender);
        tracing::debug!("Connection '{}' registered to MessagePusher", connection_id);
    }

    async fn unregister_connection(&self, connection_id: &ConnectionId) {
        let mut registry = self.registry.lock().await;
        registry.clients.remove(connection_id);
        for group in registry.groups.values_mut() {
            group.remove(connection_id);
        }
        tracing::debug!(
            "Connection '{}' unregistered from MessagePusher",
            connection_id
        );
    }

    async fn subscribe(&self, connection_id: ConnectionId, room_id: RoomId) {
        let mut registry = self.registry.lock().await;
        tracing::debug!(
            "Connection '{}' subscribed to room '{}'",
            connection_id,
            room_id
        );
        registry.groups.entry(room_id).or_default().insert(connection_id);
    }

    async fn drop_group(&self, room_id: &RoomId) {
        let mut registry = self.registry.lock().await;
        registry.groups.remove(room_id);
        tracing::debug!("Broadcast group for room '{}' dropped", room_id);
    }

    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        content: &str,
    ) -> Result<(), MessagePushError> {
        let registry = self.registry.lock().await;

        if let Some(sender) = registry.clients.get(connection_id) {
            sender
                .send(content.to_string())
                .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
            tracing::debug!("Pushed message to connection '{}'", connection_id);
            Ok(())
        } else {
            Err(MessagePushError::ConnectionNotFound(
                connection_id.to_string(),
            ))
        }
    }

    async fn publish(&self, room_id: &RoomId, content: &str) {
        let registry = self.registry.lock().await;

        let Some(group) = registry.groups.get(room_id) else {
            // 購読者のいないルームへの publish は no-op
            tracing::debug!("No broadcast group for room '{}', skipping publish", room_id);
            return;
        };

        for connection_id in group {
            if let Some(sender) = registry.clients.get(connection_id) {
                // publish では一部の送信失敗を許容
                if let Err(e) = sender.send(content.to_string()) {
                    tracing::warn!(
                        "Failed to push message to connection '{}': {}",
                        connection_id,
                        e
                    );
                }
            } else {
                tracing::warn!(
                    "Connection '{}' in group '{}' is not registered, skipping",
                    connection_id,
                    room_id
                );
            }
        }
        tracing::debug!("Published message to room '{}'", room_id);
    }
}

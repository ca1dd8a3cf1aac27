//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! `RoomId` をキーとする HashMap をインメモリテーブルとして使用します。
//!
//! ## 排他制御
//!
//! テーブル全体を 1 つの `tokio::sync::Mutex` で保護します。各操作は
//! 1 回のクリティカルセクションで完結するため、1 つのルームへの変更は
//! 並行する読み取りから常に原子的に観測されます。特に `join_room` の
//! メンバー追加と履歴スナップショットは同一ロック内で行われます。
//!
//! ルームは明示的に揮発性です。プロセス起動時に空で初期化され、
//! 再起動・クラッシュで全て失われます。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ChatMessage, ConnectionId, JoinSnapshot, RepositoryError, Room, RoomId, RoomRepository,
    Username,
};

/// インメモリ Room Repository 実装
pub struct InMemoryRoomRepository {
    /// 稼働中のルームテーブル
    rooms: Mutex<HashMap<RoomId, Room>>,
}

impl InMemoryRoomRepository {
    /// 新しい InMemoryRoomRepository を作成（空のテーブルで初期化）
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn insert_room(&self, room: Room) {
        let mut rooms = self.rooms.lock().await;
        if let Some(replaced) = rooms.insert(room.id.clone(), room) {
            // 衝突チェックは行わない仕様。後勝ちで上書きし、痕跡だけ残す
            tracing::warn!(
                "Room id '{}' collided with an active room; previous room replaced",
                replaced.id
            );
        }
    }

    async fn join_room(
        &self,
        room_id: &RoomId,
        username: Username,
    ) -> Result<JoinSnapshot, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .get_mut(room_id)
            .ok_or(RepositoryError::RoomNotFound)?;
        room.add_member(username)
            .map_err(|_| RepositoryError::RoomFull)?;

        // メンバー追加と同一ロック内でスナップショットを採取する
        Ok(JoinSnapshot {
            members: room.members.clone(),
            history: room.messages.iter().cloned().collect(),
        })
    }

    async fn append_message(
        &self,
        room_id: &RoomId,
        message: ChatMessage,
    ) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .get_mut(room_id)
            .ok_or(RepositoryError::RoomNotFound)?;
        room.add_message(message);
        Ok(())
    }

    async fn remove_rooms_hosted_by(&self, connection_id: &ConnectionId) -> Vec<RoomId> {
        let mut rooms = self.rooms.lock().await;
        let closed: Vec<RoomId> = rooms
            .values()
            .filter(|room| room.is_hosted_by(connection_id))
            .map(|room| room.id.clone())
            .collect();
        for room_id in &closed {
            rooms.remove(room_id);
        }
        closed
    }

    async fn get_rooms(&self) -> Vec<Room> {
        let rooms = self.rooms.lock().await;
        rooms.values().cloned().collect()
    }

    async fn count_rooms(&self) -> usize {
        let rooms = self.rooms.lock().await;
        rooms.len()
    }
}

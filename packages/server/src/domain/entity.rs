//! エンティティ定義
//!
//! リスニングルーム（`Room`）とチャットメッセージ（`ChatMessage`）の
//! ドメインモデルを定義します。
//!
//! ## 不変条件
//!
//! - `members` は参加順の表示名リストで、最大 4 名
//! - `messages` は到着順のチャット履歴で、最大 50 件（超過時は先頭から破棄）
//! - `host` はルームを作成した接続の ID。メンバー名リストとは独立したキーで、
//!   ホスト管理のロジックが名前リストへ追加・削除を行うことはない

use std::collections::VecDeque;

use thiserror::Error;

use super::value_object::{ConnectionId, MessageContent, RoomId, Timestamp, Username};

/// ルームの参加人数上限
pub const ROOM_MEMBER_CAPACITY: usize = 4;

/// ルームが保持するチャット履歴の上限
pub const ROOM_MESSAGE_CAPACITY: usize = 50;

/// Room エンティティ操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    /// 参加人数の上限超過
    #[error("room is full")]
    MemberCapacityExceeded,
}

/// チャットメッセージ
///
/// サーバー到着時に採番されたタイムスタンプを持ち、作成後は不変です。
/// 履歴の並び順（= 後から参加した人への再生順）はサーバー到着順です。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub username: Username,
    pub content: MessageContent,
    pub sent_at: Timestamp,
}

impl ChatMessage {
    pub fn new(username: Username, content: MessageContent, sent_at: Timestamp) -> Self {
        Self {
            username,
            content,
            sent_at,
        }
    }
}

/// リスニングルーム
#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    /// ルームを終了させる権限を持つホスト接続
    pub host: ConnectionId,
    /// 参加順の表示名リスト（名前の重複を許容）
    pub members: Vec<Username>,
    /// チャット履歴（到着順、上限超過時は最古から破棄）
    pub messages: VecDeque<ChatMessage>,
    pub created_at: Timestamp,
}

impl Room {
    /// 新しいルームを作成する
    ///
    /// 作成者の表示名が最初のメンバーとして登録されます。
    pub fn new(id: RoomId, host: ConnectionId, host_name: Username, created_at: Timestamp) -> Self {
        Self {
            id,
            host,
            members: vec![host_name],
            messages: VecDeque::new(),
            created_at,
        }
    }

    /// メンバーを追加する
    ///
    /// 参加人数が上限に達している場合は `RoomError::MemberCapacityExceeded` を
    /// 返し、メンバーリストは変更されません。
    pub fn add_member(&mut self, username: Username) -> Result<(), RoomError> {
        if self.members.len() >= ROOM_MEMBER_CAPACITY {
            return Err(RoomError::MemberCapacityExceeded);
        }
        self.members.push(username);
        Ok(())
    }

    /// チャットメッセージを履歴に追加する
    ///
    /// 履歴が上限に達している場合は最古のメッセージを破棄してから追加します。
    pub fn add_message(&mut self, message: ChatMessage) {
        if self.messages.len() >= ROOM_MESSAGE_CAPACITY {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }

    /// 指定した接続がこのルームのホストかどうか
    pub fn is_hosted_by(&self, connection_id: &ConnectionId) -> bool {
        self.host == *connection_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::RoomIdFactory;

    fn create_test_room(host_name: &str) -> Room {
        Room::new(
            RoomIdFactory::generate(),
            ConnectionId::generate(),
            Username::new(host_name.to_string()),
            Timestamp::new(1000),
        )
    }

    fn create_test_message(username: &str, content: &str, sent_at: i64) -> ChatMessage {
        ChatMessage::new(
            Username::new(username.to_string()),
            MessageContent::new(content.to_string()),
            Timestamp::new(sent_at),
        )
    }

    #[test]
    fn test_new_room_has_creator_as_only_member() {
        // テスト項目: 作成直後のルームは作成者のみをメンバーとして持つ
        // given (前提条件):

        // when (操作):
        let room = create_test_room("alice");

        // then (期待する結果):
        assert_eq!(room.members.len(), 1);
        assert_eq!(room.members[0].as_str(), "alice");
        assert!(room.messages.is_empty());
    }

    #[test]
    fn test_add_member_keeps_join_order() {
        // テスト項目: メンバーが参加順に追加される
        // given (前提条件):
        let mut room = create_test_room("alice");

        // when (操作):
        room.add_member(Username::new("bob".to_string())).unwrap();
        room.add_member(Username::new("carol".to_string())).unwrap();

        // then (期待する結果):
        let names: Vec<&str> = room.members.iter().map(|m| m.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_add_member_allows_duplicate_names() {
        // テスト項目: 同じ表示名のメンバーを重複して追加できる
        // given (前提条件):
        let mut room = create_test_room("alice");

        // when (操作):
        let result = room.add_member(Username::new("alice".to_string()));

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(room.members.len(), 2);
    }

    #[test]
    fn test_add_member_fails_at_capacity_and_leaves_members_unchanged() {
        // テスト項目: 5 人目の参加はエラーになり、メンバーリストは変化しない
        // given (前提条件):
        let mut room = create_test_room("alice");
        room.add_member(Username::new("bob".to_string())).unwrap();
        room.add_member(Username::new("carol".to_string())).unwrap();
        room.add_member(Username::new("dave".to_string())).unwrap();
        assert_eq!(room.members.len(), ROOM_MEMBER_CAPACITY);

        // when (操作):
        let result = room.add_member(Username::new("eve".to_string()));

        // then (期待する結果):
        assert_eq!(result, Err(RoomError::MemberCapacityExceeded));
        assert_eq!(room.members.len(), ROOM_MEMBER_CAPACITY);
        assert!(room.members.iter().all(|m| m.as_str() != "eve"));
    }

    #[test]
    fn test_add_message_appends_in_arrival_order() {
        // テスト項目: メッセージが到着順に履歴へ追加される
        // given (前提条件):
        let mut room = create_test_room("alice");

        // when (操作):
        room.add_message(create_test_message("alice", "first", 1));
        room.add_message(create_test_message("bob", "second", 2));

        // then (期待する結果):
        assert_eq!(room.messages.len(), 2);
        assert_eq!(room.messages[0].content.as_str(), "first");
        assert_eq!(room.messages[1].content.as_str(), "second");
    }

    #[test]
    fn test_add_message_evicts_oldest_beyond_capacity() {
        // テスト項目: 55 件送信すると履歴は 50 件になり、6 件目から 55 件目が残る
        // given (前提条件):
        let mut room = create_test_room("alice");

        // when (操作):
        for i in 1..=55 {
            room.add_message(create_test_message("alice", &format!("msg-{i}"), i as i64));
        }

        // then (期待する結果):
        assert_eq!(room.messages.len(), ROOM_MESSAGE_CAPACITY);
        assert_eq!(room.messages.front().unwrap().content.as_str(), "msg-6");
        assert_eq!(room.messages.back().unwrap().content.as_str(), "msg-55");
        // 到着順が保たれている
        for (offset, message) in room.messages.iter().enumerate() {
            assert_eq!(message.content.as_str(), format!("msg-{}", offset + 6));
        }
    }

    #[test]
    fn test_is_hosted_by_matches_only_the_creating_connection() {
        // テスト項目: ホスト判定が作成時の接続 ID にのみ一致する
        // given (前提条件):
        let host = ConnectionId::generate();
        let other = ConnectionId::generate();
        let room = Room::new(
            RoomIdFactory::generate(),
            host,
            Username::new("alice".to_string()),
            Timestamp::new(1000),
        );

        // then (期待する結果):
        assert!(room.is_hosted_by(&host));
        assert!(!room.is_hosted_by(&other));
    }
}

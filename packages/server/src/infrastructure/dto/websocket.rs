//! WebSocket イベントの DTO
//!
//! クライアントとの間で交換する全てのイベントを、`type` フィールドで
//! タグ付けした明示的なバリアント型として定義します。必須フィールドの
//! 欠落はデシリアライズの失敗になり、Dispatcher 側で no-op として
//! 扱われます（未定義アクセスに頼らない）。
//!
//! ワイヤ形式の例:
//!
//! ```json
//! {"type": "join-room", "roomId": "x7x2pq", "username": "alice"}
//! {"type": "sync-play", "songUrl": "https://…/song.mp3", "time": 42.5}
//! ```

use serde::{Deserialize, Serialize};

/// クライアントから受信するイベント
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ClientEvent {
    /// ルーム作成（作成者がホストになる）
    CreateRoom { username: String },
    /// ルーム参加
    JoinRoom { room_id: String, username: String },
    /// 再生開始の同期イベント
    PlaySong {
        room_id: String,
        song_url: String,
        time: f64,
    },
    /// 一時停止の同期イベント
    PauseSong { room_id: String },
    /// チャットメッセージ送信
    SendMessage {
        room_id: String,
        username: String,
        message: String,
    },
}

/// クライアントへ送信するイベント
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ServerEvent {
    /// ルーム作成の完了通知（作成者のみ）
    RoomCreated { room_id: String },
    /// 参加時のチャット履歴再生（参加者のみ）
    ChatHistory { messages: Vec<ChatMessageDto> },
    /// 参加失敗の通知（参加を試みた接続のみ）
    ErrorMessage { message: String },
    /// メンバーリストの更新通知（参加者を含む全メンバー）
    UserJoined { users: Vec<String> },
    /// 再生開始の同期（送信者を含む全メンバー）
    SyncPlay { song_url: String, time: f64 },
    /// 一時停止の同期（全メンバー）
    SyncPause,
    /// 新着チャットメッセージ（送信者を含む全メンバー）
    NewMessage {
        username: String,
        message: String,
        timestamp: String,
    },
    /// ホスト切断によるルーム終了通知（全メンバー）
    RoomClosed,
}

/// チャットメッセージの DTO
///
/// `timestamp` はサーバー採番の RFC 3339 文字列（UTC、ミリ秒精度）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageDto {
    pub username: String,
    pub message: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_event_create_room_deserializes() {
        // テスト項目: create-room イベントが正しくパースされる
        // given (前提条件):
        let raw = r#"{"type":"create-room","username":"alice"}"#;

        // when (操作):
        let event: ClientEvent = serde_json::from_str(raw).unwrap();

        // then (期待する結果):
        assert!(matches!(event, ClientEvent::CreateRoom { username } if username == "alice"));
    }

    #[test]
    fn test_client_event_play_song_deserializes_camel_case_fields() {
        // テスト項目: play-song イベントの camelCase フィールドがパースされる
        // given (前提条件):
        let raw = r#"{"type":"play-song","roomId":"x7x2pq","songUrl":"https://cdn.example.com/a.mp3","time":42.5}"#;

        // when (操作):
        let event: ClientEvent = serde_json::from_str(raw).unwrap();

        // then (期待する結果):
        match event {
            ClientEvent::PlaySong {
                room_id,
                song_url,
                time,
            } => {
                assert_eq!(room_id, "x7x2pq");
                assert_eq!(song_url, "https://cdn.example.com/a.mp3");
                assert_eq!(time, 42.5);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_client_event_with_missing_required_field_is_rejected() {
        // テスト項目: 必須フィールドが欠落したイベントはパースに失敗する
        // given (前提条件):
        let raw = r#"{"type":"join-room","roomId":"x7x2pq"}"#;

        // when (操作):
        let result = serde_json::from_str::<ClientEvent>(raw);

        // then (期待する結果):
        assert!(result.is_err());
    }

    #[test]
    fn test_client_event_with_unknown_type_is_rejected() {
        // テスト項目: 未知のイベント種別はパースに失敗する
        // given (前提条件):
        let raw = r#"{"type":"self-destruct","roomId":"x7x2pq"}"#;

        // when (操作):
        let result = serde_json::from_str::<ClientEvent>(raw);

        // then (期待する結果):
        assert!(result.is_err());
    }

    #[test]
    fn test_server_event_new_message_serializes_to_wire_format() {
        // テスト項目: new-message イベントが期待するワイヤ形式になる
        // given (前提条件):
        let event = ServerEvent::NewMessage {
            username: "alice".to_string(),
            message: "hi".to_string(),
            timestamp: "2023-01-01T00:00:00.000Z".to_string(),
        };

        // when (操作):
        let value = serde_json::to_value(&event).unwrap();

        // then (期待する結果):
        assert_eq!(
            value,
            json!({
                "type": "new-message",
                "username": "alice",
                "message": "hi",
                "timestamp": "2023-01-01T00:00:00.000Z",
            })
        );
    }

    #[test]
    fn test_server_event_sync_pause_serializes_with_tag_only() {
        // テスト項目: ペイロードを持たない sync-pause がタグのみで直列化される
        // given (前提条件):
        let event = ServerEvent::SyncPause;

        // when (操作):
        let value = serde_json::to_value(&event).unwrap();

        // then (期待する結果):
        assert_eq!(value, json!({"type": "sync-pause"}));
    }

    #[test]
    fn test_server_event_room_created_uses_camel_case_room_id() {
        // テスト項目: room-created の roomId フィールドが camelCase で直列化される
        // given (前提条件):
        let event = ServerEvent::RoomCreated {
            room_id: "x7x2pq".to_string(),
        };

        // when (操作):
        let value = serde_json::to_value(&event).unwrap();

        // then (期待する結果):
        assert_eq!(value, json!({"type": "room-created", "roomId": "x7x2pq"}));
    }
}

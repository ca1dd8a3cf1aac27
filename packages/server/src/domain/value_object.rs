//! 値オブジェクト定義
//!
//! ルーム・接続・楽曲を識別するための値オブジェクトを定義します。
//! 仕様上、ユーザー名とメッセージ内容にはバリデーションを行わない
//! （重複・空文字・長さ制限なし）ため、コンストラクタは全て失敗しません。

use std::fmt;

use uuid::Uuid;

/// ルーム ID の文字数
const ROOM_ID_LEN: usize = 6;

/// ルーム ID に使用する文字（英小文字 + 数字の 36 文字）
const ROOM_ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// 接続 ID（サーバー側で採番するトランスポートレベルの識別子）
///
/// WebSocket 接続ごとに 1 つ生成され、接続が生きている間だけ有効です。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// 新しい接続 ID を採番する
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ルーム ID（短い不透明な文字列）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// ルーム ID のファクトリ
///
/// 36 文字のアルファベットから 6 文字のランダムな ID を生成します。
/// 稼働中のルームとの衝突チェックは行いません（衝突時は後勝ちで上書き）。
pub struct RoomIdFactory;

impl RoomIdFactory {
    /// 新しいルーム ID を生成する
    pub fn generate() -> RoomId {
        let entropy = Uuid::new_v4();
        let id: String = entropy
            .as_bytes()
            .iter()
            .take(ROOM_ID_LEN)
            .map(|byte| ROOM_ID_ALPHABET[*byte as usize % ROOM_ID_ALPHABET.len()] as char)
            .collect();
        RoomId::new(id)
    }
}

/// 表示名（参加者のユーザー名）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    pub fn new(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// チャットメッセージの本文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContent(String);

impl MessageContent {
    pub fn new(content: String) -> Self {
        Self(content)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// タイムスタンプ（UTC エポックミリ秒、サーバー採番）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// 楽曲 ID（カタログレコードの識別子）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SongId(Uuid);

impl SongId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

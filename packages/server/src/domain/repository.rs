//! Repository trait 定義
//!
//! ドメイン層が必要とするルームストアのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;
use thiserror::Error;

use super::{
    entity::{ChatMessage, Room},
    value_object::{ConnectionId, RoomId, Username},
};

/// Repository 操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// 対象のルームが存在しない
    #[error("room not found")]
    RoomNotFound,
    /// ルームの参加人数が上限に達している
    #[error("room is full")]
    RoomFull,
}

/// 参加成功時に返すスナップショット
///
/// メンバー追加と同一のクリティカルセクション内で採取されるため、
/// `history` は参加した瞬間のルームのチャット履歴と正確に一致します。
#[derive(Debug, Clone)]
pub struct JoinSnapshot {
    /// 参加者追加後の表示名リスト（参加順）
    pub members: Vec<Username>,
    /// 参加時点のチャット履歴（到着順）
    pub history: Vec<ChatMessage>,
}

/// Room Repository trait
///
/// 稼働中のルームを `RoomId` で引くインメモリテーブルへのインターフェース。
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には
/// 依存しません。
///
/// ## 排他制御
///
/// 1 つのルームに対する全ての変更（メンバー追加・メッセージ追加・ホスト切断
/// によるルーム削除）は、並行する読み取りから原子的に観測されなければ
/// なりません。部分的な追加が見えることはありません。
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// ルームを登録する
    ///
    /// ID の衝突チェックは行いません。生成済み ID が稼働中のルームと衝突した
    /// 場合は黙って上書きします（仕様上未処理の稀なケース）。
    async fn insert_room(&self, room: Room);

    /// ルームに参加する
    ///
    /// 成功時はメンバー追加後のスナップショットを返します。
    /// ルームが存在しない場合は `RoomNotFound`、満室の場合は `RoomFull`。
    async fn join_room(
        &self,
        room_id: &RoomId,
        username: Username,
    ) -> Result<JoinSnapshot, RepositoryError>;

    /// チャットメッセージをルームの履歴に追加する
    ///
    /// 履歴が上限に達している場合は最古のメッセージを破棄してから追加します。
    async fn append_message(
        &self,
        room_id: &RoomId,
        message: ChatMessage,
    ) -> Result<(), RepositoryError>;

    /// 指定した接続がホストであるルームを全て削除し、削除した ID を返す
    ///
    /// ホスト切断時の掃き出しに使用します。非ホストのメンバーが切断しても
    /// ルームは変更されません（表示名リストの剪定は行わない）。
    async fn remove_rooms_hosted_by(&self, connection_id: &ConnectionId) -> Vec<RoomId>;

    /// 稼働中の全てのルームを取得する（診断用）
    async fn get_rooms(&self) -> Vec<Room>;

    /// 稼働中のルーム数を取得する
    async fn count_rooms(&self) -> usize;
}

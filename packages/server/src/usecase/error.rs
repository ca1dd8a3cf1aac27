//! UseCase 層のエラー定義
//!
//! `JoinError` の Display 文字列はそのまま `error-message` イベントの
//! ペイロードとしてクライアントに届くため、文言を変更する場合は
//! フロントエンドとの互換性に注意すること。

use thiserror::Error;

use crate::domain::RepositoryError;

/// ルーム参加のエラー
///
/// どちらも回復可能で、参加を試みた接続にのみ通知されます。
/// 接続は切断されず、他のルームにも影響しません。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinError {
    /// 対象のルームが存在しない（未作成、またはホスト切断で終了済み）
    #[error("Room not found!")]
    RoomNotFound,
    /// ルームが満室（4 名）
    #[error("Room is full!")]
    RoomFull,
}

impl From<RepositoryError> for JoinError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::RoomNotFound => JoinError::RoomNotFound,
            RepositoryError::RoomFull => JoinError::RoomFull,
        }
    }
}

//! 楽曲カタログの定義
//!
//! ルームで再生する楽曲のメタデータレコードと、カタログストアへの
//! インターフェースを定義します。音源・カバー画像のバイナリは外部の
//! ストレージにホストされている前提で、ここでは URL をメタデータとして
//! 保持するだけです。

use async_trait::async_trait;
use thiserror::Error;

use super::value_object::{SongId, Timestamp};

/// カタログ操作のエラー
#[derive(Debug, Error)]
pub enum CatalogError {
    /// ストアが利用できない
    #[error("song catalog unavailable: {0}")]
    StoreUnavailable(String),
}

/// 楽曲レコード
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub artist: String,
    /// ホスト済み音源の URL
    pub url: String,
    /// ホスト済みカバー画像の URL
    pub cover: String,
    pub genre: Option<String>,
    /// 再生時間（秒）
    pub duration: Option<f64>,
    pub created_at: Timestamp,
}

/// 登録リクエスト（ID・作成日時はサーバー側で採番）
#[derive(Debug, Clone)]
pub struct NewSong {
    pub title: String,
    pub artist: String,
    pub url: String,
    pub cover: String,
    pub genre: Option<String>,
    pub duration: Option<f64>,
}

/// Song Catalog trait
///
/// 楽曲メタデータの外部コラボレーターへのインターフェース。
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装
/// （インメモリ、将来的にはドキュメントストア）には依存しません。
#[async_trait]
pub trait SongCatalog: Send + Sync {
    /// 楽曲レコードを登録する
    async fn add_song(&self, song: Song) -> Result<(), CatalogError>;

    /// 全ての楽曲レコードを作成日時の降順（新しい順）で取得する
    async fn list_songs(&self) -> Result<Vec<Song>, CatalogError>;
}

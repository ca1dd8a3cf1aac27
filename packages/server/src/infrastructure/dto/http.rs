//! HTTP API の DTO
//!
//! 楽曲カタログのリクエスト/レスポンスと、診断用のルーム一覧の DTO を
//! 定義します。レスポンスのエンベロープ（`success` / `count`）は既存の
//! フロントエンドが期待する形に合わせています。

use serde::{Deserialize, Serialize};

/// 楽曲登録リクエスト
///
/// 音源・カバー画像はアップロード済みの URL を受け取る。
#[derive(Debug, Clone, Deserialize)]
pub struct UploadSongRequest {
    pub title: String,
    pub artist: String,
    pub url: String,
    pub cover: String,
    pub genre: Option<String>,
    pub duration: Option<f64>,
}

/// 楽曲レコードの DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongDto {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub url: String,
    pub cover: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    pub created_at: String,
}

/// 楽曲登録レスポンス
#[derive(Debug, Clone, Serialize)]
pub struct UploadSongResponse {
    pub success: bool,
    pub song: SongDto,
}

/// 楽曲一覧レスポンス
#[derive(Debug, Clone, Serialize)]
pub struct SongListResponse {
    pub success: bool,
    pub count: usize,
    pub songs: Vec<SongDto>,
}

/// 稼働中ルームの概要 DTO（診断用）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummaryDto {
    pub id: String,
    pub host: String,
    pub members: Vec<String>,
    pub message_count: usize,
    pub created_at: String,
}

//! InMemory Song Catalog 実装
//!
//! ドメイン層が定義する SongCatalog trait の具体的な実装。
//! Mutex で保護した Vec をインメモリストアとして使用します。
//! ドキュメントストア実装へ差し替える際も trait の契約
//! （作成日時の降順で一覧を返す）は変わりません。

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{CatalogError, Song, SongCatalog};

/// インメモリ Song Catalog 実装
pub struct InMemorySongCatalog {
    songs: Mutex<Vec<Song>>,
}

impl InMemorySongCatalog {
    /// 新しい InMemorySongCatalog を作成（空のストアで初期化）
    pub fn new() -> Self {
        Self {
            songs: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemorySongCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SongCatalog for InMemorySongCatalog {
    async fn add_song(&self, song: Song) -> Result<(), CatalogError> {
        let mut songs = self.songs.lock().await;
        songs.push(song);
        Ok(())
    }

    async fn list_songs(&self) -> Result<Vec<Song>, CatalogError> {
        let songs = self.songs.lock().await;
        let mut listed: Vec<Song> = songs.clone();
        // 作成日時の降順（新しい順）
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }
}

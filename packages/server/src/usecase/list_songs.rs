//! UseCase: 楽曲一覧取得処理

use std::sync::Arc;

use crate::domain::{CatalogError, Song, SongCatalog};

/// 楽曲一覧取得のユースケース
pub struct ListSongsUseCase {
    /// SongCatalog（カタログストアの抽象化）
    catalog: Arc<dyn SongCatalog>,
}

impl ListSongsUseCase {
    /// 新しい ListSongsUseCase を作成
    pub fn new(catalog: Arc<dyn SongCatalog>) -> Self {
        Self { catalog }
    }

    /// 全ての楽曲を作成日時の降順（新しい順）で取得
    pub async fn execute(&self) -> Result<Vec<Song>, CatalogError> {
        self.catalog.list_songs().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SongId, Timestamp};
    use crate::infrastructure::repository::InMemorySongCatalog;

    fn create_test_song(title: &str, created_at: i64) -> Song {
        Song {
            id: SongId::generate(),
            title: title.to_string(),
            artist: "Test Artist".to_string(),
            url: "https://cdn.example.com/songs/test.mp3".to_string(),
            cover: "https://cdn.example.com/covers/test.jpg".to_string(),
            genre: None,
            duration: None,
            created_at: Timestamp::new(created_at),
        }
    }

    #[tokio::test]
    async fn test_list_songs_returns_newest_first() {
        // テスト項目: 一覧が作成日時の降順で返される
        // given (前提条件):
        let catalog = Arc::new(InMemorySongCatalog::new());
        let usecase = ListSongsUseCase::new(catalog.clone());
        catalog
            .add_song(create_test_song("Older", 1000))
            .await
            .unwrap();
        catalog
            .add_song(create_test_song("Newer", 2000))
            .await
            .unwrap();

        // when (操作):
        let songs = usecase.execute().await.unwrap();

        // then (期待する結果):
        let titles: Vec<&str> = songs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Newer", "Older"]);
    }
}

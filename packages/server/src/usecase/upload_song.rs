//! UseCase: 楽曲登録処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - UploadSongUseCase::execute() メソッド
//! - 楽曲 ID と作成日時のサーバー採番、カタログへの登録
//!
//! ### なぜこのテストが必要か
//! - ID と作成日時はサーバー採番が契約（クライアントは指定できない）
//! - 登録したレコードがそのまま一覧に現れることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系: 必須メタデータ + 任意メタデータ（ジャンル・再生時間）の登録

use std::sync::Arc;

use sopify_shared::time::Clock;

use crate::domain::{CatalogError, NewSong, Song, SongCatalog, SongId, Timestamp};

/// 楽曲登録のユースケース
pub struct UploadSongUseCase {
    /// SongCatalog（カタログストアの抽象化）
    catalog: Arc<dyn SongCatalog>,
    /// Clock（作成日時の採番）
    clock: Arc<dyn Clock>,
}

impl UploadSongUseCase {
    /// 新しい UploadSongUseCase を作成
    pub fn new(catalog: Arc<dyn SongCatalog>, clock: Arc<dyn Clock>) -> Self {
        Self { catalog, clock }
    }

    /// 楽曲登録を実行
    ///
    /// # Arguments
    ///
    /// * `new_song` - 登録する楽曲のメタデータ（音源・カバーはホスト済み URL）
    ///
    /// # Returns
    ///
    /// * `Ok(Song)` - 登録されたレコード（ID・作成日時はサーバー採番）
    /// * `Err(CatalogError)` - カタログストアが利用できない
    pub async fn execute(&self, new_song: NewSong) -> Result<Song, CatalogError> {
        let song = Song {
            id: SongId::generate(),
            title: new_song.title,
            artist: new_song.artist,
            url: new_song.url,
            cover: new_song.cover,
            genre: new_song.genre,
            duration: new_song.duration,
            created_at: Timestamp::new(self.clock.now_utc_millis()),
        };

        self.catalog.add_song(song.clone()).await?;
        tracing::info!("Song '{}' by '{}' registered", song.title, song.artist);

        Ok(song)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repository::InMemorySongCatalog;
    use sopify_shared::time::FixedClock;

    fn create_test_new_song(title: &str) -> NewSong {
        NewSong {
            title: title.to_string(),
            artist: "The Waveforms".to_string(),
            url: "https://cdn.example.com/songs/a.mp3".to_string(),
            cover: "https://cdn.example.com/covers/a.jpg".to_string(),
            genre: Some("synthwave".to_string()),
            duration: Some(215.0),
        }
    }

    #[tokio::test]
    async fn test_upload_song_assigns_id_and_created_at() {
        // テスト項目: 楽曲 ID と作成日時がサーバー側で採番される
        // given (前提条件):
        let catalog = Arc::new(InMemorySongCatalog::new());
        let usecase = UploadSongUseCase::new(catalog.clone(), Arc::new(FixedClock::new(1672531200000)));

        // when (操作):
        let song = usecase
            .execute(create_test_new_song("Night Drive"))
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(song.title, "Night Drive");
        assert_eq!(song.created_at.value(), 1672531200000);

        let listed = catalog.list_songs().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], song);
    }

    #[tokio::test]
    async fn test_upload_song_without_optional_fields() {
        // テスト項目: ジャンル・再生時間なしでも登録できる
        // given (前提条件):
        let catalog = Arc::new(InMemorySongCatalog::new());
        let usecase =
            UploadSongUseCase::new(catalog.clone(), Arc::new(FixedClock::new(1672531200000)));
        let new_song = NewSong {
            genre: None,
            duration: None,
            ..create_test_new_song("Untagged")
        };

        // when (操作):
        let song = usecase.execute(new_song).await.unwrap();

        // then (期待する結果):
        assert!(song.genre.is_none());
        assert!(song.duration.is_none());
    }
}

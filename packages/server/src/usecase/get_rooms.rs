//! UseCase: ルーム一覧取得処理（診断用）

use std::sync::Arc;

use crate::domain::{Room, RoomRepository};

/// ルーム一覧取得のユースケース
///
/// 運用時の診断用。ルームの契約はあくまで WebSocket イベント側にあり、
/// この一覧が返す内容に互換性の保証はありません。
pub struct GetRoomsUseCase {
    /// Repository（ルームストアの抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomsUseCase {
    /// 新しい GetRoomsUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 稼働中の全ルームを取得
    pub async fn execute(&self) -> Vec<Room> {
        self.repository.get_rooms().await
    }
}

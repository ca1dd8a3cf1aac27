//! UseCase: ルーム作成処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateRoomUseCase::execute() メソッド
//! - ルームの生成・登録と、作成者のブロードキャストグループへの購読
//!
//! ### なぜこのテストが必要か
//! - 作成者がホストとして記録され、最初のメンバーになることを保証
//! - 作成直後から作成者がルームのブロードキャストを受け取れることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系のみ。ルーム作成は失敗しない（ID 衝突は仕様上未処理）

use std::sync::Arc;

use sopify_shared::time::Clock;

use crate::domain::{
    ConnectionId, MessagePusher, Room, RoomId, RoomIdFactory, RoomRepository, Timestamp, Username,
};

/// ルーム作成のユースケース
pub struct CreateRoomUseCase {
    /// Repository（ルームストアの抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// Clock（作成日時の採番）
    clock: Arc<dyn Clock>,
}

impl CreateRoomUseCase {
    /// 新しい CreateRoomUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            clock,
        }
    }

    /// ルーム作成を実行
    ///
    /// ID を生成し、作成者をホスト兼最初のメンバーとしてルームを登録、
    /// 作成者の接続をルームのブロードキャストグループに加えます。
    ///
    /// # Arguments
    ///
    /// * `host` - 作成者の接続 ID（この接続の切断がルームを終了させる）
    /// * `username` - 作成者の表示名
    ///
    /// # Returns
    ///
    /// 生成されたルーム ID。この操作は失敗しません。
    pub async fn execute(&self, host: ConnectionId, username: Username) -> RoomId {
        let room_id = RoomIdFactory::generate();
        let room = Room::new(
            room_id.clone(),
            host,
            username,
            Timestamp::new(self.clock.now_utc_millis()),
        );

        self.repository.insert_room(room).await;
        self.message_pusher.subscribe(host, room_id.clone()).await;

        room_id
    }
}

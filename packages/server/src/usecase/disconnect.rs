//! UseCase: 接続切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectUseCase::execute() メソッド
//! - ホスト切断時のルーム掃き出し・終了通知・グループ破棄・登録解除
//!
//! ### なぜこのテストが必要か
//! - ホストの切断はそのホストの全ルームを終了させる契約（権限の移譲なし）
//! - 終了通知は残っている全メンバーに 1 回ずつ届く契約
//! - 非ホストの切断ではルームを変更しない契約（表示名リストは剪定しない。
//!   既知の staleness として仕様に明記されたオリジナルの挙動）
//!
//! ### どのような状況を想定しているか
//! - 正常系: ホスト切断によるルーム終了
//! - エッジケース: 非ホストメンバーの切断、どのルームにも属さない接続の切断

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, RoomId, RoomRepository};

/// 接続切断のユースケース
pub struct DisconnectUseCase {
    /// Repository（ルームストアの抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectUseCase {
    /// 新しい DisconnectUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 接続切断を実行
    ///
    /// 切断した接続がホストであるルームを全てストアから取り除き、各ルームの
    /// 残メンバーに終了通知を配信してからグループを破棄します。最後に接続を
    /// レジストリから登録解除します（非ホストとして購読していたグループから
    /// も取り除かれますが、ルームの表示名リストは変更されません）。
    ///
    /// # Arguments
    ///
    /// * `connection_id` - 切断した接続の ID
    /// * `room_closed_message` - 終了通知のメッセージ（JSON）
    ///
    /// # Returns
    ///
    /// 終了したルームの ID リスト（ホストでなかった場合は空）
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        room_closed_message: &str,
    ) -> Vec<RoomId> {
        // ストアから先に取り除くことで、通知と削除の間に参加が割り込まない
        let closed = self.repository.remove_rooms_hosted_by(&connection_id).await;

        for room_id in &closed {
            self.message_pusher
                .publish(room_id, room_closed_message)
                .await;
            self.message_pusher.drop_group(room_id).await;
        }

        self.message_pusher
            .unregister_connection(&connection_id)
            .await;

        closed
    }
}

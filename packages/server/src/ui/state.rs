//! Server state shared across request handlers.

use std::sync::Arc;

use crate::domain::MessagePusher;
use crate::usecase::{
    CreateRoomUseCase, DisconnectUseCase, GetRoomsUseCase, JoinRoomUseCase, ListSongsUseCase,
    SendMessageUseCase, SyncPlaybackUseCase, UploadSongUseCase,
};

/// Shared application state
pub struct AppState {
    /// CreateRoomUseCase（ルーム作成のユースケース）
    pub create_room_usecase: Arc<CreateRoomUseCase>,
    /// JoinRoomUseCase（ルーム参加のユースケース）
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    /// SendMessageUseCase（チャット送信のユースケース）
    pub send_message_usecase: Arc<SendMessageUseCase>,
    /// SyncPlaybackUseCase（再生同期中継のユースケース）
    pub sync_playback_usecase: Arc<SyncPlaybackUseCase>,
    /// DisconnectUseCase（切断処理のユースケース）
    pub disconnect_usecase: Arc<DisconnectUseCase>,
    /// GetRoomsUseCase（ルーム一覧取得のユースケース、診断用）
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    /// UploadSongUseCase（楽曲登録のユースケース）
    pub upload_song_usecase: Arc<UploadSongUseCase>,
    /// ListSongsUseCase（楽曲一覧取得のユースケース）
    pub list_songs_usecase: Arc<ListSongsUseCase>,
    /// MessagePusher（接続レジストリ。接続の登録と直接返信に使用）
    pub message_pusher: Arc<dyn MessagePusher>,
}

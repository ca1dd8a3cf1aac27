//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::domain::MessagePusher;
use crate::usecase::{
    CreateRoomUseCase, DisconnectUseCase, GetRoomsUseCase, JoinRoomUseCase, ListSongsUseCase,
    SendMessageUseCase, SyncPlaybackUseCase, UploadSongUseCase,
};

use super::{
    handler::{
        http::{get_rooms, get_songs, health_check, upload_song},
        websocket::websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Listening-room server
///
/// This struct encapsulates the wired usecases and provides methods to run
/// the server.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     create_room_usecase,
///     join_room_usecase,
///     send_message_usecase,
///     sync_playback_usecase,
///     disconnect_usecase,
///     get_rooms_usecase,
///     upload_song_usecase,
///     list_songs_usecase,
///     message_pusher,
/// );
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    /// CreateRoomUseCase（ルーム作成のユースケース）
    create_room_usecase: Arc<CreateRoomUseCase>,
    /// JoinRoomUseCase（ルーム参加のユースケース）
    join_room_usecase: Arc<JoinRoomUseCase>,
    /// SendMessageUseCase（チャット送信のユースケース）
    send_message_usecase: Arc<SendMessageUseCase>,
    /// SyncPlaybackUseCase（再生同期中継のユースケース）
    sync_playback_usecase: Arc<SyncPlaybackUseCase>,
    /// DisconnectUseCase（切断処理のユースケース）
    disconnect_usecase: Arc<DisconnectUseCase>,
    /// GetRoomsUseCase（ルーム一覧取得のユースケース、診断用）
    get_rooms_usecase: Arc<GetRoomsUseCase>,
    /// UploadSongUseCase（楽曲登録のユースケース）
    upload_song_usecase: Arc<UploadSongUseCase>,
    /// ListSongsUseCase（楽曲一覧取得のユースケース）
    list_songs_usecase: Arc<ListSongsUseCase>,
    /// MessagePusher（接続レジストリ）
    message_pusher: Arc<dyn MessagePusher>,
}

impl Server {
    /// Create a new Server instance
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_room_usecase: Arc<CreateRoomUseCase>,
        join_room_usecase: Arc<JoinRoomUseCase>,
        send_message_usecase: Arc<SendMessageUseCase>,
        sync_playback_usecase: Arc<SyncPlaybackUseCase>,
        disconnect_usecase: Arc<DisconnectUseCase>,
        get_rooms_usecase: Arc<GetRoomsUseCase>,
        upload_song_usecase: Arc<UploadSongUseCase>,
        list_songs_usecase: Arc<ListSongsUseCase>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            create_room_usecase,
            join_room_usecase,
            send_message_usecase,
            sync_playback_usecase,
            disconnect_usecase,
            get_rooms_usecase,
            upload_song_usecase,
            list_songs_usecase,
            message_pusher,
        }
    }

    /// Run the listening-room server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address
    /// or if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app_state = Arc::new(AppState {
            create_room_usecase: self.create_room_usecase,
            join_room_usecase: self.join_room_usecase,
            send_message_usecase: self.send_message_usecase,
            sync_playback_usecase: self.sync_playback_usecase,
            disconnect_usecase: self.disconnect_usecase,
            get_rooms_usecase: self.get_rooms_usecase,
            upload_song_usecase: self.upload_song_usecase,
            list_songs_usecase: self.list_songs_usecase,
            message_pusher: self.message_pusher,
        });

        // Define handlers
        let app = Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/songs", get(get_songs).post(upload_song))
            .route("/api/rooms", get(get_rooms))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        // Start the server
        tracing::info!(
            "Listening-room server listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

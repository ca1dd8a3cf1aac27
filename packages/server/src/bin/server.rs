//! Sopify listening-room server.
//!
//! Coordinates ephemeral listening rooms over WebSocket (playback sync and
//! room chat) and serves the song catalog API.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin sopify-server
//! cargo run --bin sopify-server -- --host 0.0.0.0 --port 3000
//! ```

use std::sync::Arc;

use clap::Parser;
use sopify_server::{
    infrastructure::{
        message_pusher::WebSocketMessagePusher,
        repository::{InMemoryRoomRepository, InMemorySongCatalog},
    },
    ui::Server,
    usecase::{
        CreateRoomUseCase, DisconnectUseCase, GetRoomsUseCase, JoinRoomUseCase, ListSongsUseCase,
        SendMessageUseCase, SyncPlaybackUseCase, UploadSongUseCase,
    },
};
use sopify_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "sopify-server")]
#[command(about = "Sopify listening-room server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Repositories
    // 2. MessagePusher
    // 3. Clock
    // 4. UseCases
    // 5. Server

    // 1. Create Repositories (in-memory; rooms are ephemeral by design)
    let repository = Arc::new(InMemoryRoomRepository::new());
    let catalog = Arc::new(InMemorySongCatalog::new());

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new());

    // 3. Create Clock (server-assigned timestamps)
    let clock = Arc::new(SystemClock);

    // 4. Create UseCases
    let create_room_usecase = Arc::new(CreateRoomUseCase::new(
        repository.clone(),
        message_pusher.clone(),
        clock.clone(),
    ));
    let join_room_usecase = Arc::new(JoinRoomUseCase::new(
        repository.clone(),
        message_pusher.clone(),
    ));
    let send_message_usecase = Arc::new(SendMessageUseCase::new(
        repository.clone(),
        message_pusher.clone(),
        clock.clone(),
    ));
    let sync_playback_usecase = Arc::new(SyncPlaybackUseCase::new(message_pusher.clone()));
    let disconnect_usecase = Arc::new(DisconnectUseCase::new(
        repository.clone(),
        message_pusher.clone(),
    ));
    let get_rooms_usecase = Arc::new(GetRoomsUseCase::new(repository.clone()));
    let upload_song_usecase = Arc::new(UploadSongUseCase::new(catalog.clone(), clock.clone()));
    let list_songs_usecase = Arc::new(ListSongsUseCase::new(catalog.clone()));

    // 5. Create and run the server
    let server = Server::new(
        create_room_usecase,
        join_room_usecase,
        send_message_usecase,
        sync_playback_usecase,
        disconnect_usecase,
        get_rooms_usecase,
        upload_song_usecase,
        list_songs_usecase,
        message_pusher,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

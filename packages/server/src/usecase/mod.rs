//! UseCase 層
//!
//! 1 つのクライアントイベントに対して 1 つのユースケースを定義します。
//! 各ユースケースは Repository / MessagePusher の trait にのみ依存し、
//! トランスポートやストレージの実装には依存しません。

pub mod create_room;
pub mod disconnect;
pub mod error;
pub mod get_rooms;
pub mod join_room;
pub mod list_songs;
pub mod send_message;
pub mod sync_playback;
pub mod upload_song;

pub use create_room::CreateRoomUseCase;
pub use disconnect::DisconnectUseCase;
pub use error::JoinError;
pub use get_rooms::GetRoomsUseCase;
pub use join_room::JoinRoomUseCase;
pub use list_songs::ListSongsUseCase;
pub use send_message::SendMessageUseCase;
pub use sync_playback::SyncPlaybackUseCase;
pub use upload_song::UploadSongUseCase;

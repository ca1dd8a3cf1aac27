//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    domain::NewSong,
    infrastructure::dto::http::{
        RoomSummaryDto, SongDto, SongListResponse, UploadSongRequest, UploadSongResponse,
    },
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get all songs in the catalog, newest first
pub async fn get_songs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SongListResponse>, StatusCode> {
    match state.list_songs_usecase.execute().await {
        Ok(songs) => {
            // Domain Model から DTO への変換
            let songs: Vec<SongDto> = songs.into_iter().map(SongDto::from).collect();
            Ok(Json(SongListResponse {
                success: true,
                count: songs.len(),
                songs,
            }))
        }
        Err(e) => {
            tracing::error!("Failed to list songs: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Register a song metadata record (audio and cover are already-hosted URLs)
pub async fn upload_song(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UploadSongRequest>,
) -> Result<Json<UploadSongResponse>, StatusCode> {
    let new_song = NewSong {
        title: request.title,
        artist: request.artist,
        url: request.url,
        cover: request.cover,
        genre: request.genre,
        duration: request.duration,
    };

    match state.upload_song_usecase.execute(new_song).await {
        Ok(song) => Ok(Json(UploadSongResponse {
            success: true,
            song: SongDto::from(song),
        })),
        Err(e) => {
            tracing::error!("Failed to register song: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// List active rooms (diagnostics; carries no compatibility contract)
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let rooms = state.get_rooms_usecase.execute().await;

    // Domain Model から DTO への変換
    let summaries: Vec<RoomSummaryDto> = rooms.into_iter().map(RoomSummaryDto::from).collect();

    Json(summaries)
}

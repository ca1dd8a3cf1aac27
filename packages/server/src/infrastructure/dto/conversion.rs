//! Conversion logic between DTOs and domain entities.

use sopify_shared::time::timestamp_to_rfc3339;

use crate::domain::{entity, Room, Song};
use crate::infrastructure::dto::http as http_dto;
use crate::infrastructure::dto::websocket as ws_dto;

// ========================================
// Domain Entity → DTO
// ========================================

impl From<entity::ChatMessage> for ws_dto::ChatMessageDto {
    fn from(model: entity::ChatMessage) -> Self {
        Self {
            username: model.username.into_string(),
            message: model.content.into_string(),
            timestamp: timestamp_to_rfc3339(model.sent_at.value()),
        }
    }
}

impl From<Song> for http_dto::SongDto {
    fn from(model: Song) -> Self {
        Self {
            id: model.id.to_string(),
            title: model.title,
            artist: model.artist,
            url: model.url,
            cover: model.cover,
            genre: model.genre,
            duration: model.duration,
            created_at: timestamp_to_rfc3339(model.created_at.value()),
        }
    }
}

impl From<Room> for http_dto::RoomSummaryDto {
    fn from(model: Room) -> Self {
        Self {
            id: model.id.into_string(),
            host: model.host.to_string(),
            members: model
                .members
                .into_iter()
                .map(|member| member.into_string())
                .collect(),
            message_count: model.messages.len(),
            created_at: timestamp_to_rfc3339(model.created_at.value()),
        }
    }
}

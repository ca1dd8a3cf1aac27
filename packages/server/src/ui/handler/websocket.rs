//! WebSocket connection handlers and the room event dispatcher.
//!
//! Each connection gets a server-assigned `ConnectionId`, an outbound pusher
//! task fed by its registry channel, and a receive loop that parses inbound
//! frames into tagged `ClientEvent`s and routes them to the usecases.
//! Malformed frames are logged and dropped so one client's bad input never
//! crashes the shared broadcast loop.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, MessageContent, RoomId, Username},
    infrastructure::dto::websocket::{ChatMessageDto, ClientEvent, ServerEvent},
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// This function handles the outbound message flow: room broadcasts and
/// direct replies (enqueued via the registry channel) are sent to this
/// client's WebSocket connection in FIFO order.
///
/// # Arguments
///
/// * `rx` - Channel receiver for messages addressed to this connection
/// * `sender` - WebSocket sink to send messages to this client
///
/// # Returns
///
/// A `JoinHandle` for the spawned task
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            // Send the message to this client
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    // Server-assigned, transport-level identity for this connection
    let connection_id = ConnectionId::generate();

    // Create a channel for this connection to receive messages
    let (tx, rx) = mpsc::unbounded_channel();
    state
        .message_pusher
        .register_connection(connection_id, tx)
        .await;
    tracing::info!("Connection '{}' established and registered", connection_id);

    let (sender, mut receiver) = socket.split();

    let state_clone = state.clone();

    // Spawn a task to receive events from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    dispatch_event(&state_clone, connection_id, &text).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // Spawn a task to receive messages addressed to this connection and send them
    let mut send_task = pusher_loop(rx, sender);

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Host-departure sweep: every room hosted by this connection is closed
    // for everyone; rooms where it was a plain member are left untouched.
    let room_closed = serde_json::to_string(&ServerEvent::RoomClosed).unwrap();
    let closed_rooms = state
        .disconnect_usecase
        .execute(connection_id, &room_closed)
        .await;
    for room_id in &closed_rooms {
        tracing::info!(
            "Room '{}' closed (host connection '{}' disconnected)",
            room_id,
            connection_id
        );
    }
    tracing::info!(
        "Connection '{}' disconnected and removed from registry",
        connection_id
    );
}

/// Parse one inbound frame and route it to the matching usecase.
///
/// Unknown event types and frames with missing required fields fail to parse
/// and are dropped here with a warning.
async fn dispatch_event(state: &Arc<AppState>, connection_id: ConnectionId, raw: &str) {
    let event = match serde_json::from_str::<ClientEvent>(raw) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(
                "Ignoring malformed event from connection '{}': {}",
                connection_id,
                e
            );
            return;
        }
    };

    match event {
        ClientEvent::CreateRoom { username } => {
            let room_id = state
                .create_room_usecase
                .execute(connection_id, Username::new(username))
                .await;
            tracing::info!("Room '{}' created by connection '{}'", room_id, connection_id);

            let reply = ServerEvent::RoomCreated {
                room_id: room_id.into_string(),
            };
            let reply_json = serde_json::to_string(&reply).unwrap();
            if let Err(e) = state.message_pusher.push_to(&connection_id, &reply_json).await {
                tracing::warn!("Failed to send room-created to '{}': {}", connection_id, e);
            }
        }
        ClientEvent::JoinRoom { room_id, username } => {
            let room_id = RoomId::new(room_id);
            match state
                .join_room_usecase
                .execute(connection_id, &room_id, Username::new(username))
                .await
            {
                Ok(snapshot) => {
                    tracing::info!(
                        "Connection '{}' joined room '{}' ({} members)",
                        connection_id,
                        room_id,
                        snapshot.members.len()
                    );

                    // Replay the chat history to the joiner only, before the
                    // member-list update reaches them through the group.
                    let history = ServerEvent::ChatHistory {
                        messages: snapshot
                            .history
                            .into_iter()
                            .map(ChatMessageDto::from)
                            .collect(),
                    };
                    let history_json = serde_json::to_string(&history).unwrap();
                    if let Err(e) = state
                        .message_pusher
                        .push_to(&connection_id, &history_json)
                        .await
                    {
                        tracing::warn!("Failed to send chat-history to '{}': {}", connection_id, e);
                    }

                    let joined = ServerEvent::UserJoined {
                        users: snapshot
                            .members
                            .into_iter()
                            .map(|member| member.into_string())
                            .collect(),
                    };
                    let joined_json = serde_json::to_string(&joined).unwrap();
                    state
                        .join_room_usecase
                        .broadcast_user_joined(&room_id, &joined_json)
                        .await;
                }
                Err(e) => {
                    tracing::warn!(
                        "Connection '{}' failed to join room '{}': {}",
                        connection_id,
                        room_id,
                        e
                    );

                    let reply = ServerEvent::ErrorMessage {
                        message: e.to_string(),
                    };
                    let reply_json = serde_json::to_string(&reply).unwrap();
                    if let Err(e) = state
                        .message_pusher
                        .push_to(&connection_id, &reply_json)
                        .await
                    {
                        tracing::warn!(
                            "Failed to send error-message to '{}': {}",
                            connection_id,
                            e
                        );
                    }
                }
            }
        }
        ClientEvent::PlaySong {
            room_id,
            song_url,
            time,
        } => {
            let room_id = RoomId::new(room_id);
            let event = ServerEvent::SyncPlay { song_url, time };
            let event_json = serde_json::to_string(&event).unwrap();
            state
                .sync_playback_usecase
                .broadcast_play(&room_id, &event_json)
                .await;
            tracing::debug!("Relayed sync-play to room '{}'", room_id);
        }
        ClientEvent::PauseSong { room_id } => {
            let room_id = RoomId::new(room_id);
            let event_json = serde_json::to_string(&ServerEvent::SyncPause).unwrap();
            state
                .sync_playback_usecase
                .broadcast_pause(&room_id, &event_json)
                .await;
            tracing::debug!("Relayed sync-pause to room '{}'", room_id);
        }
        ClientEvent::SendMessage {
            room_id,
            username,
            message,
        } => {
            let room_id = RoomId::new(room_id);
            let stored = state
                .send_message_usecase
                .execute(
                    &room_id,
                    Username::new(username),
                    MessageContent::new(message),
                )
                .await;

            // None means the room does not resolve; dropped without an error
            if let Some(stored) = stored {
                let dto = ChatMessageDto::from(stored);
                let event = ServerEvent::NewMessage {
                    username: dto.username,
                    message: dto.message,
                    timestamp: dto.timestamp,
                };
                let event_json = serde_json::to_string(&event).unwrap();
                state
                    .send_message_usecase
                    .broadcast_message(&room_id, &event_json)
                    .await;
            }
        }
    }
}

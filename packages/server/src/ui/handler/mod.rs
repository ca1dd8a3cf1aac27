//! Request handlers for the listening-room server.
//!
//! - `websocket`: the room event dispatcher (one connection per client)
//! - `http`: health check, song catalog and room diagnostics

pub mod http;
pub mod websocket;

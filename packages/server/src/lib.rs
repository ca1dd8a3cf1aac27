//! Sopify listening-room server library.
//!
//! This library provides the real-time room coordination subsystem (room
//! lifecycle, playback sync relay, room chat) and the song catalog API for
//! the Sopify application.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

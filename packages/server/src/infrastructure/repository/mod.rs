//! Repository 実装
//!
//! - `inmemory`: インメモリ実装（ルームは仕様上インメモリのみ。カタログは
//!   将来的にドキュメントストア実装へ差し替え可能）

pub mod inmemory;

pub use inmemory::{InMemoryRoomRepository, InMemorySongCatalog};

pub mod catalog;
pub mod room;

pub use catalog::InMemorySongCatalog;
pub use room::InMemoryRoomRepository;
